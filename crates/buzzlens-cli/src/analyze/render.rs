//! Plain-text and JSON rendering of an [`AnalysisReport`].

use std::io::Write;

use buzzlens_core::Sentiment;
use buzzlens_sentiment::AnalysisReport;

const TITLE_WIDTH: usize = 60;

/// Write overview metrics, platform and monthly tables, then the first
/// `rows` mentions.
pub(super) fn write_table<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    rows: usize,
) -> std::io::Result<()> {
    writeln!(out, "Keyword: {} ({})", report.keyword, report.entity_type)?;
    writeln!(
        out,
        "Queries: {} news, {} discussion",
        report.queries.news.len(),
        report.queries.discussion.len()
    )?;
    writeln!(out)?;

    if report.mentions.is_empty() {
        writeln!(out, "no data found; try another keyword")?;
        return Ok(());
    }

    let overall = &report.summary.overall;
    writeln!(out, "{:<12}{:<18}{:<18}NEGATIVE", "MENTIONS", "POSITIVE", "NEUTRAL")?;
    writeln!(
        out,
        "{:<12}{:<18}{:<18}{}",
        overall.total,
        count_with_share(overall.positive, overall.share(Sentiment::Positive)),
        count_with_share(overall.neutral, overall.share(Sentiment::Neutral)),
        count_with_share(overall.negative, overall.share(Sentiment::Negative)),
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<12}{:<10}{:<10}{:<10}{:<10}AVG %",
        "PLATFORM", "TOTAL", "POS", "NEU", "NEG"
    )?;
    for breakdown in &report.summary.platforms {
        let c = &breakdown.counts;
        writeln!(
            out,
            "{:<12}{:<10}{:<10}{:<10}{:<10}{:.2}",
            breakdown.platform.to_string(),
            c.total,
            c.positive,
            c.neutral,
            c.negative,
            breakdown.average_percent
        )?;
    }
    writeln!(out)?;

    if !report.summary.monthly.is_empty() {
        writeln!(out, "{:<10}{:<10}{:<10}{:<10}NEG", "MONTH", "TOTAL", "POS", "NEU")?;
        for (month, c) in &report.summary.monthly {
            writeln!(
                out,
                "{:<10}{:<10}{:<10}{:<10}{}",
                month, c.total, c.positive, c.neutral, c.negative
            )?;
        }
    }
    if report.summary.undated > 0 {
        writeln!(out, "{} mention(s) without a date", report.summary.undated)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{:<10}{:<62}{:<10}{:<9}{:<12}LINK",
        "PLATFORM", "TITLE", "SENTIMENT", "PERCENT", "DATE"
    )?;
    for mention in report.mentions.iter().take(rows) {
        writeln!(
            out,
            "{:<10}{:<62}{:<10}{:<9.2}{:<12}{}",
            mention.platform.to_string(),
            truncate(&mention.title, TITLE_WIDTH),
            mention.sentiment.to_string(),
            mention.sentiment_percent,
            mention.date_label(),
            mention.link
        )?;
    }
    if report.mentions.len() > rows {
        writeln!(
            out,
            "... {} more; use --rows or --format json to see all",
            report.mentions.len() - rows
        )?;
    }

    Ok(())
}

/// Write the whole report as pretty-printed JSON.
pub(super) fn write_json<W: Write>(out: &mut W, report: &AnalysisReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn count_with_share(count: usize, share: f64) -> String {
    format!("{count} ({share:.2}%)")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use buzzlens_core::{EntityType, Mention, Platform};
    use buzzlens_sentiment::{expand, Analysis};
    use chrono::{TimeZone, Utc};

    use super::*;

    fn report(mentions: Vec<Mention>) -> AnalysisReport {
        AnalysisReport::from(Analysis {
            keyword: "Zomato".to_string(),
            entity_type: EntityType::Brand,
            queries: expand(EntityType::Brand, "Zomato"),
            mentions,
        })
    }

    fn mention(title: &str, sentiment: Sentiment, percent: f64, dated: bool) -> Mention {
        Mention {
            platform: Platform::News,
            query: "Zomato news".to_string(),
            title: title.to_string(),
            link: format!("https://example.com/{}", title.len()),
            outlet: None,
            published: dated.then(|| Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap()),
            sentiment,
            sentiment_percent: percent,
        }
    }

    fn render(report: &AnalysisReport, rows: usize) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, report, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_report_prints_no_data_hint() {
        let text = render(&report(Vec::new()), 20);
        assert!(text.contains("Queries: 15 news, 10 discussion"));
        assert!(text.contains("no data found; try another keyword"));
        assert!(!text.contains("PLATFORM"));
    }

    #[test]
    fn table_shows_metrics_trend_and_rows() {
        let text = render(
            &report(vec![
                mention("Zomato raises prices, customers unhappy", Sentiment::Negative, 42.15, true),
                mention("Zomato launches new feature", Sentiment::Neutral, 0.0, false),
            ]),
            20,
        );
        assert!(text.contains("1 (50.00%)"));
        assert!(text.contains("2025-03"));
        assert!(text.contains("1 mention(s) without a date"));
        assert!(text.contains("Negative"));
        assert!(text.contains("42.15"));
        assert!(text.contains("Unknown"));
        assert!(text.contains("Reddit"));
    }

    #[test]
    fn rows_limit_truncates_mention_list() {
        let mentions = (0..5)
            .map(|i| mention(&"x".repeat(i + 1), Sentiment::Neutral, 0.0, true))
            .collect();
        let text = render(&report(mentions), 2);
        assert!(text.contains("... 3 more"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "a".repeat(100);
        let cut = truncate(&long, TITLE_WIDTH);
        assert_eq!(cut.chars().count(), TITLE_WIDTH);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate("short", TITLE_WIDTH), "short");
    }

    #[test]
    fn json_output_is_the_full_report() {
        let r = report(vec![mention("t", Sentiment::Positive, 12.5, true)]);
        let mut buf = Vec::new();
        write_json(&mut buf, &r).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["keyword"], "Zomato");
        assert_eq!(value["summary"]["overall"]["positive"], 1);
        assert_eq!(value["mentions"][0]["sentiment"], "Positive");
    }
}
