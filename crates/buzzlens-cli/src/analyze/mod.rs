//! `analyze` command handler.

mod render;

use buzzlens_core::{AppConfig, EntityType};
use buzzlens_sentiment::{AnalysisReport, Analyzer};
use clap::ValueEnum;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Run one analysis and print the report.
///
/// Ctrl-C while sources are being fetched aborts the run; nothing is printed.
///
/// # Errors
///
/// Returns an error if the keyword is blank, Reddit rejects the configured
/// credentials, the run is interrupted, or stdout cannot be written.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    keyword: &str,
    entity_type: &str,
    format: OutputFormat,
    rows: usize,
) -> anyhow::Result<()> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        anyhow::bail!("please enter a keyword");
    }
    let entity_type = EntityType::parse_lenient(entity_type);

    let analyzer = Analyzer::new(config).await?;

    let analysis = tokio::select! {
        result = analyzer.analyze(keyword, entity_type) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!(keyword, "interrupted; discarding partial results");
            anyhow::bail!("analysis interrupted");
        }
    };

    let report = AnalysisReport::from(analysis);
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Table => render::write_table(&mut stdout, &report, rows)?,
        OutputFormat::Json => render::write_json(&mut stdout, &report)?,
    }
    Ok(())
}
