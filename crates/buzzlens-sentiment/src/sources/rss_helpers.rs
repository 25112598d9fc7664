//! RSS item extraction and date parsing for the news feed.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::SentimentError;

/// One `<item>` pulled from an RSS feed. Title and link are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeedItem {
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) pub_date: Option<String>,
    pub(crate) source: Option<String>,
}

/// Parse an RSS XML feed into at most `max_items` [`FeedItem`]s.
///
/// Items missing a title or link are skipped and do not count toward the cap.
///
/// # Errors
///
/// Returns [`SentimentError::Xml`] if the XML is malformed.
pub(crate) fn parse_rss_items(xml: &str, max_items: usize) -> Result<Vec<FeedItem>, SentimentError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut in_item = false;
    let mut current_tag = String::new();
    let mut title = String::new();
    let mut link = String::new();
    let mut pub_date = String::new();
    let mut source = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("").to_string();
                if name == "item" {
                    in_item = true;
                    title.clear();
                    link.clear();
                    pub_date.clear();
                    source.clear();
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                current_tag.clear();
                if name == "item" && in_item {
                    in_item = false;
                    let trimmed_title = title.trim();
                    let trimmed_link = link.trim();
                    if !trimmed_title.is_empty() && !trimmed_link.is_empty() {
                        items.push(FeedItem {
                            title: trimmed_title.to_string(),
                            link: trimmed_link.to_string(),
                            pub_date: non_empty(&pub_date),
                            source: non_empty(&source),
                        });
                        if items.len() >= max_items {
                            break;
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    let text = e.unescape().unwrap_or_default();
                    append_field(&current_tag, &text, &mut title, &mut link, &mut pub_date, &mut source);
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    append_field(&current_tag, &text, &mut title, &mut link, &mut pub_date, &mut source);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SentimentError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

fn append_field(
    tag: &str,
    text: &str,
    title: &mut String,
    link: &mut String,
    pub_date: &mut String,
    source: &mut String,
) {
    let target = match tag {
        "title" => title,
        "link" => link,
        "pubDate" => pub_date,
        "source" => source,
        _ => return,
    };
    target.push_str(text);
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse an RSS `pubDate` (RFC 2822), accepting RFC 3339 as well.
///
/// Returns `None` for anything else.
pub(crate) fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
