//! Reddit post relevance filtering and conversion.

use buzzlens_core::{Mention, Platform};
use chrono::DateTime;

use super::reddit::Post;
use crate::classifier::Classifier;

/// Keep a post when the entity name is in its title or the query is in its
/// body. Both checks ignore case.
pub(super) fn is_relevant(title: &str, body: &str, entity_name: &str, query: &str) -> bool {
    title.to_lowercase().contains(&entity_name.to_lowercase())
        || body.to_lowercase().contains(&query.to_lowercase())
}

/// Convert a post into a discussion [`Mention`].
///
/// Returns `None` for posts without a title or any usable link.
pub(super) fn to_mention(post: &Post, query: &str, classifier: &Classifier) -> Option<Mention> {
    let data = &post.data;
    let title = data
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())?;

    let link = data
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| {
            data.permalink
                .as_deref()
                .map(|permalink| format!("https://www.reddit.com{permalink}"))
        })?;

    let body = data.selftext.as_deref().unwrap_or_default();
    let classification = classifier.classify(&format!("{title} {body}"));

    #[allow(clippy::cast_possible_truncation)]
    let published = data
        .created_utc
        .filter(|secs| secs.is_finite())
        .and_then(|secs| DateTime::from_timestamp(secs.floor() as i64, 0));

    Some(Mention {
        platform: Platform::Discussion,
        query: query.to_string(),
        title: title.to_string(),
        link,
        outlet: data.subreddit.as_deref().map(|sub| format!("r/{sub}")),
        published,
        sentiment: classification.label,
        sentiment_percent: classification.magnitude,
    })
}

#[cfg(test)]
mod tests {
    use buzzlens_core::Sentiment;

    use super::super::reddit::PostData;
    use super::*;

    fn post(title: &str, selftext: &str) -> Post {
        Post {
            data: PostData {
                title: Some(title.to_string()),
                selftext: Some(selftext.to_string()),
                url: Some("https://www.reddit.com/r/cars/comments/abc/post/".to_string()),
                permalink: Some("/r/cars/comments/abc/post/".to_string()),
                subreddit: Some("cars".to_string()),
                created_utc: Some(1_741_593_600.0),
            },
        }
    }

    #[test]
    fn entity_name_in_title_is_kept_regardless_of_body() {
        assert!(is_relevant("My TESLA broke down", "", "Tesla", "Tesla issues"));
        assert!(is_relevant("tesla", "unrelated body text", "Tesla", "Tesla reviews"));
    }

    #[test]
    fn query_in_body_is_kept() {
        assert!(is_relevant(
            "Thoughts?",
            "Looking for tesla reviews before buying",
            "Tesla",
            "Tesla reviews"
        ));
    }

    #[test]
    fn neither_match_is_dropped() {
        assert!(!is_relevant(
            "Electric car recommendations",
            "Which EV has the best range?",
            "Tesla",
            "Tesla experience"
        ));
    }

    #[test]
    fn partial_query_in_body_is_not_enough() {
        assert!(!is_relevant(
            "EV issues",
            "My tesla has issues",
            "Model Y",
            "tesla issues with range"
        ));
    }

    #[test]
    fn converts_post_to_discussion_mention() {
        let mention = to_mention(
            &post("Tesla service was terrible", "Waited three weeks."),
            "Tesla customer service",
            &Classifier::default(),
        )
        .expect("post should convert");
        assert_eq!(mention.platform, Platform::Discussion);
        assert_eq!(mention.title, "Tesla service was terrible");
        assert_eq!(mention.link, "https://www.reddit.com/r/cars/comments/abc/post/");
        assert_eq!(mention.outlet.as_deref(), Some("r/cars"));
        assert_eq!(mention.date_label(), "2025-03-10");
        assert_eq!(mention.sentiment, Sentiment::Negative);
    }

    #[test]
    fn falls_back_to_permalink_when_url_missing() {
        let mut p = post("Tesla", "");
        p.data.url = None;
        let mention = to_mention(&p, "Tesla", &Classifier::default()).unwrap();
        assert_eq!(mention.link, "https://www.reddit.com/r/cars/comments/abc/post/");
    }

    #[test]
    fn post_without_title_is_skipped() {
        let p = post("   ", "body");
        assert!(to_mention(&p, "Tesla", &Classifier::default()).is_none());
    }

    #[test]
    fn missing_timestamp_leaves_date_unknown() {
        let mut p = post("Tesla", "");
        p.data.created_utc = None;
        let mention = to_mention(&p, "Tesla", &Classifier::default()).unwrap();
        assert!(mention.published.is_none());
    }

    #[test]
    fn sentiment_uses_title_and_body() {
        let neutral_title = post("Tesla update", "I love it, best car ever");
        let mention = to_mention(&neutral_title, "Tesla", &Classifier::default()).unwrap();
        assert_eq!(mention.sentiment, Sentiment::Positive);
    }
}
