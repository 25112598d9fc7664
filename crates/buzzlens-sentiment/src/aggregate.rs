//! Merging of per-source mentions into one table.

use std::collections::HashSet;

use buzzlens_core::Mention;

/// Concatenate news then discussion mentions and drop repeated
/// `(title, link)` pairs, keeping the first occurrence.
#[must_use]
pub fn combine(news: Vec<Mention>, discussion: Vec<Mention>) -> Vec<Mention> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut combined = Vec::with_capacity(news.len() + discussion.len());
    for mention in news.into_iter().chain(discussion) {
        if seen.insert((mention.title.clone(), mention.link.clone())) {
            combined.push(mention);
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use buzzlens_core::{Platform, Sentiment};

    use super::*;

    fn mention(platform: Platform, query: &str, title: &str, link: &str) -> Mention {
        Mention {
            platform,
            query: query.to_string(),
            title: title.to_string(),
            link: link.to_string(),
            outlet: None,
            published: None,
            sentiment: Sentiment::Neutral,
            sentiment_percent: 0.0,
        }
    }

    fn keys(mentions: &[Mention]) -> Vec<(String, String)> {
        mentions
            .iter()
            .map(|m| (m.title.clone(), m.link.clone()))
            .collect()
    }

    #[test]
    fn empty_inputs_give_empty_table() {
        assert!(combine(Vec::new(), Vec::new()).is_empty());
    }

    #[test]
    fn news_precede_discussion_in_source_order() {
        let news = vec![
            mention(Platform::News, "q", "n1", "l1"),
            mention(Platform::News, "q", "n2", "l2"),
        ];
        let discussion = vec![mention(Platform::Discussion, "q", "d1", "l3")];
        let combined = combine(news, discussion);
        let titles: Vec<&str> = combined.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["n1", "n2", "d1"]);
    }

    #[test]
    fn duplicates_from_overlapping_queries_keep_first() {
        let news = vec![
            mention(Platform::News, "Zomato news", "Same story", "https://a"),
            mention(Platform::News, "Zomato update", "Same story", "https://a"),
            mention(Platform::News, "Zomato update", "Same story", "https://b"),
        ];
        let combined = combine(news, Vec::new());
        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0].query, "Zomato news");
        assert_eq!(combined[1].link, "https://b");
    }

    #[test]
    fn same_title_and_link_across_platforms_is_deduplicated() {
        let news = vec![mention(Platform::News, "q", "Shared", "https://x")];
        let discussion = vec![mention(Platform::Discussion, "q", "Shared", "https://x")];
        let combined = combine(news, discussion);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].platform, Platform::News);
    }

    #[test]
    fn combining_twice_is_idempotent() {
        let a = vec![
            mention(Platform::News, "q1", "t1", "l1"),
            mention(Platform::News, "q2", "t1", "l1"),
            mention(Platform::News, "q2", "t2", "l2"),
        ];
        let b = vec![
            mention(Platform::Discussion, "q3", "t2", "l2"),
            mention(Platform::Discussion, "q3", "t3", "l3"),
        ];
        let once = combine(a, b);
        let twice = combine(once.clone(), once.clone());
        assert_eq!(twice, once);

        let unique: HashSet<_> = keys(&twice).into_iter().collect();
        assert_eq!(unique.len(), twice.len());
    }
}
