//! Keyword → per-source search query expansion.

use buzzlens_core::{EntityType, Platform};
use serde::Serialize;

const KEYWORD: &str = "{keyword}";

const BRAND_NEWS: &[&str] = &[
    "{keyword} news",
    "{keyword} reviews",
    "{keyword} product launch",
    "{keyword} update",
    "{keyword} announcement",
    "{keyword} controversy",
    "{keyword} financial results",
    "{keyword} quarterly earnings",
    "{keyword} stock performance",
    "{keyword} revenue report",
    "{keyword} market share",
    "{keyword} partnership",
    "{keyword} acquisition",
    "{keyword} customer feedback",
    "{keyword} sustainability",
];

const BRAND_DISCUSSION: &[&str] = &[
    "{keyword}",
    "{keyword} reviews",
    "{keyword} experience",
    "{keyword} issues",
    "{keyword} product feedback",
    "{keyword} performance",
    "{keyword} comparison",
    "{keyword} customer service",
    "{keyword} investment",
    "{keyword} controversy",
];

const PERSON_NEWS: &[&str] = &[
    "{keyword} news",
    "{keyword} interview",
    "{keyword} statement",
    "{keyword} public appearance",
    "{keyword} controversy",
    "{keyword} award",
    "{keyword} criticism",
    "{keyword} appreciation",
    "{keyword} achievements",
    "{keyword} opinion piece",
];

const PERSON_DISCUSSION: &[&str] = &[
    "{keyword}",
    "{keyword} controversy",
    "{keyword} AMA",
    "{keyword} opinion",
    "{keyword} discussion",
    "{keyword} fan reactions",
    "{keyword} appreciation",
    "{keyword} criticism",
    "{keyword} debate",
];

const TOPIC_NEWS: &[&str] = &[
    "{keyword} news",
    "{keyword} latest updates",
    "{keyword} trend",
    "{keyword} analysis",
    "{keyword} global impact",
    "{keyword} report",
    "{keyword} public opinion",
    "{keyword} controversy",
    "{keyword} expert commentary",
    "{keyword} awareness campaign",
];

const TOPIC_DISCUSSION: &[&str] = &[
    "{keyword}",
    "{keyword} discussion",
    "{keyword} experience",
    "{keyword} opinion",
    "{keyword} community debate",
    "{keyword} reactions",
    "{keyword} analysis",
    "{keyword} awareness",
    "{keyword} insights",
];

/// Template list for one (entity type, source) pair.
#[must_use]
pub fn templates(entity_type: EntityType, platform: Platform) -> &'static [&'static str] {
    match (entity_type, platform) {
        (EntityType::Brand, Platform::News) => BRAND_NEWS,
        (EntityType::Brand, Platform::Discussion) => BRAND_DISCUSSION,
        (EntityType::Person, Platform::News) => PERSON_NEWS,
        (EntityType::Person, Platform::Discussion) => PERSON_DISCUSSION,
        (EntityType::Topic, Platform::News) => TOPIC_NEWS,
        (EntityType::Topic, Platform::Discussion) => TOPIC_DISCUSSION,
    }
}

/// Search queries generated for one keyword, in fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedQueries {
    pub news: Vec<String>,
    pub discussion: Vec<String>,
}

/// Expand `keyword` into the news and discussion queries for `entity_type`.
///
/// The keyword is trimmed; case and punctuation are left untouched.
#[must_use]
pub fn expand(entity_type: EntityType, keyword: &str) -> ExpandedQueries {
    let keyword = keyword.trim();
    let fill = |platform: Platform| -> Vec<String> {
        templates(entity_type, platform)
            .iter()
            .map(|template| template.replace(KEYWORD, keyword))
            .collect()
    };
    ExpandedQueries {
        news: fill(Platform::News),
        discussion: fill(Platform::Discussion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_expands_to_fifteen_news_and_ten_discussion_queries() {
        let queries = expand(EntityType::Brand, "Zomato");
        assert_eq!(queries.news.len(), 15);
        assert_eq!(queries.discussion.len(), 10);
        assert_eq!(queries.news[0], "Zomato news");
        assert_eq!(queries.news[14], "Zomato sustainability");
        assert_eq!(queries.discussion[0], "Zomato");
        assert_eq!(queries.discussion[9], "Zomato controversy");
    }

    #[test]
    fn person_and_topic_template_sizes() {
        let person = expand(EntityType::Person, "Ada Lovelace");
        assert_eq!((person.news.len(), person.discussion.len()), (10, 9));
        assert!(person.discussion.contains(&"Ada Lovelace AMA".to_string()));

        let topic = expand(EntityType::Topic, "Climate Change");
        assert_eq!((topic.news.len(), topic.discussion.len()), (10, 9));
        assert_eq!(topic.news[1], "Climate Change latest updates");
    }

    #[test]
    fn unknown_entity_type_expands_like_topic() {
        let fallback = expand(EntityType::parse_lenient("unknown_type"), "X");
        assert_eq!(fallback, expand(EntityType::Topic, "X"));
    }

    #[test]
    fn keyword_is_trimmed_but_otherwise_untouched() {
        let queries = expand(EntityType::Brand, "  iPhone 16! \n");
        assert_eq!(queries.news[0], "iPhone 16! news");
        assert_eq!(queries.discussion[0], "iPhone 16!");
    }

    #[test]
    fn every_template_contains_the_placeholder() {
        for entity in [EntityType::Brand, EntityType::Person, EntityType::Topic] {
            for platform in Platform::ALL {
                for template in templates(entity, platform) {
                    assert!(template.contains(KEYWORD), "{entity}/{platform}: {template}");
                }
            }
        }
    }
}
