/// Locale parameters appended to every Google News RSS search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsLocale {
    /// Interface language, e.g. `"en-IN"` (`hl`).
    pub language: String,
    /// Edition country, e.g. `"IN"` (`gl`).
    pub region: String,
}

impl NewsLocale {
    /// Edition id in the `{region}:{lang}` form Google News expects (`ceid`).
    ///
    /// Only the primary language subtag is used, so `en-IN` in region `IN`
    /// becomes `IN:en`.
    #[must_use]
    pub fn ceid(&self) -> String {
        let lang = self
            .language
            .split('-')
            .next()
            .unwrap_or(self.language.as_str());
        format!("{}:{lang}", self.region)
    }
}

impl Default for NewsLocale {
    fn default() -> Self {
        Self {
            language: "en-IN".to_string(),
            region: "IN".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub request_timeout_secs: u64,
    pub max_concurrent_queries: usize,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub news_locale: NewsLocale,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("reddit_client_id", &"[redacted]")
            .field("reddit_client_secret", &"[redacted]")
            .field("reddit_user_agent", &self.reddit_user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_concurrent_queries", &self.max_concurrent_queries)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("news_locale", &self.news_locale)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_ceid_is_india_english() {
        assert_eq!(NewsLocale::default().ceid(), "IN:en");
    }

    #[test]
    fn ceid_uses_primary_language_subtag() {
        let locale = NewsLocale {
            language: "pt-BR".to_string(),
            region: "BR".to_string(),
        };
        assert_eq!(locale.ceid(), "BR:pt");
    }

    #[test]
    fn ceid_accepts_bare_language() {
        let locale = NewsLocale {
            language: "de".to_string(),
            region: "DE".to_string(),
        };
        assert_eq!(locale.ceid(), "DE:de");
    }
}
