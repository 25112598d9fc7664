//! Integration tests for `NewsClient` using wiremock HTTP mocks.

use buzzlens_core::{NewsLocale, Platform, Sentiment};
use buzzlens_sentiment::{Classifier, NewsClient, RetryPolicy};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NewsClient {
    NewsClient::with_base_url(5, NewsLocale::default(), RetryPolicy::none(), base_url)
        .expect("client construction should not fail")
}

fn rss(items: &[(&str, &str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(title, link, date)| {
            format!(
                "<item><title>{title}</title><link>{link}</link>\
                 <pubDate>{date}</pubDate><source url=\"https://example.com\">Example Times</source></item>"
            )
        })
        .collect();
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><rss version=\"2.0\"><channel><title>feed</title>{body}</channel></rss>")
}

fn queries(list: &[&str]) -> Vec<String> {
    list.iter().map(|q| (*q).to_string()).collect()
}

#[tokio::test]
async fn fetch_news_parses_items_into_mentions() {
    let server = MockServer::start().await;

    let feed = rss(&[
        (
            "Zomato raises prices, customers unhappy",
            "https://example.com/a",
            "Mon, 10 Mar 2025 08:00:00 GMT",
        ),
        (
            "Zomato launches new feature",
            "https://example.com/b",
            "Tue, 11 Mar 2025 09:30:00 GMT",
        ),
    ]);

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .and(query_param("q", "Zomato news"))
        .and(query_param("hl", "en-IN"))
        .and(query_param("gl", "IN"))
        .and(query_param("ceid", "IN:en"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mentions = client
        .fetch_news(&queries(&["Zomato news"]), &Classifier::default())
        .await;

    assert_eq!(mentions.len(), 2);
    assert!(mentions.iter().all(|m| m.platform == Platform::News));
    assert!(mentions.iter().all(|m| m.query == "Zomato news"));
    assert_eq!(mentions[0].sentiment, Sentiment::Negative);
    assert!((mentions[0].sentiment_percent - 42.15).abs() < 1e-9);
    assert_eq!(mentions[0].date_label(), "2025-03-10");
    assert_eq!(mentions[0].outlet.as_deref(), Some("Example Times"));
    assert_eq!(mentions[1].link, "https://example.com/b");
}

#[tokio::test]
async fn each_query_is_capped_at_twenty_items() {
    let server = MockServer::start().await;

    let titles: Vec<String> = (0..30).map(|i| format!("Story {i}")).collect();
    let links: Vec<String> = (0..30).map(|i| format!("https://example.com/{i}")).collect();
    let items: Vec<(&str, &str, &str)> = titles
        .iter()
        .zip(&links)
        .map(|(t, l)| (t.as_str(), l.as_str(), "Mon, 10 Mar 2025 08:00:00 GMT"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&items)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mentions = client
        .fetch_news(&queries(&["Tesla news"]), &Classifier::default())
        .await;

    assert_eq!(mentions.len(), 20);
    assert_eq!(mentions[19].title, "Story 19");
}

#[tokio::test]
async fn failed_query_is_isolated_from_the_rest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Tesla news"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&[(
            "Tesla posts record deliveries",
            "https://example.com/ok-1",
            "Mon, 10 Mar 2025 08:00:00 GMT",
        )])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("q", "Tesla update"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("q", "Tesla review"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&[(
            "Tesla review: great range",
            "https://example.com/ok-3",
            "Wed, 12 Mar 2025 08:00:00 GMT",
        )])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mentions = client
        .fetch_news(
            &queries(&["Tesla news", "Tesla update", "Tesla review"]),
            &Classifier::default(),
        )
        .await;

    let links: Vec<&str> = mentions.iter().map(|m| m.link.as_str()).collect();
    assert_eq!(links, ["https://example.com/ok-1", "https://example.com/ok-3"]);
}

#[tokio::test]
async fn malformed_xml_contributes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<rss><channel><item><title>Broken</wrong></item></channel></rss>"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_query("Tesla news", &Classifier::default()).await;
    assert!(result.is_err(), "malformed XML should surface as an error");

    let mentions = client
        .fetch_news(&queries(&["Tesla news"]), &Classifier::default())
        .await;
    assert!(mentions.is_empty());
}

#[tokio::test]
async fn non_feed_body_is_treated_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>consent page</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mentions = client
        .fetch_query("Tesla news", &Classifier::default())
        .await
        .expect("non-feed body is not an error");
    assert!(mentions.is_empty());
}

#[tokio::test]
async fn unparseable_date_yields_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&[(
            "Tesla story",
            "https://example.com/x",
            "sometime last week",
        )])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mentions = client
        .fetch_query("Tesla news", &Classifier::default())
        .await
        .expect("fetch should succeed");
    assert_eq!(mentions.len(), 1);
    assert!(mentions[0].published.is_none());
    assert_eq!(mentions[0].date_label(), "Unknown");
}

#[tokio::test]
async fn server_error_is_retried_per_policy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = NewsClient::with_base_url(
        5,
        NewsLocale::default(),
        RetryPolicy {
            max_retries: 2,
            backoff_base_ms: 1,
        },
        &server.uri(),
    )
    .expect("client construction should not fail");

    let result = client.fetch_query("Tesla news", &Classifier::default()).await;
    assert!(result.is_err());
}
