pub mod api_types;
pub mod process;

use core_types::ArticleRecord;
use thiserror::Error;

use crate::{api_types::ApiFeed, process::item_to_article};

pub const RSS2JSON_ENDPOINT: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_FEED_URL: &str = "https://www.dive-bomb.com/blog-feed.xml";

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid feed payload: {0}")]
    InvalidPayload(String),
    #[error("Feed service returned status '{status}': {message}")]
    FeedStatus { status: String, message: String },
}

/// Fetch the blog feed through rss2json and convert its items to article records.
///
/// # Errors
///
/// Returns a `FeedError` if the request fails, the body is not the expected JSON
/// or the conversion service reports anything other than `ok`.
pub async fn fetch_articles(
    client: &reqwest::Client,
    feed_url: &str,
) -> Result<Vec<ArticleRecord>, FeedError> {
    fetch_articles_from(client, RSS2JSON_ENDPOINT, feed_url).await
}

pub async fn fetch_articles_from(
    client: &reqwest::Client,
    endpoint: &str,
    feed_url: &str,
) -> Result<Vec<ArticleRecord>, FeedError> {
    tracing::debug!(endpoint, feed_url, "Fetching feed");

    let response = client
        .get(endpoint)
        .query(&[("rss_url", feed_url)])
        .send()
        .await
        .map_err(|e| FeedError::RequestFailed(format!("Failed to send request: {}", e)))?;

    if !response.status().is_success() {
        return Err(FeedError::RequestFailed(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FeedError::RequestFailed(format!("Failed to read body: {}", e)))?;

    parse_feed(&body)
}

/// Parse an rss2json response body.
pub fn parse_feed(body: &str) -> Result<Vec<ArticleRecord>, FeedError> {
    let feed: ApiFeed =
        serde_json::from_str(body).map_err(|e| FeedError::InvalidPayload(e.to_string()))?;

    if feed.status != "ok" {
        return Err(FeedError::FeedStatus {
            status: feed.status,
            message: feed.message.unwrap_or_default(),
        });
    }

    let articles: Vec<ArticleRecord> = feed.items.into_iter().map(item_to_article).collect();
    tracing::info!(count = articles.len(), "Feed converted");
    Ok(articles)
}

/// Like [`fetch_articles`], but a failure is logged and gives an empty list.
pub async fn load_latest(client: &reqwest::Client, feed_url: &str) -> Vec<ArticleRecord> {
    load_latest_from(client, RSS2JSON_ENDPOINT, feed_url).await
}

pub async fn load_latest_from(
    client: &reqwest::Client,
    endpoint: &str,
    feed_url: &str,
) -> Vec<ArticleRecord> {
    match fetch_articles_from(client, endpoint, feed_url).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load latest articles");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_BODY: &str = r#"{
        "status": "ok",
        "feed": {"url": "https://www.dive-bomb.com/blog-feed.xml"},
        "items": [
            {
                "title": "Floor Aero Deep Dive",
                "pubDate": "2026-01-05 12:30:00",
                "link": "https://www.dive-bomb.com/post/floor-aero",
                "author": "Dan Jones",
                "description": "<p>Intro</p>",
                "enclosure": {"link": "https://static.example.com/cover.jpg", "type": "image/jpeg"},
                "categories": ["Formula 1", "Tech"]
            },
            {
                "title": "Indy 500 Preview",
                "pubDate": "not a date",
                "link": "https://www.dive-bomb.com/post/indy-500",
                "author": "Umut Yelbaşı",
                "description": "<img src=\"https://static.example.com/indy.jpg\">",
                "enclosure": {},
                "categories": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_feed() {
        let articles = parse_feed(FEED_BODY).unwrap();
        assert_eq!(articles.len(), 2);

        assert_eq!(articles[0].title, "Floor Aero Deep Dive");
        assert_eq!(articles[0].clean_date(), Some("JAN 5, 2026"));
        assert_eq!(articles[0].categories(), ["Formula 1", "Tech"]);

        assert_eq!(articles[1].clean_date(), None);
        assert_eq!(
            articles[1].display_image(),
            Some("https://static.example.com/indy.jpg")
        );
    }

    #[test]
    fn test_parse_feed_error_status() {
        let body = r#"{"status": "error", "message": "rss_url parameter is required"}"#;
        match parse_feed(body) {
            Err(FeedError::FeedStatus { status, message }) => {
                assert_eq!(status, "error");
                assert_eq!(message, "rss_url parameter is required");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_feed_invalid_json() {
        assert!(matches!(
            parse_feed("<html>Bad gateway</html>"),
            Err(FeedError::InvalidPayload(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_endpoint_fails_without_network() {
        let client = reqwest::Client::new();
        let result = fetch_articles_from(&client, "not a url", DEFAULT_FEED_URL).await;
        assert!(matches!(result, Err(FeedError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_load_latest_swallows_errors() {
        let client = reqwest::Client::new();
        let articles = load_latest_from(&client, "not a url", DEFAULT_FEED_URL).await;
        assert!(articles.is_empty());
    }
}
