use serde::Deserialize;
use serde_json::Value;

/// Envelope returned by the rss2json conversion API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFeed {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Vec<ApiItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pub_date: String, // "2026-01-05 12:30:00"
    // object with a "link" when present, sometimes an empty object or array
    #[serde(default)]
    pub enclosure: Value,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl ApiItem {
    pub fn enclosure_link(&self) -> Option<&str> {
        self.enclosure
            .get("link")
            .and_then(Value::as_str)
            .filter(|link| !link.is_empty())
    }
}
