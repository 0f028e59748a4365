use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime};
use core_types::ArticleRecord;
use regex::Regex;

use crate::api_types::ApiItem;

pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1547447134-cd3f5c716030?q=80&w=1200";

pub fn item_to_article(item: ApiItem) -> ArticleRecord {
    let display_image = item
        .enclosure_link()
        .map(str::to_string)
        .or_else(|| first_image_src(&item.description))
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());
    let clean_date = clean_date(&item.pub_date);

    ArticleRecord {
        title: item.title,
        link: item.link,
        author: item.author,
        description: item.description,
        main_category: None,
        categories: Some(item.categories),
        clean_date,
        display_image: Some(display_image),
    }
}

/// First `<img src="...">` in an HTML fragment.
pub fn first_image_src(html: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).unwrap());

    re.captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Formats a feed timestamp as e.g. "JAN 5, 2026".
pub fn clean_date(pub_date: &str) -> Option<String> {
    let pub_date = pub_date.trim();
    let date = NaiveDateTime::parse_from_str(pub_date, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc2822(pub_date)
                .ok()
                .map(|d| d.naive_local())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(pub_date)
                .ok()
                .map(|d| d.naive_local())
        })?;

    Some(date.format("%b %-d, %Y").to_string().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_date() {
        let test_cases = vec![
            ("2026-01-05 12:30:00", Some("JAN 5, 2026")),
            ("Sun, 15 Feb 2026 09:00:00 +0000", Some("FEB 15, 2026")),
            ("2025-11-30T22:15:00+01:00", Some("NOV 30, 2025")),
            ("yesterday", None),
            ("", None),
        ];
        for (input, expected) in test_cases {
            assert_eq!(clean_date(input).as_deref(), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_first_image_src() {
        let html = r#"<p>Intro</p><img alt="grid" src="https://static.example.com/a.jpg" /><img src="b.jpg">"#;
        assert_eq!(
            first_image_src(html).as_deref(),
            Some("https://static.example.com/a.jpg")
        );
        assert_eq!(first_image_src("<p>No pictures</p>"), None);
    }

    #[test]
    fn test_item_prefers_enclosure_image() {
        let item: ApiItem = serde_json::from_value(json!({
            "title": "Floor Aero Deep Dive",
            "link": "https://www.dive-bomb.com/post/floor-aero",
            "author": "Dan Jones",
            "description": "<img src=\"inline.jpg\">",
            "pubDate": "2026-01-05 12:30:00",
            "enclosure": {"link": "https://static.example.com/cover.jpg"},
            "categories": ["Formula 1"]
        }))
        .unwrap();

        let article = item_to_article(item);
        assert_eq!(
            article.display_image(),
            Some("https://static.example.com/cover.jpg")
        );
        assert_eq!(article.clean_date(), Some("JAN 5, 2026"));
        assert_eq!(article.categories(), ["Formula 1"]);
        assert_eq!(article.main_category(), None);
    }

    #[test]
    fn test_item_image_fallbacks() {
        let inline: ApiItem = serde_json::from_value(json!({
            "description": "<p><img class=\"x\" src=\"inline.jpg\"></p>",
            "enclosure": []
        }))
        .unwrap();
        assert_eq!(item_to_article(inline).display_image(), Some("inline.jpg"));

        let bare: ApiItem = serde_json::from_value(json!({
            "description": "text only",
            "enclosure": {}
        }))
        .unwrap();
        let article = item_to_article(bare);
        assert_eq!(article.display_image(), Some(FALLBACK_IMAGE));
        assert_eq!(article.clean_date(), None);
    }
}
