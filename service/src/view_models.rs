use std::collections::HashMap;

use core_types::{ArticleRecord, SettingName, Theme};
use domain::slug::normalize_name;

/// Process-wide preferences, loaded on start and passed to whoever needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
}

impl From<HashMap<String, String>> for Settings {
    fn from(map: HashMap<String, String>) -> Self {
        let theme = map
            .get(SettingName::Theme.as_str())
            .and_then(|value| match Theme::try_from(value.as_str()) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring stored theme");
                    None
                }
            })
            .unwrap_or_default();
        Self { theme }
    }
}

impl From<&Settings> for HashMap<String, String> {
    fn from(settings: &Settings) -> Self {
        HashMap::from([(
            SettingName::Theme.as_str().to_string(),
            settings.theme.as_str().to_string(),
        )])
    }
}

/// What a listing shows for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub title: String,
    pub link: String,
    pub author: String,
    pub author_link: String,
    pub category: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
}

impl From<&ArticleRecord> for ArticleCard {
    fn from(article: &ArticleRecord) -> Self {
        Self {
            title: article.title.clone(),
            link: article.link.clone(),
            author: article.author.clone(),
            author_link: author_link(&article.author),
            category: article.main_category().map(str::to_string),
            date: article.clean_date().map(str::to_string),
            image: article.display_image().map(str::to_string),
        }
    }
}

pub fn author_link(author: &str) -> String {
    format!("/author/{}", normalize_name(author))
}

pub fn category_link(category: &str) -> String {
    format!("/{}", normalize_name(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::test_utils::ArticleBuilder;

    #[test]
    fn test_settings_from_map() {
        let map = HashMap::from([("theme".to_string(), "light".to_string())]);
        assert_eq!(Settings::from(map).theme, Theme::Light);
    }

    #[test]
    fn test_settings_defaults() {
        assert_eq!(Settings::from(HashMap::new()), Settings::default());

        let map = HashMap::from([
            ("theme".to_string(), "sepia".to_string()),
            ("unknown".to_string(), "value".to_string()),
        ]);
        assert_eq!(Settings::from(map).theme, Theme::Dark);
    }

    #[test]
    fn test_settings_to_map() {
        let settings = Settings {
            theme: Theme::Light,
        };
        let map: HashMap<String, String> = (&settings).into();
        assert_eq!(map.get("theme").map(String::as_str), Some("light"));
        assert_eq!(Settings::from(map), settings);
    }

    #[test]
    fn test_links() {
        assert_eq!(author_link("Archie O'Reilly"), "/author/archie-oreilly");
        assert_eq!(category_link("Formula One"), "/formula-1");
        assert_eq!(category_link("Live Coverage"), "/live-coverage");
    }

    #[test]
    fn test_article_card() {
        let article = ArticleBuilder::new("Floor Aero Deep Dive")
            .author("Dan Jones")
            .main_category("Formula 1")
            .clean_date("JAN 5, 2026")
            .build();
        let card = ArticleCard::from(&article);

        assert_eq!(card.author_link, "/author/dan-jones");
        assert_eq!(card.category.as_deref(), Some("Formula 1"));
        assert_eq!(card.date.as_deref(), Some("JAN 5, 2026"));
        assert_eq!(card.image, None);
    }
}
