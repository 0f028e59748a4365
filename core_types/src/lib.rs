use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

pub mod article;
pub mod author;
pub mod events;

pub use article::ArticleRecord;
pub use author::Author;

#[derive(Debug, Clone, PartialEq)]
pub enum CoreTypeError {
    ConversionError(String),
}

impl std::fmt::Display for CoreTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreTypeError::ConversionError(msg) => write!(f, "Conversion Error: {}", msg),
        }
    }
}

impl std::error::Error for CoreTypeError {}

/// Colour scheme preference shared by every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Display, IntoStaticStr)]
pub enum Theme {
    #[default]
    #[strum(serialize = "dark")]
    Dark,
    #[strum(serialize = "light")]
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl TryFrom<&str> for Theme {
    type Error = CoreTypeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        Theme::iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| CoreTypeError::ConversionError(format!("Unknown theme '{}'", value)))
    }
}

/// Keys of the persisted settings map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum SettingName {
    #[strum(serialize = "theme")]
    Theme,
}

impl SettingName {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl TryFrom<&str> for SettingName {
    type Error = CoreTypeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SettingName::iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| CoreTypeError::ConversionError(format!("Unknown setting '{}'", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_theme_string_conversion() {
        for theme in Theme::iter() {
            assert_eq!(Theme::try_from(theme.as_str()).unwrap(), theme);
            assert_eq!(theme.to_string(), theme.as_str());
        }
        assert_eq!(Theme::try_from(" Light ").unwrap(), Theme::Light);
        assert_eq!(Theme::try_from("DARK").unwrap(), Theme::Dark);
        assert_eq!(Theme::Light.as_str(), "light");
        assert!(Theme::try_from("sepia").is_err());
    }

    #[test]
    fn test_setting_name_conversion() {
        for name in SettingName::iter() {
            assert_eq!(SettingName::try_from(name.as_str()).unwrap(), name);
        }
        assert_eq!(SettingName::Theme.as_str(), "theme");
        assert!(SettingName::try_from("Theme").is_err());
        assert!(SettingName::try_from("s3_bucket").is_err());
    }
}
