use super::{ALL_ARTICLES, SITE_CATEGORIES};

const CATEGORY_ALIASES: &[(&str, &str)] = &[("formula one", "formula 1"), ("f1", "formula 1")];

/// Lowercases a category name and maps known spellings onto one name,
/// e.g. "F1" and "Formula One" both become "formula 1".
pub fn normalize_category_name(category: &str) -> String {
    let lower = category.to_lowercase();
    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lower)
}

/// Maps a category page slug back to its display name, e.g. "formula-1" -> "Formula 1".
/// Unknown slugs fall back to "All Articles".
pub fn resolve_category(slug: &str) -> &'static str {
    let name = slug.replace('-', " ");
    SITE_CATEGORIES
        .iter()
        .find(|category| category.to_lowercase() == name.to_lowercase())
        .copied()
        .unwrap_or(ALL_ARTICLES)
}
