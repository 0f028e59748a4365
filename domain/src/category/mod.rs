mod names;

use std::collections::BTreeSet;

use core_types::ArticleRecord;

pub use names::{normalize_category_name, resolve_category};

pub const ALL_ARTICLES: &str = "All Articles";
pub const LIVE_COVERAGE: &str = "Live Coverage";

/// Categories that have their own listing page, in menu order.
pub const SITE_CATEGORIES: &[&str] = &[
    ALL_ARTICLES,
    LIVE_COVERAGE,
    "Formula 1",
    "IndyCar",
    "Formula E",
    "Feeder Series",
    "WRC",
    "MotoGP",
    "NASCAR",
    "Supercars",
];

/// Categories given a teaser section on the front page.
pub const HOME_SECTIONS: &[&str] = &["Formula 1", "IndyCar", "Formula E", "NASCAR"];

const LIVE_TITLE_PREFIX: &str = "LIVE:";

/// Author page filter: only the main category is consulted.
/// An empty selection lets every record through.
pub fn matches_selected(record: &ArticleRecord, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    record
        .main_category()
        .is_some_and(|category| selected.contains(category))
}

pub fn is_live_title(title: &str) -> bool {
    title.trim().to_uppercase().starts_with(LIVE_TITLE_PREFIX)
}

/// Category page filter. Compares the main category and every secondary tag after
/// [`normalize_category_name`]; "Live Coverage" also takes any `LIVE:` headline.
pub fn matches_category_page(record: &ArticleRecord, active_category: &str) -> bool {
    let active = normalize_category_name(active_category);
    if active == normalize_category_name(ALL_ARTICLES) {
        return true;
    }

    let matches_main = record
        .main_category()
        .is_some_and(|category| normalize_category_name(category) == active);
    let matches_sub = record
        .categories()
        .iter()
        .any(|category| normalize_category_name(category) == active);
    let matches_live =
        active == normalize_category_name(LIVE_COVERAGE) && is_live_title(&record.title);

    matches_main || matches_sub || matches_live
}

/// Front page teaser filter: loose substring match on secondary tags or the title.
pub fn matches_home_section(record: &ArticleRecord, section: &str) -> bool {
    let needle = section.to_lowercase();
    record
        .categories()
        .iter()
        .any(|category| category.to_lowercase().contains(&needle))
        || record.title.to_lowercase().contains(&needle)
}
