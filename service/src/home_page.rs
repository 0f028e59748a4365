use core_types::ArticleRecord;
use domain::category::{HOME_SECTIONS, matches_home_section};

use crate::view_models::category_link;

const SECTION_SIZE: usize = 3;
const LATEST_RANGE: (usize, usize) = (1, 7);
const FALLBACK_RANGE: (usize, usize) = (6, 9);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSection<'a> {
    pub name: &'static str,
    pub link: String,
    pub articles: Vec<&'a ArticleRecord>,
}

/// Front page built from the newest-first article list.
#[derive(Debug, Clone)]
pub struct HomePage<'a> {
    articles: &'a [ArticleRecord],
}

impl<'a> HomePage<'a> {
    pub fn new(articles: &'a [ArticleRecord]) -> Self {
        Self { articles }
    }

    pub fn featured(&self) -> Option<&'a ArticleRecord> {
        self.articles.first()
    }

    pub fn latest(&self) -> &'a [ArticleRecord] {
        range(self.articles, LATEST_RANGE)
    }

    /// Three teasers per front page category. A category with no match borrows
    /// a fixed slice of the general list so the section is never blank.
    pub fn sections(&self) -> Vec<HomeSection<'a>> {
        HOME_SECTIONS
            .iter()
            .map(|&name| {
                let mut articles: Vec<&'a ArticleRecord> = self
                    .articles
                    .iter()
                    .filter(|article| matches_home_section(article, name))
                    .take(SECTION_SIZE)
                    .collect();
                if articles.is_empty() {
                    articles = range(self.articles, FALLBACK_RANGE).iter().collect();
                }
                HomeSection {
                    name,
                    link: category_link(name),
                    articles,
                }
            })
            .collect()
    }
}

fn range<T>(items: &[T], (start, end): (usize, usize)) -> &[T] {
    let end = end.min(items.len());
    let start = start.min(end);
    &items[start..end]
}
