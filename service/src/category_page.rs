use core_types::ArticleRecord;
use domain::category::{matches_category_page, resolve_category};

use crate::{
    article_store::ArticleStore,
    pagination::{CATEGORY_PAGE_SIZE, PaginationState, PaginationWindow},
};

const LATEST_START: usize = 1;
const GRID_START: usize = 7;

/// Listing page for one category: a featured article, the six latest after it
/// and a paginated grid of everything older.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    category: &'static str,
    articles: Vec<ArticleRecord>,
    grid_window: PaginationWindow,
}

impl CategoryPage {
    /// Opens the page for a URL slug; unknown slugs show "All Articles".
    pub fn from_slug(store: &ArticleStore, slug: &str) -> Self {
        let category = resolve_category(slug);
        let articles: Vec<ArticleRecord> = store
            .all()
            .iter()
            .filter(|article| matches_category_page(article, category))
            .cloned()
            .collect();

        tracing::debug!(slug, category, matches = articles.len(), "Category page opened");

        Self {
            category,
            articles,
            grid_window: PaginationWindow::new(CATEGORY_PAGE_SIZE),
        }
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn featured(&self) -> Option<&ArticleRecord> {
        self.articles.first()
    }

    pub fn latest(&self) -> &[ArticleRecord] {
        slice_from(&self.articles, LATEST_START, GRID_START)
    }

    /// Every article that belongs to the grid, ignoring the window.
    pub fn grid(&self) -> &[ArticleRecord] {
        slice_from(&self.articles, GRID_START, self.articles.len())
    }

    pub fn visible_grid(&self) -> &[ArticleRecord] {
        self.grid_window.window(self.grid())
    }

    pub fn has_more(&self) -> bool {
        self.grid_window.has_more(self.grid().len())
    }

    pub fn pagination_state(&self) -> PaginationState {
        self.grid_window.state(self.grid().len())
    }

    pub fn load_more(&mut self) -> bool {
        let total = self.grid().len();
        self.grid_window.load_more(total)
    }
}

fn slice_from<T>(items: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(items.len());
    let start = start.min(end);
    &items[start..end]
}
