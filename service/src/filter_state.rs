use std::collections::BTreeSet;

use core_types::ArticleRecord;
use domain::{category::matches_selected, search::FuzzyQuery};

use crate::pagination::PaginationWindow;

/// Applies the search query and then the category selection, keeping input order.
pub fn filter_articles<'a, I>(
    articles: I,
    query: &str,
    selected: &BTreeSet<String>,
) -> Vec<&'a ArticleRecord>
where
    I: IntoIterator<Item = &'a ArticleRecord>,
{
    let query = FuzzyQuery::new(query);
    articles
        .into_iter()
        .filter(|article| query.matches(&article.title))
        .filter(|article| matches_selected(article, selected))
        .collect()
}

/// Search box, category selection and pagination window of one page visit.
///
/// Changing the query or the selection always resets the window to its first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_query: String,
    selected_categories: BTreeSet<String>,
    pagination: PaginationWindow,
}

impl FilterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            selected_categories: BTreeSet::new(),
            pagination: PaginationWindow::new(page_size),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    pub fn pagination(&self) -> &PaginationWindow {
        &self.pagination
    }

    pub fn visible_count(&self) -> usize {
        self.pagination.visible_count()
    }

    pub fn set_query(&mut self, query: &str) {
        if self.search_query != query {
            self.search_query = query.to_string();
            self.pagination.reset();
        }
    }

    /// Adds the category to the selection, or removes it when already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
        self.pagination.reset();
    }

    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.selected_categories.clear();
        self.pagination.reset();
    }

    pub fn load_more(&mut self, total: usize) -> bool {
        self.pagination.load_more(total)
    }

    /// Raw query length counts, so a query of only spaces still shows the reset action.
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty() || !self.selected_categories.is_empty()
    }

    pub fn apply<'a, I>(&self, articles: I) -> Vec<&'a ArticleRecord>
    where
        I: IntoIterator<Item = &'a ArticleRecord>,
    {
        filter_articles(articles, &self.search_query, &self.selected_categories)
    }
}
