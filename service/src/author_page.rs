use std::collections::BTreeSet;

use core_types::{ArticleRecord, Author};

use crate::{
    article_store::ArticleStore,
    filter_state::FilterState,
    pagination::{AUTHOR_PAGE_SIZE, PaginationState},
};

/// Profile page of one author: their articles narrowed by search and category
/// and shown through a growing window.
#[derive(Debug, Clone)]
pub struct AuthorPage {
    author: Author,
    articles: Vec<ArticleRecord>,
    available_categories: Vec<String>,
    filter: FilterState,
}

impl AuthorPage {
    pub fn new(store: &ArticleStore, author: Author) -> Self {
        let articles: Vec<ArticleRecord> = store
            .articles_by_author(&author.name)
            .into_iter()
            .cloned()
            .collect();

        let available_categories = articles
            .iter()
            .filter_map(ArticleRecord::main_category)
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        tracing::debug!(
            author = %author.slug,
            articles = articles.len(),
            "Author page opened"
        );

        Self {
            author,
            articles,
            available_categories,
            filter: FilterState::new(AUTHOR_PAGE_SIZE),
        }
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Every article by the author, before any filtering.
    pub fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn has_articles(&self) -> bool {
        !self.articles.is_empty()
    }

    /// Sorted, de-duplicated main categories of the author's articles.
    pub fn available_categories(&self) -> &[String] {
        &self.available_categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.filter.toggle_category(category);
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset_filters();
    }

    pub fn load_more(&mut self) -> bool {
        let total = self.filtered().len();
        self.filter.load_more(total)
    }

    pub fn filtered(&self) -> Vec<&ArticleRecord> {
        let results = self.filter.apply(&self.articles);
        tracing::debug!(
            query = %self.filter.search_query(),
            results = results.len(),
            "Author articles filtered"
        );
        results
    }

    pub fn visible(&self) -> Vec<&ArticleRecord> {
        let filtered = self.filtered();
        self.filter.pagination().window(&filtered).to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.filter.pagination().has_more(self.filtered().len())
    }

    pub fn pagination_state(&self) -> PaginationState {
        self.filter.pagination().state(self.filtered().len())
    }

    pub fn is_filter_active(&self) -> bool {
        self.filter.is_active()
    }

    pub fn showing_summary(&self) -> String {
        let total = self.filtered().len();
        format!(
            "Showing {} of {} articles",
            self.filter.pagination().shown(total),
            total
        )
    }

    pub fn category_label(&self) -> String {
        match self.filter.selected_categories().len() {
            0 => "All Categories".to_string(),
            n => format!("{} Selected", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::author_directory::AuthorDirectory;
    use utils::test_utils::{ArticleBuilder, dan_jones_articles, numbered_articles};

    fn dan_jones() -> Author {
        AuthorDirectory::bundled()
            .unwrap()
            .get("dan-jones")
            .unwrap()
            .clone()
    }

    fn page_with(articles: Vec<ArticleRecord>) -> AuthorPage {
        AuthorPage::new(&ArticleStore::from_records(articles), dan_jones())
    }

    #[test]
    fn test_scopes_to_author() {
        let mut articles = dan_jones_articles();
        articles.push(
            ArticleBuilder::new("Rally Sweden Preview")
                .author("Vyas Ponnuri")
                .main_category("WRC")
                .build(),
        );
        let page = page_with(articles);

        assert_eq!(page.article_count(), 2);
        assert!(page.articles().iter().all(|a| a.author == "Dan Jones"));
        assert_eq!(page.available_categories(), ["Formula 1", "IndyCar"]);
    }

    #[test]
    fn test_category_selection_scenario() {
        let mut page = page_with(dan_jones_articles());
        page.toggle_category("Formula 1");

        let filtered = page.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Floor Aero Deep Dive");
        assert_eq!(page.category_label(), "1 Selected");
        assert!(page.is_filter_active());
    }

    #[test]
    fn test_pagination_and_summary() {
        let mut page = page_with(numbered_articles("Dan Jones", "Race Report", 14));

        assert_eq!(page.visible().len(), 6);
        assert_eq!(page.showing_summary(), "Showing 6 of 14 articles");
        assert_eq!(page.pagination_state(), PaginationState::Collapsed(6));

        assert!(page.load_more());
        assert_eq!(page.visible().len(), 12);
        assert!(page.load_more());
        assert_eq!(page.visible().len(), 14);
        assert_eq!(page.showing_summary(), "Showing 14 of 14 articles");
        assert!(!page.has_more());
        assert!(!page.load_more());
    }

    #[test]
    fn test_search_resets_window() {
        let mut page = page_with(numbered_articles("Dan Jones", "Race Report", 30));
        page.load_more();
        page.load_more();
        assert_eq!(page.visible().len(), 18);

        page.set_query("report 1");
        assert_eq!(page.filter().visible_count(), 6);
        // 1, 10..=19 and 21: any "1" after "report" in the title
        assert_eq!(page.filtered().len(), 12);
        assert_eq!(page.visible().len(), 6);
    }

    #[test]
    fn test_reset_filters() {
        let mut page = page_with(dan_jones_articles());
        page.set_query("zzz");
        page.toggle_category("IndyCar");
        assert!(page.filtered().is_empty());

        page.reset_filters();
        assert!(!page.is_filter_active());
        assert_eq!(page.filtered().len(), 2);
        assert_eq!(page.category_label(), "All Categories");
    }

    #[test]
    fn test_author_without_articles() {
        let page = page_with(Vec::new());
        assert!(!page.has_articles());
        assert!(page.visible().is_empty());
        assert_eq!(page.pagination_state(), PaginationState::Exhausted);
        assert_eq!(page.showing_summary(), "Showing 0 of 0 articles");
    }
}
