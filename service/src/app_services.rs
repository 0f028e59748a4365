use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use core_types::events::PageEvent;

use crate::{
    article_store::ArticleStore, author_directory::AuthorDirectory, author_page::AuthorPage,
    category_page::CategoryPage, error::Error, home_page::HomePage, listeners::ListenerRegistry,
    settings_service::SettingsService, view_models::Settings,
};

/// Where the services find their data.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub articles_path: Option<PathBuf>,
    pub authors_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Loads the article store, author directory and settings once and wires the services.
pub async fn create_app_services(config: &AppConfig) -> Result<Arc<AppServices>, Error> {
    let data_dir = file_system::get_data_dir(config.data_dir.as_deref())?;

    let store = match &config.articles_path {
        Some(path) => ArticleStore::load(path).await?,
        None => {
            tracing::warn!("No articles file configured, starting with an empty store");
            ArticleStore::default()
        }
    };

    let authors = match &config.authors_path {
        Some(path) => AuthorDirectory::load(path).await?,
        None => AuthorDirectory::bundled()?,
    };

    let settings_service = SettingsService::new(file_system::get_settings_path(&data_dir));
    let settings = settings_service.load_settings().await?;

    Ok(Arc::new(AppServices::new(
        Arc::new(store),
        Arc::new(authors),
        settings,
        data_dir,
    )))
}

#[derive(Debug)]
pub struct AppServices {
    store: Arc<ArticleStore>,
    authors: Arc<AuthorDirectory>,
    app_settings: Settings,
    data_dir: PathBuf,
    settings: OnceLock<Arc<SettingsService>>,
    page_events: OnceLock<Arc<ListenerRegistry<PageEvent>>>,
}

impl AppServices {
    pub fn new(
        store: Arc<ArticleStore>,
        authors: Arc<AuthorDirectory>,
        app_settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        Self {
            store,
            authors,
            app_settings,
            data_dir,
            settings: OnceLock::new(),
            page_events: OnceLock::new(),
        }
    }

    pub fn store(&self) -> Arc<ArticleStore> {
        Arc::clone(&self.store)
    }

    pub fn authors(&self) -> Arc<AuthorDirectory> {
        Arc::clone(&self.authors)
    }

    /// Settings as loaded on start.
    pub fn app_settings(&self) -> &Settings {
        &self.app_settings
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn settings(&self) -> Arc<SettingsService> {
        self.settings
            .get_or_init(|| {
                Arc::new(SettingsService::new(file_system::get_settings_path(
                    &self.data_dir,
                )))
            })
            .clone()
    }

    pub fn page_events(&self) -> Arc<ListenerRegistry<PageEvent>> {
        self.page_events
            .get_or_init(|| Arc::new(ListenerRegistry::new()))
            .clone()
    }

    pub fn author_page(&self, slug: &str) -> Result<AuthorPage, Error> {
        let author = self.authors.get(slug)?.clone();
        Ok(AuthorPage::new(&self.store, author))
    }

    pub fn category_page(&self, slug: &str) -> CategoryPage {
        CategoryPage::from_slug(&self.store, slug)
    }

    pub fn home_page(&self) -> HomePage<'_> {
        HomePage::new(self.store.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Theme;
    use tempfile::tempdir;
    use utils::test_utils::dan_jones_articles;

    #[async_std::test]
    async fn test_create_app_services() {
        let temp_dir = tempdir().unwrap();
        let articles_path = temp_dir.path().join("articles.json");
        std::fs::write(
            &articles_path,
            serde_json::to_string(&dan_jones_articles()).unwrap(),
        )
        .unwrap();

        let config = AppConfig {
            articles_path: Some(articles_path),
            authors_path: None,
            data_dir: Some(temp_dir.path().join("data")),
        };
        let services = create_app_services(&config).await.unwrap();

        assert_eq!(services.store().len(), 2);
        assert_eq!(services.app_settings().theme, Theme::Dark);

        let page = services.author_page("dan-jones").unwrap();
        assert_eq!(page.article_count(), 2);
        assert!(matches!(
            services.author_page("nobody"),
            Err(Error::NotFound(_))
        ));

        assert_eq!(services.category_page("indycar").articles().len(), 1);
        assert_eq!(services.home_page().featured().unwrap().title, "Floor Aero Deep Dive");
    }

    #[async_std::test]
    async fn test_settings_service_uses_data_dir() {
        let temp_dir = tempdir().unwrap();
        let config = AppConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        let services = create_app_services(&config).await.unwrap();

        let settings = services.settings();
        let updated = settings.toggle_theme(services.app_settings()).await.unwrap();
        assert_eq!(updated.theme, Theme::Light);
        assert!(temp_dir.path().join("settings.json").exists());
    }

    #[test]
    fn test_page_events_registry_is_shared() {
        let services = AppServices::new(
            Arc::new(ArticleStore::default()),
            Arc::new(AuthorDirectory::default()),
            Settings::default(),
            PathBuf::from("."),
        );
        let _subscription = services.page_events().subscribe();
        assert_eq!(services.page_events().subscriber_count(), 1);
    }
}
