pub mod app_services;
pub mod article_store;
pub mod author_directory;
pub mod author_page;
pub mod category_page;
pub mod error;
pub mod filter_state;
pub mod home_page;
pub mod listeners;
pub mod page_events;
pub mod pagination;
pub mod settings_service;
pub mod view_models;
