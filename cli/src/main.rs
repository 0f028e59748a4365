mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use core_types::{ArticleRecord, Theme};
use service::{
    app_services::{AppConfig, AppServices, create_app_services},
    view_models::ArticleCard,
};

#[derive(Parser, Debug)]
#[command(name = "divebomb", about = "Browse Dive Bomb articles from the command line")]
struct Cli {
    /// Articles JSON file (array of article records)
    #[arg(long, env = "DIVEBOMB_ARTICLES")]
    articles: Option<PathBuf>,

    /// Author directory JSON file, the bundled directory is used when omitted
    #[arg(long)]
    authors: Option<PathBuf>,

    /// Override for the per-user data directory (settings and logs)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show an author's profile and their articles
    Author {
        slug: String,
        #[arg(long)]
        query: Option<String>,
        /// Category filter, can be given several times
        #[arg(long = "category")]
        categories: Vec<String>,
        /// How many times to press "load more"
        #[arg(long, default_value_t = 0)]
        load_more: usize,
    },
    /// Show a category page
    Category {
        slug: String,
        #[arg(long, default_value_t = 0)]
        load_more: usize,
    },
    /// Show the home page sections
    Home,
    /// Load the latest articles from the live blog feed
    Fetch {
        #[arg(long, default_value = feed::DEFAULT_FEED_URL)]
        feed_url: String,
        /// Write the fetched records to this file, usable as --articles later
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Read or change the colour theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// List the author directory
    Authors,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    Get,
    Toggle,
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    Theme::try_from(value).map_err(|e| e.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let data_dir = file_system::get_data_dir(cli.data_dir.as_deref())?;
    let _guard = logging::init_logging(&data_dir);

    let config = AppConfig {
        articles_path: cli.articles,
        authors_path: cli.authors,
        data_dir: Some(data_dir),
    };
    let services = create_app_services(&config).await?;

    match cli.command {
        Command::Author {
            slug,
            query,
            categories,
            load_more,
        } => show_author(&services, &slug, query, &categories, load_more)?,
        Command::Category { slug, load_more } => show_category(&services, &slug, load_more),
        Command::Home => show_home(&services),
        Command::Fetch { feed_url, output } => {
            let client = reqwest::Client::new();
            let articles = feed::load_latest(&client, &feed_url).await;
            println!("Fetched {} articles", articles.len());
            for article in &articles {
                print_card(article);
            }
            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&articles)?)?;
                tracing::info!(path = %path.display(), "Fetched articles written");
            }
        }
        Command::Theme { action } => {
            let settings_service = services.settings();
            let current = services.app_settings();
            let settings = match action.unwrap_or(ThemeAction::Get) {
                ThemeAction::Get => current.clone(),
                ThemeAction::Toggle => settings_service.toggle_theme(current).await?,
                ThemeAction::Set { theme } => settings_service.set_theme(current, theme).await?,
            };
            println!("{}", settings.theme);
        }
        Command::Authors => {
            for author in services.authors().iter() {
                println!("{:<16} {} ({})", author.slug, author.name, author.role_line());
            }
        }
    }

    Ok(())
}

fn show_author(
    services: &AppServices,
    slug: &str,
    query: Option<String>,
    categories: &[String],
    load_more: usize,
) -> Result<(), service::error::Error> {
    let mut page = services.author_page(slug)?;
    let author = page.author();
    println!("{}", author.name);
    println!("{}", author.role_line());
    if let Some(bio) = &author.bio {
        println!("{}", bio);
    }
    println!();

    if !page.has_articles() {
        println!("No articles yet.");
        return Ok(());
    }

    if let Some(query) = query {
        page.set_query(&query);
    }
    for category in categories {
        page.toggle_category(category);
    }
    for _ in 0..load_more {
        if !page.load_more() {
            break;
        }
    }

    println!("Categories: {}", page.category_label());
    println!("{}", page.showing_summary());
    for article in page.visible() {
        print_card(article);
    }
    if page.is_filter_active() && page.filtered().is_empty() {
        println!("No articles match your filters.");
    }
    if page.has_more() {
        println!("(more available, use --load-more)");
    }
    Ok(())
}

fn show_category(services: &AppServices, slug: &str, load_more: usize) {
    let mut page = services.category_page(slug);
    for _ in 0..load_more {
        if !page.load_more() {
            break;
        }
    }

    println!("{}", page.category());
    let Some(featured) = page.featured() else {
        println!("No articles found.");
        return;
    };

    println!("\nFeatured");
    print_card(featured);
    if !page.latest().is_empty() {
        println!("\nLatest");
        page.latest().iter().for_each(print_card);
    }
    if !page.visible_grid().is_empty() {
        println!("\nMore stories");
        page.visible_grid().iter().for_each(print_card);
    }
    if page.has_more() {
        println!("(more available, use --load-more)");
    }
}

fn show_home(services: &AppServices) {
    let home = services.home_page();
    if let Some(featured) = home.featured() {
        println!("Featured");
        print_card(featured);
    }
    if !home.latest().is_empty() {
        println!("\nLatest");
        home.latest().iter().for_each(print_card);
    }
    for section in home.sections() {
        println!("\n{} ({})", section.name, section.link);
        for article in section.articles {
            print_card(article);
        }
    }
}

fn print_card(article: &ArticleRecord) {
    let card = ArticleCard::from(article);
    let meta = [card.category.as_deref(), card.date.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" | ");
    println!("  {} [{}]", card.title, meta);
    println!("    by {} ({})  {}", card.author, card.author_link, card.link);
}
