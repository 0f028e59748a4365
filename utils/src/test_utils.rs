use core_types::ArticleRecord;

/// Builds article records for tests without spelling out every field.
#[derive(Debug, Clone, Default)]
pub struct ArticleBuilder {
    record: ArticleRecord,
}

impl ArticleBuilder {
    pub fn new(title: &str) -> Self {
        let slug = title.to_lowercase().replace(' ', "-");
        Self {
            record: ArticleRecord {
                title: title.to_string(),
                link: format!("https://www.dive-bomb.com/post/{}", slug),
                ..Default::default()
            },
        }
    }

    pub fn author(mut self, author: &str) -> Self {
        self.record.author = author.to_string();
        self
    }

    pub fn main_category(mut self, category: &str) -> Self {
        self.record.main_category = Some(category.to_string());
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.record.categories = Some(categories.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn clean_date(mut self, date: &str) -> Self {
        self.record.clean_date = Some(date.to_string());
        self
    }

    pub fn build(self) -> ArticleRecord {
        self.record
    }
}

/// The two-article fixture used across the filter tests.
pub fn dan_jones_articles() -> Vec<ArticleRecord> {
    vec![
        ArticleBuilder::new("Floor Aero Deep Dive")
            .author("Dan Jones")
            .main_category("Formula 1")
            .build(),
        ArticleBuilder::new("Feeder Series Update")
            .author("Dan Jones")
            .main_category("IndyCar")
            .build(),
    ]
}

/// `count` articles by one author, titled "<prefix> 0", "<prefix> 1", ...
pub fn numbered_articles(author: &str, prefix: &str, count: usize) -> Vec<ArticleRecord> {
    (0..count)
        .map(|i| {
            ArticleBuilder::new(&format!("{} {}", prefix, i))
                .author(author)
                .main_category(if i % 2 == 0 { "Formula 1" } else { "IndyCar" })
                .build()
        })
        .collect()
}
