use std::path::Path;

use core_types::Author;

use crate::error::Error;

const BUNDLED_AUTHORS: &str = include_str!("../data/authors.json");

/// Staff profiles, keyed by their page slug.
#[derive(Debug, Clone, Default)]
pub struct AuthorDirectory {
    authors: Vec<Author>,
}

impl AuthorDirectory {
    pub fn new(authors: Vec<Author>) -> Self {
        Self { authors }
    }

    /// The profiles shipped with the site.
    pub fn bundled() -> Result<Self, Error> {
        Self::from_json_str(BUNDLED_AUTHORS)
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let authors: Vec<Author> = serde_json::from_str(json)?;
        Ok(Self::new(authors))
    }

    pub async fn load(path: &Path) -> Result<Self, Error> {
        let json = async_std::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }

    pub fn find(&self, slug: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.slug == slug)
    }

    /// Like [`find`](Self::find) but a missing profile is an error.
    pub fn get(&self, slug: &str) -> Result<&Author, Error> {
        self.find(slug)
            .ok_or_else(|| Error::NotFound(format!("No author with slug '{}'", slug)))
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.authors.iter().map(|author| author.slug.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Author> {
        self.authors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_directory() {
        let directory = AuthorDirectory::bundled().unwrap();
        assert_eq!(
            directory.slugs(),
            vec![
                "dan-jones",
                "umut-yelbasi",
                "vyas-ponnuri",
                "aaron-carroll",
                "archie-oreilly"
            ]
        );

        let vyas = directory.find("vyas-ponnuri").unwrap();
        assert_eq!(vyas.name, "Vyas Ponnuri");
        assert_eq!(vyas.role_line(), "Editor in Chief, Head of Formula E");
        assert!(vyas.twitter.is_some());

        let aaron = directory.find("aaron-carroll").unwrap();
        assert!(aaron.bio.is_none());
        assert!(aaron.instagram.is_none());
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let directory = AuthorDirectory::bundled().unwrap();
        assert!(directory.find("lewis-hamilton").is_none());
        assert!(matches!(
            directory.get("lewis-hamilton"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            AuthorDirectory::from_json_str("[{\"slug\": 1}]"),
            Err(Error::DeserializationError(_))
        ));
    }
}
