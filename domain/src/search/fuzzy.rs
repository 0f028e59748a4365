/// A search query prepared for ordered subsequence matching.
///
/// The query is lowercased and all whitespace is removed once, so checking many
/// titles against the same keystroke does not redo that work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyQuery {
    chars: Vec<char>,
}

impl FuzzyQuery {
    pub fn new(query: &str) -> Self {
        let chars = query
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Self { chars }
    }

    /// An empty query matches every title.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Greedy left-to-right scan: true when every query character appears in the
    /// lowercased title in order, not necessarily next to each other.
    /// Characters are compared by code point, accents are not folded.
    pub fn matches(&self, title: &str) -> bool {
        if self.chars.is_empty() {
            return true;
        }

        let mut search_index = 0;
        for c in title.to_lowercase().chars() {
            if c == self.chars[search_index] {
                search_index += 1;
                if search_index == self.chars.len() {
                    return true;
                }
            }
        }
        false
    }
}

pub fn is_fuzzy_match(query: &str, title: &str) -> bool {
    FuzzyQuery::new(query).matches(title)
}
