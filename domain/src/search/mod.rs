mod fuzzy;

pub use fuzzy::{FuzzyQuery, is_fuzzy_match};
