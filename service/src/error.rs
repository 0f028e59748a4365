use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    DeserializationError(String),
    IoError(String),
    SettingsError(String),
    NotFound(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::DeserializationError(message) => write!(f, "Deserialization error: {}", message),
            Error::IoError(message) => write!(f, "IO error: {}", message),
            Error::SettingsError(message) => write!(f, "Settings error: {}", message),
            Error::NotFound(message) => write!(f, "Not found: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DeserializationError(err.to_string())
    }
}
