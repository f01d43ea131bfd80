// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Network(String),
    Decode(String),
    Manifest(String),
}

impl Error {
    /// Returns the i18n message key shown to the user for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Network(_) => "error-load-network",
            Error::Decode(_) => "error-load-decode",
            Error::Config(_) | Error::Manifest(_) => "error-load-general",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
