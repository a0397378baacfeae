//! Errors raised while recognizing or decoding a front matter block.

use thiserror::Error;

use crate::parser::Format;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a front matter block is rejected.
///
/// None of these are fatal: parsers turn them into a `false` from
/// [`FrontMatterParser::init`](crate::FrontMatterParser::init).
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing opening `{marker}` delimiter")]
    MissingOpening { marker: &'static str },

    #[error("missing closing `{marker}` delimiter")]
    MissingClosing { marker: &'static str },

    #[error("front matter is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid JSON front matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{format} front matter must be a set of key/value pairs")]
    NotATable { format: Format },
}
