//! The front matter parser trait and its per-format implementations.

use std::fmt;

use serde::Serialize;

use crate::{error::Result, metadata::Metadata};

mod json;
mod none;
mod toml;
mod yaml;

pub use self::json::JsonParser;
pub use self::none::NoneParser;
pub use self::toml::TomlParser;
pub use self::yaml::YamlParser;

/// The front matter formats understood by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "TOML")]
    Toml,
    #[serde(rename = "YAML")]
    Yaml,
    /// No front matter; the whole document is body.
    None,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Toml => "TOML",
            Format::Yaml => "YAML",
            Format::None => "None",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a document into front matter metadata and body.
///
/// An instance holds the result of one document. After a failed `init` it
/// holds empty metadata and the whole input as body.
pub trait FrontMatterParser: fmt::Debug + Send {
    /// Parses `input`, reporting why it was rejected.
    fn try_init(&mut self, input: &[u8]) -> Result<()>;

    /// The document body following the front matter block.
    fn markdown(&self) -> &[u8];

    fn metadata(&self) -> &Metadata;

    fn format(&self) -> Format;

    /// Parses `input`, returning whether a well-formed block was found.
    fn init(&mut self, input: &[u8]) -> bool {
        match self.try_init(input) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(format = %self.format(), "front matter rejected: {err}");
                false
            }
        }
    }

    fn type_name(&self) -> &'static str {
        self.format().as_str()
    }
}

/// Metadata and body shared by every parser variant.
#[derive(Clone, Debug, Default)]
struct Document {
    metadata: Metadata,
    markdown: Vec<u8>,
}

impl Document {
    fn unparsed(input: &[u8]) -> Self {
        Self {
            metadata: Metadata::default(),
            markdown: input.to_vec(),
        }
    }

    fn split(input: &[u8], metadata: Metadata, body_start: usize) -> Self {
        Self {
            metadata,
            markdown: input[body_start..].to_vec(),
        }
    }
}
