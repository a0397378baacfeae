//! Choosing the parser for a document from its leading bytes.

use std::io::{self, Read};

use crate::{
    frontmatter::first_line,
    parser::{Format, FrontMatterParser, JsonParser, NoneParser, TomlParser, YamlParser},
};

impl Format {
    /// Guesses the front matter format from the first non-blank line.
    pub fn detect(input: &[u8]) -> Format {
        let Some(line) = first_line(input) else {
            return Format::None;
        };

        if line == TomlParser::DELIMITER.as_bytes() {
            Format::Toml
        } else if line == YamlParser::DELIMITER.as_bytes() {
            Format::Yaml
        } else if line.starts_with(b"{") {
            Format::Json
        } else {
            Format::None
        }
    }

    /// A fresh, uninitialized parser for this format.
    pub fn parser(self) -> Box<dyn FrontMatterParser> {
        match self {
            Format::Json => Box::new(JsonParser::new()),
            Format::Toml => Box::new(TomlParser::new()),
            Format::Yaml => Box::new(YamlParser::new()),
            Format::None => Box::new(NoneParser::new()),
        }
    }
}

/// Picks the parser matching `input` and initializes it.
///
/// A malformed block under a recognized marker still yields that format's
/// parser, in its failed state: empty metadata, whole input as body.
pub fn get_parser(input: &[u8]) -> Box<dyn FrontMatterParser> {
    let format = Format::detect(input);
    tracing::trace!(%format, "detected front matter format");

    let mut parser = format.parser();
    if let Err(err) = parser.try_init(input) {
        tracing::warn!(%format, "malformed front matter: {err}");
    }

    parser
}

/// Reads a whole document from `reader` and runs [`get_parser`] on it.
pub fn read_parser<R: Read>(mut reader: R) -> io::Result<Box<dyn FrontMatterParser>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    Ok(get_parser(&input))
}
