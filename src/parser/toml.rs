//! TOML front matter between `+++` lines.

use crate::{
    error::Result,
    frontmatter::{find_block, Block},
    metadata::Metadata,
};

use super::{Document, Format, FrontMatterParser};

/// TOML front matter between two `+++` lines.
#[derive(Clone, Debug, Default)]
pub struct TomlParser {
    document: Document,
    block: Option<Block>,
}

impl TomlParser {
    pub const DELIMITER: &'static str = "+++";

    pub fn new() -> Self {
        Self::default()
    }

    /// Delimiter offsets of the last successfully parsed block.
    pub fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }

    fn parse(input: &[u8]) -> Result<(Block, Metadata)> {
        let block = find_block(input, Self::DELIMITER)?;
        let content = std::str::from_utf8(&input[block.content()])?;

        let table: ::toml::Table = ::toml::from_str(content)?;
        let metadata = Metadata::new(table.into_iter().map(|(k, v)| (k, v.into())).collect());

        Ok((block, metadata))
    }
}

impl FrontMatterParser for TomlParser {
    fn try_init(&mut self, input: &[u8]) -> Result<()> {
        let (block, metadata) = match Self::parse(input) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.document = Document::unparsed(input);
                self.block = None;
                return Err(err);
            }
        };

        self.document = Document::split(input, metadata, block.body_start());
        self.block = Some(block);

        Ok(())
    }

    fn markdown(&self) -> &[u8] {
        &self.document.markdown
    }

    fn metadata(&self) -> &Metadata {
        &self.document.metadata
    }

    fn format(&self) -> Format {
        Format::Toml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metadata::Value, Error};

    #[test]
    fn parses_block_and_body() {
        let input = b"+++\ntitle = \"Hello\"\ntags = [\"a\", \"b\"]\n[extra]\nweight = 3\n+++\n# Heading\n";
        let mut parser = TomlParser::new();

        parser.try_init(input).unwrap();

        let md = parser.metadata();
        assert_eq!(md.title, "Hello");
        assert_eq!(
            md.get("tags"),
            Some(&Value::Array(vec![
                Value::String("a".into()),
                Value::String("b".into())
            ]))
        );
        let Some(Value::Map(extra)) = md.get("extra") else {
            panic!("expected a table");
        };
        assert_eq!(extra["weight"], Value::Integer(3));
        assert_eq!(parser.markdown(), b"# Heading\n");
        assert_eq!(parser.block().unwrap().open, 0..4);
    }

    #[test]
    fn native_datetime_is_hoisted() {
        let mut parser = TomlParser::new();

        assert!(parser.init(b"+++\ndate = 2016-01-02T15:04:05Z\n+++\n"));
        assert!(parser.metadata().date.is_some());
    }

    #[test]
    fn empty_block_is_empty_metadata() {
        let mut parser = TomlParser::new();

        assert!(parser.init(b"+++\n+++\nbody"));
        assert!(parser.metadata().is_empty());
        assert_eq!(parser.markdown(), b"body");
    }

    #[test]
    fn rejects_invalid_toml() {
        let mut parser = TomlParser::new();
        let err = parser.try_init(b"+++\ntitle = = \"x\"\n+++\n").unwrap_err();

        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn rejects_yaml_delimiters() {
        let mut parser = TomlParser::new();
        let err = parser.try_init(b"---\ntitle: x\n---\n").unwrap_err();

        assert!(matches!(err, Error::MissingOpening { marker: "+++" }));
    }

    #[test]
    fn rejects_non_utf8_content() {
        let mut parser = TomlParser::new();
        let err = parser.try_init(b"+++\ntitle = \"\xff\"\n+++\n").unwrap_err();

        assert!(matches!(err, Error::Utf8(_)));
    }
}
