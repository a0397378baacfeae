//! YAML front matter between `---` lines.

use crate::{
    error::{Error, Result},
    frontmatter::{find_block, Block},
    metadata::{yaml_mapping, Metadata},
};

use super::{Document, Format, FrontMatterParser};

/// YAML front matter between two `---` lines.
#[derive(Clone, Debug, Default)]
pub struct YamlParser {
    document: Document,
    block: Option<Block>,
}

impl YamlParser {
    pub const DELIMITER: &'static str = "---";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }

    fn parse(input: &[u8]) -> Result<(Block, Metadata)> {
        let block = find_block(input, Self::DELIMITER)?;
        let content = std::str::from_utf8(&input[block.content()])?;

        if content.trim().is_empty() {
            return Ok((block, Metadata::default()));
        }

        let mut value: serde_yaml::Value = serde_yaml::from_str(content)?;
        value.apply_merge()?;

        let mapping = match value {
            serde_yaml::Value::Mapping(mapping) => mapping,
            serde_yaml::Value::Null => serde_yaml::Mapping::new(),
            _ => {
                return Err(Error::NotATable {
                    format: Format::Yaml,
                })
            }
        };

        Ok((block, Metadata::new(yaml_mapping(mapping))))
    }
}

impl FrontMatterParser for YamlParser {
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
        Format::Yaml
    }
}
