//! Pass-through parser for documents without front matter.

use crate::{error::Result, metadata::Metadata};

use super::{Document, Format, FrontMatterParser};

/// Pass-through for documents without front matter.
#[derive(Clone, Debug, Default)]
pub struct NoneParser {
    document: Document,
}

impl NoneParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrontMatterParser for NoneParser {
    fn try_init(&mut self, input: &[u8]) -> Result<()> {
        self.document = Document::unparsed(input);
        Ok(())
    }

    fn markdown(&self) -> &[u8] {
        &self.document.markdown
    }

    fn metadata(&self) -> &Metadata {
        &self.document.metadata
    }

    fn format(&self) -> Format {
        Format::None
    }
}
