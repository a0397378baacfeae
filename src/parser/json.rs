//! JSON front matter given as a leading object.

use serde_json::{Deserializer, Map};

use crate::{
    error::{Error, Result},
    metadata::Metadata,
};

use super::{Document, Format, FrontMatterParser};

/// JSON front matter: a leading object, with the body starting right after
/// its closing brace.
#[derive(Clone, Debug, Default)]
pub struct JsonParser {
    document: Document,
    end: Option<usize>,
}

impl JsonParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset just past the top-level object of the last successful parse.
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    fn parse(input: &[u8]) -> Result<(usize, Metadata)> {
        let start = input
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .filter(|&i| input[i] == b'{')
            .ok_or(Error::MissingOpening { marker: "{" })?;

        let mut stream =
            Deserializer::from_slice(&input[start..]).into_iter::<Map<String, serde_json::Value>>();

        let object = match stream.next() {
            Some(Ok(object)) => object,
            Some(Err(err)) if err.is_eof() => return Err(Error::MissingClosing { marker: "}" }),
            Some(Err(err)) => return Err(err.into()),
            None => return Err(Error::MissingOpening { marker: "{" }),
        };
        let end = start + stream.byte_offset();

        let metadata = Metadata::new(object.into_iter().map(|(k, v)| (k, v.into())).collect());

        Ok((end, metadata))
    }
}

impl FrontMatterParser for JsonParser {
    fn try_init(&mut self, input: &[u8]) -> Result<()> {
        let (end, metadata) = match Self::parse(input) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.document = Document::unparsed(input);
                self.end = None;
                return Err(err);
            }
        };

        self.document = Document::split(input, metadata, end);
        self.end = Some(end);

        Ok(())
    }

    fn markdown(&self) -> &[u8] {
        &self.document.markdown
    }

    fn metadata(&self) -> &Metadata {
        &self.document.metadata
    }

    fn format(&self) -> Format {
        Format::Json
    }
}
