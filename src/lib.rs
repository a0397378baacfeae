//! Front matter extraction for text documents.
//!
//! A document may open with a metadata block in TOML (between `+++` lines),
//! YAML (between `---` lines) or JSON (a leading object). [`get_parser`]
//! recognizes the block, parses it into [`Metadata`] and hands back the rest
//! of the document as the body.
//!
//! ```rust
//! use mdmeta::FrontMatterParser;
//!
//! let parser = mdmeta::get_parser(b"+++\ntitle = \"Hello\"\n+++\n# Body\n");
//!
//! assert_eq!(parser.type_name(), "TOML");
//! assert_eq!(parser.metadata().title, "Hello");
//! assert_eq!(parser.markdown(), b"# Body\n");
//! ```

pub mod detect;
pub mod error;
pub mod frontmatter;
pub mod metadata;
pub mod parser;

pub use detect::{get_parser, read_parser};
pub use error::{Error, Result};
pub use metadata::{Metadata, Value};
pub use parser::{Format, FrontMatterParser, JsonParser, NoneParser, TomlParser, YamlParser};
