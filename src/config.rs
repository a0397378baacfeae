//! Optional `mdmeta.toml` settings for the command line tool.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "mdmeta.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File extensions treated as documents when walking a directory.
    pub extensions: Vec<String>,
    pub include_body: bool,
    pub pretty: bool,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string(), "markdown".to_string()],
            include_body: false,
            pretty: false,
            strict: false,
        }
    }
}

impl Config {
    /// Loads `path`, or `mdmeta.toml` from the working directory when no path
    /// is given. A missing default file yields the default config.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;

        Ok(config)
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}
