//! Command line front end: prints the front matter of documents as JSON lines.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context as _};
use clap::Parser;
use mdmeta::{Format, Metadata};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use crate::config::Config;

mod config;

#[derive(Parser, Debug)]
#[command(name = "mdmeta")]
#[command(author, version, about = "Extract front matter from markdown documents", long_about = None)]
struct Args {
    /// Document or directory of documents
    #[arg(default_value = ".")]
    path: PathBuf,
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Include each document's body in the output
    #[arg(short, long)]
    body: bool,
    #[arg(short, long)]
    pretty: bool,
    /// Fail when a document has malformed front matter
    #[arg(short, long)]
    strict: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    path: &'a Path,
    format: Format,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    metadata: &'a Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

fn collect_documents(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut documents = vec![];

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;

        if !entry.file_type().is_file() || !config.matches(entry.path()) {
            continue;
        }

        documents.push(entry.into_path());
    }

    Ok(documents)
}

/// Parses one document, returning its report and whether it was well formed.
fn process_document(path: &Path, config: &Config, out: &mut impl Write) -> anyhow::Result<bool> {
    let contents = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let format = Format::detect(&contents);
    let mut parser = format.parser();
    let error = parser.try_init(&contents).err().map(|err| {
        tracing::warn!("{}: malformed {format} front matter: {err}", path.display());
        err.to_string()
    });

    let report = Report {
        path,
        format: parser.format(),
        ok: error.is_none(),
        error,
        metadata: parser.metadata(),
        body: config
            .include_body
            .then(|| String::from_utf8_lossy(parser.markdown()).into_owned()),
    };

    if config.pretty {
        serde_json::to_writer_pretty(&mut *out, &report)?;
    } else {
        serde_json::to_writer(&mut *out, &report)?;
    }
    writeln!(out)?;

    Ok(report.ok)
}

fn process_documents(
    documents: &[PathBuf],
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut malformed = 0;

    for document in documents {
        if !process_document(document, config, out)? {
            malformed += 1;
        }
    }

    if config.strict && malformed > 0 {
        return Err(anyhow!("{malformed} document(s) with malformed front matter"));
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("running with {args:?}");

    let mut config = Config::load(args.config.as_deref())?;
    config.include_body |= args.body;
    config.pretty |= args.pretty;
    config.strict |= args.strict;

    let documents = collect_documents(&args.path, &config)?;
    tracing::info!("found {} documents under {}", documents.len(), args.path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    process_documents(&documents, &config, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_document(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn report(path: &Path, config: &Config) -> (bool, serde_json::Value) {
        let mut out: Vec<u8> = Vec::new();
        let ok = process_document(path, config, &mut out).unwrap();

        assert_eq!(out.last(), Some(&b'\n'));
        (ok, serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn reports_well_formed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(
            dir.path(),
            "post.md",
            b"+++\ntitle = \"Hello\"\nnumber = 1410\n+++\nBody\n",
        );

        let (ok, report) = report(&path, &Config::default());

        assert!(ok);
        assert_eq!(report["path"], path.to_str().unwrap());
        assert_eq!(report["format"], "TOML");
        assert_eq!(report["ok"], true);
        assert!(report.get("error").is_none());
        assert!(report.get("body").is_none());
        assert_eq!(report["metadata"]["title"], "Hello");
        assert_eq!(report["metadata"]["variables"]["number"], 1410);
    }

    #[test]
    fn reports_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(dir.path(), "broken.md", b"---\ntitle: no closing line\n");

        let (ok, report) = report(&path, &Config::default());

        assert!(!ok);
        assert_eq!(report["format"], "YAML");
        assert_eq!(report["ok"], false);
        assert!(report["error"].as_str().unwrap().contains("closing"));
        assert_eq!(report["metadata"]["variables"], serde_json::json!({}));
    }

    #[test]
    fn includes_lossy_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(dir.path(), "post.md", b"{\"title\": \"x\"}\nbad \xff byte");
        let config = Config {
            include_body: true,
            ..Config::default()
        };

        let (ok, report) = report(&path, &config);

        assert!(ok);
        assert_eq!(report["body"], "\nbad \u{fffd} byte");
    }

    #[test]
    fn pretty_output_is_one_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(dir.path(), "plain.md", b"# Just markdown\n");
        let config = Config {
            pretty: true,
            ..Config::default()
        };

        let (ok, report) = report(&path, &config);

        assert!(ok);
        assert_eq!(report["format"], "None");
    }

    #[test]
    fn strict_fails_on_malformed_documents() {
        let dir = tempfile::tempdir().unwrap();
        let documents = vec![
            write_document(dir.path(), "a.md", b"+++\ntitle = \"a\"\n+++\n"),
            write_document(dir.path(), "b.md", b"+++\ntitle = \"b\"\n"),
        ];

        let mut out: Vec<u8> = Vec::new();
        process_documents(&documents, &Config::default(), &mut out).unwrap();
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 2);

        let strict = Config {
            strict: true,
            ..Config::default()
        };
        let err = process_documents(&documents, &strict, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("1 document(s)"));
    }

    #[test]
    fn strict_passes_when_all_documents_are_well_formed() {
        let dir = tempfile::tempdir().unwrap();
        let documents = vec![write_document(dir.path(), "a.md", b"no front matter")];
        let strict = Config {
            strict: true,
            ..Config::default()
        };

        assert!(process_documents(&documents, &strict, &mut Vec::<u8>::new()).is_ok());
    }

    #[test]
    fn walk_filters_extensions_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_document(dir.path(), "b.md", b"b");
        write_document(dir.path(), "a.markdown", b"a");
        write_document(dir.path(), "image.png", b"png");
        write_document(&dir.path().join("nested"), "c.md", b"c");

        let documents = collect_documents(dir.path(), &Config::default()).unwrap();

        assert_eq!(
            documents,
            vec![
                dir.path().join("a.markdown"),
                dir.path().join("b.md"),
                dir.path().join("nested").join("c.md"),
            ]
        );
    }

    #[test]
    fn single_file_is_collected_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(dir.path(), "notes.txt", b"text");

        assert_eq!(collect_documents(&path, &Config::default()).unwrap(), vec![path]);
    }
}
