//! # New Subcommand
//!
//! Scaffolds a collection export: a version-1 document with a fresh uid and,
//! when `--url` is given, a single HTTP request item. The result is validated
//! before it is written, so a bad `--method` never reaches disk.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use brunoc_core::{create_document, create_request, Collection, Item, Uid};
use brunoc_schema::{write_file, ValidationResult, Validator};

use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the `brunoc new` subcommand.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Collection name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// URL of an initial HTTP request.
    #[arg(long)]
    pub url: Option<String>,

    /// Method of the initial request. Ignored without --url.
    #[arg(long, default_value = "GET")]
    pub method: String,

    /// Where to write the collection.
    #[arg(long, short)]
    pub output: PathBuf,

    /// Overwrite OUTPUT if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Build the collection described by `args`.
pub fn scaffold(args: &NewArgs) -> Collection {
    let mut doc = create_document(args.name.as_str());
    doc.uid = Some(Uid::generate());
    if let Some(url) = &args.url {
        let mut item = Item::http_request(
            format!("{} {url}", args.method),
            create_request(url.as_str(), args.method.as_str()),
        );
        item.uid = Some(Uid::generate());
        item.seq = Some(1);
        doc.add_item(item);
    }
    doc
}

/// Execute the new subcommand.
///
/// Returns exit code 1 without writing if the scaffolded collection fails
/// validation.
pub fn run_new(args: &NewArgs) -> Result<u8> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let doc = scaffold(args);
    if let ValidationResult::Invalid(violations) = Validator::default().validate(&doc) {
        eprintln!("refusing to write an invalid collection:\n{violations}");
        return Ok(EXIT_INVALID);
    }

    write_file(&args.output, &doc, true)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("created {}", args.output.display());
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brunoc_schema::parse_file;

    fn args(dir: &tempfile::TempDir, url: Option<&str>, method: &str) -> NewArgs {
        NewArgs {
            name: "demo".into(),
            url: url.map(str::to_string),
            method: method.into(),
            output: dir.path().join("demo.json"),
            force: false,
        }
    }

    #[test]
    fn empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(&dir, None, "GET");
        let doc = scaffold(&args);
        assert_eq!(doc.name, "demo");
        assert!(doc.items.is_empty());
        assert!(doc.uid.as_ref().is_some_and(Uid::is_well_formed));
    }

    #[test]
    fn writes_valid_collection_with_request() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(&dir, Some("http://example.com"), "POST");
        assert_eq!(run_new(&args).unwrap(), EXIT_OK);

        let (doc, outcome) = parse_file(&args.output);
        assert!(outcome.is_ok());
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].name, "POST http://example.com");
        let request = doc.items[0].request.as_ref().unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.headers.as_deref(), Some(&[][..]));
    }

    #[test]
    fn invalid_method_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(&dir, Some("http://example.com"), "get");
        assert_eq!(run_new(&args).unwrap(), EXIT_INVALID);
        assert!(!args.output.exists());
    }

    #[test]
    fn existing_output_requires_force() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(&dir, None, "GET");
        std::fs::write(&args.output, b"{}").unwrap();
        assert!(run_new(&args).is_err());

        args.force = true;
        assert_eq!(run_new(&args).unwrap(), EXIT_OK);
    }
}
