//! # Fmt Subcommand
//!
//! Decodes a collection export and encodes it again. Keys come out in the
//! model's declaration order, unknown keys are dropped, and opaque maps
//! (`brunoConfig`, `collectionVariables`, `runnerResult`) pass through
//! untouched. No validation is performed.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use brunoc_core::{decode, encode, encode_pretty};

use crate::EXIT_OK;

/// Arguments for the `brunoc fmt` subcommand.
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Collection export to re-encode.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write to this path instead of stdout. May equal FILE.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the fmt subcommand.
pub fn run_fmt(args: &FmtArgs) -> Result<u8> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let formatted = reformat(&bytes, args.pretty)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &formatted)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                len = formatted.len(),
                "wrote formatted collection"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&formatted)?;
            stdout.flush()?;
        }
    }
    Ok(EXIT_OK)
}

/// Decode `bytes` and encode the result, with a trailing newline.
pub fn reformat(bytes: &[u8], pretty: bool) -> Result<Vec<u8>> {
    let doc = decode(bytes)?;
    let mut out = if pretty { encode_pretty(&doc)? } else { encode(&doc)? };
    out.push(b'\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_unknown_keys_and_reorders() {
        let out = reformat(br#"{"name":"x","zzz":1,"version":"1"}"#, false).unwrap();
        assert_eq!(out, b"{\"version\":\"1\",\"name\":\"x\",\"items\":[],\"environments\":[]}\n");
    }

    #[test]
    fn keeps_opaque_maps_verbatim() {
        let input = br#"{"version":"1","name":"x","brunoConfig":{"z":1,"a":[true,null]}}"#;
        let out = reformat(input, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#""brunoConfig":{"z":1,"a":[true,null]}"#));
    }

    #[test]
    fn pretty_output_is_indented() {
        let out = reformat(br#"{"version":"1","name":"x"}"#, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  \"name\": \"x\""));
    }

    #[test]
    fn malformed_input_is_an_error() {
        let err = reformat(br#"{"name":"#, false).unwrap_err();
        assert!(err.to_string().contains("malformed"), "{err}");
    }

    #[test]
    fn rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.json");
        std::fs::write(&path, br#"{"name":"x","version":"1","extra":true}"#).unwrap();
        let args = FmtArgs {
            file: path.clone(),
            output: Some(path.clone()),
            pretty: false,
        };
        assert_eq!(run_fmt(&args).unwrap(), EXIT_OK);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("extra"));
    }
}
