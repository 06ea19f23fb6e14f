//! # Validate Subcommand
//!
//! Decodes and validates each file independently and prints one report per
//! file. A file that cannot be read or decoded does not stop the others.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use brunoc_schema::{DocumentError, Validator, ViolationReport};

use crate::{ValidatorFlags, EXIT_ERROR, EXIT_INVALID, EXIT_OK};

/// Report format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Arguments for the `brunoc validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Collection export files to validate.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub flags: ValidatorFlags,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Outcome for a single file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ViolationReport>,
    /// Set when the file could not be read or decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    fn check(validator: &Validator, path: &Path) -> Self {
        let (_, outcome) = validator.parse_file(path);
        let mut report = Self {
            file: path.to_path_buf(),
            valid: outcome.is_ok(),
            violations: Vec::new(),
            error: None,
        };
        match outcome {
            Ok(()) => {}
            Err(DocumentError::Invalid { violations }) => {
                report.violations = violations.violations().iter().map(|v| v.report()).collect();
            }
            Err(e) => report.error = Some(e.to_string()),
        }
        report
    }

    fn exit_code(&self) -> u8 {
        if self.error.is_some() {
            EXIT_ERROR
        } else if !self.valid {
            EXIT_INVALID
        } else {
            EXIT_OK
        }
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if every file is valid, 1 if any has violations,
/// 2 if any could not be read or decoded.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let validator = Validator::new(args.flags.resolve()?);
    let stdout = std::io::stdout();
    validate_files(&validator, &args.files, args.format, &mut stdout.lock())
}

/// Validate `files`, writing the report to `out`.
pub fn validate_files(
    validator: &Validator,
    files: &[PathBuf],
    format: Format,
    out: &mut impl Write,
) -> Result<u8> {
    tracing::info!(files = files.len(), config = ?validator.config(), "validating");

    let reports: Vec<FileReport> = files
        .iter()
        .map(|path| FileReport::check(validator, path))
        .collect();

    match format {
        Format::Text => write_text(&reports, out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }

    Ok(reports.iter().map(FileReport::exit_code).max().unwrap_or(EXIT_OK))
}

fn write_text(reports: &[FileReport], out: &mut impl Write) -> Result<()> {
    let mut passed = 0usize;
    for report in reports {
        let file = report.file.display();
        if let Some(error) = &report.error {
            writeln!(out, "ERROR: {file}: {error}")?;
        } else if report.valid {
            passed += 1;
            writeln!(out, "OK: {file}")?;
        } else {
            writeln!(out, "FAIL: {file} ({} violation(s))", report.violations.len())?;
            for v in &report.violations {
                let value = v.value.as_deref().unwrap_or("absent");
                writeln!(out, "  {}: failed '{}' (value: {value})", v.field, v.rule)?;
            }
        }
    }
    if reports.len() > 1 {
        writeln!(out, "\n{passed}/{} file(s) passed", reports.len())?;
    }
    Ok(())
}
