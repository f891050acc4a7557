//! Convert a transcript file into an HTML page (or a JSON dump).

use crate::render::{render_document, RenderOptions};
use crate::transcript::{parse_file, Message};
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// What to write to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

/// A single conversion job.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub options: RenderOptions,
}

/// Terminal result of a conversion, as reported to the user.
#[derive(Debug)]
pub enum Outcome {
    Converted(PathBuf),
    InputNotFound(PathBuf),
    Failed(anyhow::Error),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Converted(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Converted(path) => write!(
                f,
                "Success! Chat log has been converted to '{}'",
                path.display()
            ),
            Outcome::InputNotFound(path) => {
                write!(f, "Error: The file '{}' was not found.", path.display())
            }
            Outcome::Failed(err) => write!(f, "An unexpected error occurred: {:#}", err),
        }
    }
}

/// Check whether an error was caused by a missing file.
fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|io| io.kind() == ErrorKind::NotFound)
}

fn serialize(messages: &[Message], request: &ConvertRequest) -> Result<String> {
    match request.format {
        OutputFormat::Html => {
            println!("Generating HTML...");
            Ok(render_document(messages, &request.options))
        }
        OutputFormat::Json => {
            println!("Generating JSON...");
            serde_json::to_string_pretty(messages).context("Failed to serialize messages")
        }
    }
}

fn write_output(messages: &[Message], request: &ConvertRequest) -> Result<()> {
    let content = serialize(messages, request)?;
    fs::write(&request.output, content)
        .with_context(|| format!("Failed to write output: {}", request.output.display()))?;
    Ok(())
}

/// Run a conversion and classify how it ended.
///
/// Only a missing input file is reported specially; every other failure
/// (unreadable input, unwritable output) is a generic error.
pub fn convert(request: &ConvertRequest) -> Outcome {
    println!("Parsing '{}'...", request.input.display());

    let messages = match parse_file(&request.input) {
        Ok(messages) => messages,
        Err(err) if is_not_found(&err) => return Outcome::InputNotFound(request.input.clone()),
        Err(err) => return Outcome::Failed(err),
    };
    debug!(roots = messages.len(), "transcript parsed");

    if let Err(err) = write_output(&messages, request) {
        return Outcome::Failed(err);
    }

    info!(output = %request.output.display(), "conversion finished");
    Outcome::Converted(request.output.clone())
}
