//! Command-line conversion of transcript files.

mod convert;

pub use convert::{convert, ConvertRequest, Outcome, OutputFormat};
