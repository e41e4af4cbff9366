//! Run configuration and the entry points that consume it

use crate::alphanumeric::AlphanumericExtractor;
use crate::converter::LineConverter;
use crate::document::{output_path, read_lines, write_lines};
use crate::errors::ConvertError;
use std::path::{Path, PathBuf};

/// Paths for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = output_path(&input);
        Self { input, output }
    }

    /// Builds a config from an optional CLI argument.
    pub fn from_arg(input: Option<impl Into<PathBuf>>) -> Result<Self, ConvertError> {
        input.map(Self::new).ok_or(ConvertError::MissingInput)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub lines: usize,
    pub converted: usize,
}

/// Reads the input, converts every line and writes the output file. Nothing
/// is written unless the whole input was read.
pub fn run_conversion<F>(config: &RunConfig, mut on_converted: F) -> Result<RunSummary, ConvertError>
where
    F: FnMut(&str),
{
    let converter = LineConverter::new()?;
    let source = read_lines(&config.input)?;

    let mut converted = 0;
    let output = converter.convert_with(&source, |line| {
        converted += 1;
        on_converted(line);
    });

    write_lines(&config.output, &output)?;
    log::info!(
        "Converted {} of {} lines from {} into {}",
        converted,
        output.len(),
        config.input.display(),
        config.output.display()
    );

    Ok(RunSummary {
        lines: output.len(),
        converted,
    })
}

/// Reports the alphanumeric token of every matching line in `input`.
pub fn run_extraction<P, F>(input: P, on_match: F) -> Result<usize, ConvertError>
where
    P: AsRef<Path>,
    F: FnMut(&str),
{
    let extractor = AlphanumericExtractor::new()?;
    let lines = read_lines(input.as_ref())?;
    let matched = extractor.extract_all(&lines, on_match);
    log::info!(
        "Extracted tokens from {} of {} lines in {}",
        matched,
        lines.len(),
        input.as_ref().display()
    );
    Ok(matched)
}
