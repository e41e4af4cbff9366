//! Reading and writing line documents
//!
//! A document is held fully in memory as a `Vec<String>`, one entry per line,
//! each entry keeping its own terminator.

use crate::errors::ConvertError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = ".out";

/// Reads `path` and splits it after every `\n`. The last line keeps whatever
/// it ends with, possibly no terminator at all.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConvertError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| ConvertError::file_access(path, e))?;
    log::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(split_lines(&content))
}

pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Writes every line to `path`, terminating lines that lack a `\n`. The file
/// is created or truncated.
pub fn write_lines<P, S>(path: P, lines: &[S]) -> Result<(), ConvertError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ConvertError::file_write(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        let line = line.as_ref();
        writer
            .write_all(line.as_bytes())
            .map_err(|e| ConvertError::file_write(path, e))?;
        if !line.ends_with('\n') {
            writer
                .write_all(b"\n")
                .map_err(|e| ConvertError::file_write(path, e))?;
        }
    }
    writer
        .flush()
        .map_err(|e| ConvertError::file_write(path, e))?;
    log::debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

/// `<input>.out`, appended to the full file name.
pub fn output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let mut name = OsString::from(input.as_ref().as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}
