//! Read-modify-write access to the benchmark's textual configuration file.
//!
//! The format is one `key:<whitespace>value` setting per line. Lines that do
//! not look like a setting (comments, blanks, section markers) pass through
//! untouched, so an update preserves the file's structure exactly except for
//! the targeted key's line.

use crate::error::{Result, TuneError};
use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;

/// Split a configuration line into `(key, value)` at the first `:`. A line
/// with nothing after the colon is not a setting.
fn split_setting(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    if value.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Rewrite the line for `key` to `key:\t<value>`, leaving every other line
/// unchanged. The rewrite lands in a uniquely named temporary file in the
/// same directory and is atomically renamed over the original, so a
/// concurrently launched benchmark never observes a partial write. A key
/// that does not occur leaves the file content identical.
pub fn update_value<V: Display>(config_path: &Path, key: &str, value: V) -> Result<()> {
    let contents = fs::read_to_string(config_path)?;
    let dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;

    for raw in contents.split_inclusive('\n') {
        let (line, eol) = split_terminator(raw);
        match split_setting(line) {
            Some((k, _)) if k == key => write!(tmp, "{}:\t{}{}", key, value, eol)?,
            _ => write!(tmp, "{}", raw)?,
        }
    }

    tmp.persist(config_path)
        .map_err(|e| TuneError::Io(e.error))?;
    Ok(())
}

/// Split one raw line into its content and its terminator, so untouched
/// lines can be copied back byte-for-byte and a rewritten line keeps the
/// terminator style it had (LF, CRLF, or none on a final unterminated line).
fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(rest) = raw.strip_suffix("\r\n") {
        (rest, "\r\n")
    } else if let Some(rest) = raw.strip_suffix('\n') {
        (rest, "\n")
    } else {
        (raw, "")
    }
}

/// Parsed value of the first line matching `key`, or `None` when no line
/// matches; the caller supplies its own default. A matching line whose value
/// does not parse as `T` is an error rather than a silent fallthrough.
pub fn read_value<T: FromStr>(config_path: &Path, key: &str) -> Result<Option<T>> {
    let contents = fs::read_to_string(config_path)?;
    for line in contents.lines() {
        if let Some((k, value)) = split_setting(line) {
            if k == key {
                return value
                    .parse::<T>()
                    .map(Some)
                    .map_err(|_| TuneError::Parse {
                        key: key.to_string(),
                        value: value.to_string(),
                    });
            }
        }
    }
    Ok(None)
}
