//! Line-oriented document I/O shared by the cleaners.
//!
//! Lines keep their terminators so a document is written back byte-for-byte
//! except for the lines a cleaner drops or rewrites.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Split text into lines, each keeping its `\n` / `\r\n` terminator.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Split a line into its content and its terminator (possibly empty).
pub(crate) fn split_ending(line: &str) -> (&str, &str) {
    let body = line.trim_end_matches(['\n', '\r']);
    (body, &line[body.len()..])
}

pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(split_lines(&text))
}

/// Write the whole document at once.
pub(crate) fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.concat()).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_keeps_terminators() {
        let lines = split_lines("a\r\nb\nc");
        assert_eq!(lines, vec!["a\r\n", "b\n", "c"]);
        assert_eq!(lines.concat(), "a\r\nb\nc");
    }

    #[test]
    fn split_ending_variants() {
        assert_eq!(split_ending("<p>\n"), ("<p>", "\n"));
        assert_eq!(split_ending("<p>\r\n"), ("<p>", "\r\n"));
        assert_eq!(split_ending("<p>"), ("<p>", ""));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let err = read_lines(Path::new("/nonexistent/docsweep/input.md")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
