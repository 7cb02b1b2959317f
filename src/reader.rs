// used to open the table file and read it line by line
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{RcftError, Result};

// ------------- RawTable -------------
/// The non-blank, trimmed lines of an RCFT resource, in file order.
///
/// Each kept line remembers its 1-based line number in the resource, so
/// diagnostics can point at the file even though blank lines are gone.
/// A `RawTable` only lives for the duration of a parse and is dropped
/// as soon as the boolean context has been assembled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    lines: Vec<String>,
    numbers: Vec<usize>,
}

impl RawTable {
    /// Build a table from in-memory text, applying the same blank line
    /// filtering as [`read_table`].
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (numbers, lines) = lines
            .into_iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let trimmed = line.as_ref().trim();
                (!trimmed.is_empty()).then(|| (i + 1, trimmed.to_string()))
            })
            .unzip();
        Self { lines, numbers }
    }
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
    /// Line number in the resource of the kept line at `index`.
    pub fn line_number(&self, index: usize) -> usize {
        self.numbers.get(index).copied().unwrap_or(index + 1)
    }
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Reads the whole resource at `path` into a [`RawTable`].
///
/// The file handle is scoped to this function, so it is released on every
/// exit path, including read failures half way through the file.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| RcftError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|source| RcftError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    let table = RawTable::from_lines(lines);
    debug!(path = %path.display(), lines = table.len(), "read table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped_and_the_rest_trimmed() {
        let table = RawTable::from_text("\n  | | A |  \n\t\n| o1 | x |\n   \n");
        assert_eq!(table.lines(), &["| | A |".to_string(), "| o1 | x |".to_string()]);
    }

    #[test]
    fn kept_lines_remember_their_file_line_numbers() {
        let table = RawTable::from_text("\nFormalContext T\n\n\n| | A |\n| o1 | x |");
        assert_eq!(table.len(), 3);
        assert_eq!(table.line_number(0), 2);
        assert_eq!(table.line_number(1), 5);
        assert_eq!(table.line_number(2), 6);
    }

    #[test]
    fn invalid_utf8_is_unreadable_not_missing() {
        let path = std::env::temp_dir().join(format!("rcft-reader-{}-latin1.rcft", std::process::id()));
        std::fs::write(&path, b"| | A |\n| o\xff | x |\n").unwrap();
        let result = read_table(&path);
        let _ = std::fs::remove_file(&path);
        match result {
            Err(err @ RcftError::Unreadable { .. }) => {
                assert!(err.to_string().starts_with("Resource not readable"));
            }
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let path = Path::new("definitely/not/here.rcft");
        match read_table(path) {
            Err(RcftError::ResourceNotFound { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }
}
