//! Dictionary loading utilities
//!
//! Builds a [`DictionaryIndex`] from raw text lines, one candidate word per
//! line. Lines are trimmed, blank lines dropped, and the rest lower-cased.

use super::DictionaryIndex;
use super::entry::DictionaryEntry;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for dictionary loading failures
///
/// Loading is fatal at start-up; there is no recovery path.
#[derive(Debug)]
pub enum LoadError {
    /// The dictionary source could not be read
    Io { path: PathBuf, source: io::Error },
    /// The source contained no usable words
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dictionary {}: {source}", path.display())
            }
            Self::Empty => write!(f, "dictionary contains no words"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Build an index from raw dictionary lines
///
/// Each line is trimmed; blank lines are dropped; remaining text is
/// lower-cased and becomes one entry, in input order.
///
/// # Errors
///
/// Returns [`LoadError::Empty`] if no line yields a word.
///
/// # Examples
/// ```
/// use jumble::dictionary::loader::from_lines;
///
/// let index = from_lines(["Yellow", "", "  low "]).unwrap();
/// assert_eq!(index.len(), 2);
/// assert!(index.contains("yellow"));
/// ```
pub fn from_lines<I, S>(lines: I) -> Result<DictionaryIndex, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries: Vec<DictionaryEntry> = lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                DictionaryEntry::new(trimmed.to_lowercase())
            }
        })
        .collect();

    if entries.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(DictionaryIndex::from_entries(entries))
}

/// Load a dictionary from a file, one word per line
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::Empty`] if it yields no words.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<DictionaryIndex, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    from_lines(content.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_trims_and_lowercases() {
        let index = from_lines(["  Yellow  ", "LOW", "owl"]).unwrap();
        assert_eq!(index.len(), 3);
        assert!(index.contains("yellow"));
        assert!(index.contains("low"));
        assert!(index.contains("owl"));
    }

    #[test]
    fn from_lines_drops_blank_lines() {
        let index = from_lines(["yell", "", "   ", "\t", "woe"]).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn from_lines_preserves_input_order() {
        let index = from_lines(["woe", "yell", "low"]).unwrap();
        let values: Vec<&str> = index.all().iter().map(DictionaryEntry::value).collect();
        assert_eq!(values, ["woe", "yell", "low"]);
    }

    #[test]
    fn from_lines_empty_source_fails() {
        assert!(matches!(
            from_lines(Vec::<String>::new()),
            Err(LoadError::Empty)
        ));
        assert!(matches!(from_lines(["", "  "]), Err(LoadError::Empty)));
    }

    #[test]
    fn load_file_missing_fails() {
        let result = load_file("no/such/dictionary.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_error_display() {
        assert_eq!(LoadError::Empty.to_string(), "dictionary contains no words");
    }
}
