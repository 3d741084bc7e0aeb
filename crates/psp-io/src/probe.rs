//! Input file discovery
//!
//! Inputs are either a numbered sequence probed on disk
//! (`test0001.txt`, `test0002.txt`, ...) or an explicit list of paths.
//!
//! A numbered sequence ends at the first index whose file cannot be
//! opened. A missing file is the normal end of input; any other open
//! failure also ends the sequence but is logged as a warning so it is not
//! mistaken for the end of the data.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::IoError;
use crate::reader::open_input;

/// An opened input, tagged with its 1-based position in the run
#[derive(Debug)]
pub struct InputFile {
    pub index: usize,
    pub path: PathBuf,
    pub reader: BufReader<File>,
}

/// Naming scheme for a numbered sequence of inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedPattern {
    pub dir: PathBuf,
    pub prefix: String,
    pub width: usize,
    pub extension: String,
}

impl Default for NumberedPattern {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: "test".to_string(),
            width: 4,
            extension: "txt".to_string(),
        }
    }
}

impl NumberedPattern {
    /// File name for the given index, e.g. `test0007.txt`
    pub fn file_name(&self, index: usize) -> String {
        if self.extension.is_empty() {
            format!("{}{:0width$}", self.prefix, index, width = self.width)
        } else {
            format!(
                "{}{:0width$}.{}",
                self.prefix,
                index,
                self.extension,
                width = self.width
            )
        }
    }

    /// Full path for the given index
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(self.file_name(index))
    }

    /// Probe the sequence starting at `first`
    pub fn probe(&self, first: usize) -> NumberedFiles {
        NumberedFiles {
            pattern: self.clone(),
            next: first,
            done: false,
        }
    }
}

/// Iterator over a numbered sequence, stopping at the first gap
#[derive(Debug)]
pub struct NumberedFiles {
    pattern: NumberedPattern,
    next: usize,
    done: bool,
}

impl Iterator for NumberedFiles {
    type Item = InputFile;

    fn next(&mut self) -> Option<InputFile> {
        if self.done {
            return None;
        }

        let index = self.next;
        let path = self.pattern.path_for(index);
        match open_input(&path) {
            Ok(reader) => {
                self.next += 1;
                Some(InputFile {
                    index,
                    path,
                    reader,
                })
            }
            Err(IoError::NotFound(path)) => {
                tracing::debug!(path = %path.display(), "end of numbered inputs");
                self.done = true;
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "stopping numbered inputs at unreadable file");
                self.done = true;
                None
            }
        }
    }
}

/// Iterator over explicitly named inputs
///
/// Each path is indexed by its position in the list. Unreadable paths are
/// logged and skipped without shifting later indices.
#[derive(Debug)]
pub struct ExplicitFiles {
    paths: std::vec::IntoIter<PathBuf>,
    next: usize,
}

impl ExplicitFiles {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
            next: 1,
        }
    }
}

impl Iterator for ExplicitFiles {
    type Item = InputFile;

    fn next(&mut self) -> Option<InputFile> {
        for path in self.paths.by_ref() {
            let index = self.next;
            self.next += 1;
            match open_input(&path) {
                Ok(reader) => {
                    return Some(InputFile {
                        index,
                        path,
                        reader,
                    })
                }
                Err(err) => tracing::warn!(error = %err, "skipping input"),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        let pattern = NumberedPattern::default();
        assert_eq!(pattern.file_name(1), "test0001.txt");
        assert_eq!(pattern.file_name(42), "test0042.txt");
        assert_eq!(pattern.file_name(12345), "test12345.txt");
    }

    #[test]
    fn test_custom_file_name() {
        let pattern = NumberedPattern {
            prefix: "run".to_string(),
            width: 2,
            extension: String::new(),
            ..Default::default()
        };
        assert_eq!(pattern.file_name(3), "run03");
    }
}
