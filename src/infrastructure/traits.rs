//! Line source abstraction
//!
//! The tree builder only needs an ordered sequence of lines. These sources
//! hand out a buffered reader scoped to a single load, so handles are closed
//! on every exit path, including a build that aborts partway.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::PathBuf;

use crate::infrastructure::error::{InfraError, InfraResult};

/// Anything that can produce the lines of a family file.
pub trait LineSource {
    /// Name used in log and error messages.
    fn name(&self) -> String;

    /// Open the source for reading.
    fn open(&self) -> InfraResult<Box<dyn BufRead + '_>>;
}

/// Family file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> InfraResult<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path).map_err(|source| InfraError::Open {
            path: self.path.clone(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn name(&self) -> String {
        "<stdin>".to_string()
    }

    fn open(&self) -> InfraResult<Box<dyn BufRead + '_>> {
        Ok(Box::new(io::stdin().lock()))
    }
}

/// In-memory text, one relationship per line.
#[derive(Debug, Clone, Default)]
pub struct StringSource {
    content: String,
}

impl StringSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl LineSource for StringSource {
    fn name(&self) -> String {
        "<memory>".to_string()
    }

    fn open(&self) -> InfraResult<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.content.as_bytes())))
    }
}
