//! Rule document sources.
//!
//! The loader does not care where the document bytes come from; the
//! invocation runner is handed a [`RuleSource`] and tests swap in an
//! in-memory one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::rules::RuleSet;

/// Somewhere a rule document can be fetched from, once per invocation.
pub trait RuleSource {
    /// Fetch the raw document bytes.
    ///
    /// # Errors
    /// [`LoadError::MissingDocument`] if there is no document at the
    /// source's location, [`LoadError::UnreadableDocument`] for any other
    /// read failure.
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Fetch and parse in one step.
    fn load(&self) -> Result<RuleSet, LoadError> {
        let bytes = self.fetch()?;
        RuleSet::from_slice(&bytes)
    }
}

/// Rule document stored as a flat file.
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuleSource for FileRuleSource {
    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        std::fs::read(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LoadError::MissingDocument {
                    path: self.path.clone(),
                }
            } else {
                LoadError::UnreadableDocument {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })
    }
}
