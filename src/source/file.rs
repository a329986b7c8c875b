//! File-based itinerary source.

use super::parse_itinerary;
use crate::model::error::InputError;
use crate::model::Itinerary;
use std::path::{Path, PathBuf};
use tracing::info;

/// An itinerary JSON file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`, checking that the file exists.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path the snapshot is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the file cannot be read and
    /// `InputError::InvalidJson` if it is not an itinerary document.
    pub fn load(&self) -> Result<Itinerary, InputError> {
        let contents = std::fs::read_to_string(&self.path)?;
        let itinerary = parse_itinerary(&contents, &self.path.display().to_string())?;
        info!(
            path = %self.path.display(),
            segments = itinerary.segments.len(),
            "Loaded itinerary from file"
        );
        Ok(itinerary)
    }
}
