//! Itinerary input sources.
//!
//! A snapshot comes from one of:
//! - a JSON file given on the command line
//! - stdin, when the path is `-`
//! - the built-in sample, when no path is given

use crate::model::error::InputError;
use crate::model::Itinerary;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Path argument that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Where the initial snapshot comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// JSON snapshot on disk.
    File(FileSource),
    /// JSON snapshot piped on stdin.
    Stdin(StdinSource<std::io::Stdin>),
    /// Built-in demo itinerary.
    Sample,
}

impl InputSource {
    /// Produce the snapshot.
    ///
    /// # Errors
    ///
    /// Propagates read and parse failures of the file and stdin variants.
    pub fn load(self) -> Result<Itinerary, InputError> {
        match self {
            InputSource::File(f) => f.load(),
            InputSource::Stdin(s) => s.load(),
            InputSource::Sample => Ok(Itinerary::sample()),
        }
    }
}

/// Pick the input source for an optional path argument.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` for a missing file and
/// `InputError::NoInput` for `-` on an interactive terminal.
pub fn detect_input_source(path: Option<PathBuf>) -> Result<InputSource, InputError> {
    match path {
        None => Ok(InputSource::Sample),
        Some(p) if p.as_os_str() == STDIN_PATH => Ok(InputSource::Stdin(StdinSource::new()?)),
        Some(p) => Ok(InputSource::File(FileSource::new(p)?)),
    }
}

/// Parse one itinerary JSON document.
///
/// `origin` names the source in the error message.
pub(crate) fn parse_itinerary(contents: &str, origin: &str) -> Result<Itinerary, InputError> {
    serde_json::from_str(contents).map_err(|e| InputError::InvalidJson {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_loads_sample() {
        let source = detect_input_source(None).unwrap();
        assert!(matches!(source, InputSource::Sample));
        let itinerary = source.load().unwrap();
        assert_eq!(itinerary, Itinerary::sample());
    }

    #[test]
    fn missing_file_is_reported() {
        let result = detect_input_source(Some(PathBuf::from("/nonexistent/trip.json")));
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn existing_file_selects_file_source() {
        let path = std::env::temp_dir().join("tripline_detect_source.json");
        std::fs::write(&path, "{}").unwrap();

        let source = detect_input_source(Some(path.clone())).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(source, InputSource::File(_)));
    }

    #[test]
    fn parse_rejects_missing_sentinels() {
        let result = parse_itinerary(r#"{"title": "x", "segments": []}"#, "test");
        assert!(matches!(result, Err(InputError::InvalidJson { .. })));
    }

    #[test]
    fn sample_round_trips_through_json() {
        let json = serde_json::to_string_pretty(&Itinerary::sample()).unwrap();
        let parsed = parse_itinerary(&json, "sample").unwrap();
        assert_eq!(parsed, Itinerary::sample());
    }
}
