//! Stdin-based itinerary source for piped input.

use super::parse_itinerary;
use crate::model::error::InputError;
use crate::model::Itinerary;
use std::io::{IsTerminal, Read};
use tracing::info;

/// Origin label used in parse errors.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// Piped JSON input, read to EOF once.
///
/// Generic over the reader so tests can feed a byte slice.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a source over the process's stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal,
    /// so the TUI never blocks waiting on keyboard input it did not ask for.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Source over any reader.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read everything and parse it as one itinerary document.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and
    /// `InputError::InvalidJson` for malformed documents.
    pub fn load(mut self) -> Result<Itinerary, InputError> {
        let mut contents = String::new();
        self.reader.read_to_string(&mut contents)?;
        let itinerary = parse_itinerary(&contents, STDIN_ORIGIN)?;
        info!(
            segments = itinerary.segments.len(),
            "Loaded itinerary from stdin"
        );
        Ok(itinerary)
    }
}
