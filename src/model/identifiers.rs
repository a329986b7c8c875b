//! Entry identifier newtype with a smart constructor, plus fresh-id generation.
//!
//! Identifiers validate non-empty strings at construction time.
//! The raw constructor is never exported - use the smart constructor only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a timeline entry (sentinel, segment or sub-entry).
///
/// Survives reorders; the edit model addresses entries only through this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryId(String);

impl EntryId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidEntryId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidEntryId::Empty);
        }
        Ok(Self(raw))
    }

    /// Built-in literal ids (sample data); must be non-empty.
    pub(crate) fn fixture(raw: &'static str) -> Self {
        debug_assert!(!raw.is_empty());
        Self(raw.to_string())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EntryId {
    type Error = InvalidEntryId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl PartialEq<str> for EntryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntryId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Why a raw string is not a valid [`EntryId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEntryId {
    /// The id was empty.
    #[error("Entry ID cannot be empty")]
    Empty,
}

/// Generates fresh segment ids for `insert_after`.
///
/// Ids are `seg-<epoch-micros>-<counter>`: the clock prefix separates runs,
/// the monotonic counter separates ids minted within one run.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    counter: u64,
}

impl IdGenerator {
    /// Generator seeded from the current wall clock.
    pub fn from_clock() -> Self {
        Self::with_prefix(format!("seg-{}", chrono::Utc::now().timestamp_micros()))
    }

    /// Generator with a fixed prefix (deterministic ids for tests and fixtures).
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Mint the next id. Never repeats within one generator.
    pub fn next_id(&mut self) -> EntryId {
        self.counter += 1;
        // prefix is never empty, so the constructor cannot reject this
        EntryId(format!("{}-{}", self.prefix, self.counter))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}
