//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod entry;
pub mod error;
pub mod identifiers;
pub mod itinerary;
pub mod key_action;

// Re-export for convenience
pub use entry::{Entry, EntryContent, EntryKind, SubEntry};
pub use error::{AppError, InputError};
pub use identifiers::{EntryId, IdGenerator, InvalidEntryId};
pub use itinerary::{EntryLocation, Itinerary};
pub use key_action::KeyAction;
