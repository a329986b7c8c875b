//! Tripline
//!
//! Terminal itinerary timeline: an ordered list of segments between fixed
//! Start and End sentinels, with deterministic connector geometry and a
//! small context menu for editing.
//!
//! The library follows a Pure Core / Impure Shell split. `model`,
//! `view_state` and `state` are pure and testable without a terminal;
//! `source`, `view`, `logging` and `config` talk to the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
