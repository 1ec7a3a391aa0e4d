//! Shared contracts for the wordcheck workspace.
//!
//! - [`set`] -- the [`Set`] capability implemented by dictionaries and
//!   consumed by the suggestion engine
//! - [`alphabet`] -- letter sets used by insertion and substitution edits

pub mod alphabet;
pub mod set;

pub use set::Set;
