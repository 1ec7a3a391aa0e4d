// Suggestion generation module
//
// Produces spelling correction candidates for a word by applying single
// edit operations (transposition, insertion, deletion, substitution,
// splitting) and keeping those found in the dictionary.
//
// Architecture:
//   - `generators`: one edit class per `SuggestionGenerator`
//   - `status`: per-word accumulator with ordered deduplication
//   - `strategy`: runs the generators in ranking order

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::{SplitDedup, SuggestionGenerator};
pub use status::SuggestionStatus;
pub use strategy::{SuggestionStrategy, default_strategy};
