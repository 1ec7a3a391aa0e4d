//! Single-edit spelling suggestions.
//!
//! [`WordChecker`] borrows any dictionary implementing
//! [`wordcheck_core::Set<String>`] and proposes corrections that are one
//! edit away from a word: an adjacent transposition, an inserted, deleted or
//! substituted letter, or a split into two dictionary words.
//!
//! ```
//! use wordcheck_core::Set;
//! use wordcheck_suggest::WordChecker;
//!
//! struct Words(Vec<String>);
//!
//! impl Set<String> for Words {
//!     fn add(&mut self, w: String) { self.0.push(w) }
//!     fn contains(&self, w: &String) -> bool { self.0.contains(w) }
//!     fn size(&self) -> usize { self.0.len() }
//! }
//!
//! let words = Words(vec!["TO".into(), "GO".into()]);
//! let checker = WordChecker::new(&words);
//! assert!(!checker.word_exists("TOGO"));
//! assert_eq!(checker.find_suggestions("TOGO"), vec!["TO GO"]);
//! ```

pub mod checker;
pub mod suggestion;

pub use checker::{SuggestionOptions, WordChecker};
pub use suggestion::SplitDedup;
