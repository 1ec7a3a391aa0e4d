// WordChecker: dictionary membership and suggestion entry point.
//
// The checker borrows the dictionary for its whole lifetime and never
// mutates it. The suggestion strategy is built once from the options at
// construction time; every `find_suggestions` call gets a fresh status.

use tracing::debug;
use wordcheck_core::Set;
use wordcheck_core::alphabet::{LetterCase, UPPERCASE_LATIN};

use crate::suggestion::generators::SplitDedup;
use crate::suggestion::status::SuggestionStatus;
use crate::suggestion::strategy::{SuggestionStrategy, default_strategy};

/// Options controlling suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SuggestionOptions {
    /// Letters tried by insertion and substitution, in trial order.
    pub alphabet: Vec<char>,

    /// Dedup rule for split candidates.
    pub split_dedup: SplitDedup,

    /// Stop after this many suggestions. `None` collects all of them.
    pub max_suggestions: Option<usize>,
}

impl Default for SuggestionOptions {
    fn default() -> Self {
        Self {
            alphabet: UPPERCASE_LATIN.to_vec(),
            split_dedup: SplitDedup::default(),
            max_suggestions: None,
        }
    }
}

impl SuggestionOptions {
    /// Default options with the Latin alphabet in the given case.
    pub fn for_case(case: LetterCase) -> Self {
        Self {
            alphabet: case.latin().to_vec(),
            ..Self::default()
        }
    }
}

/// Checks words against a dictionary and suggests corrections for words
/// that are not in it.
pub struct WordChecker<'a> {
    words: &'a dyn Set<String>,
    options: SuggestionOptions,
    strategy: SuggestionStrategy,
}

impl<'a> WordChecker<'a> {
    /// Create a checker with default options (uppercase alphabet, coupled
    /// split dedup, no limit).
    pub fn new(words: &'a dyn Set<String>) -> Self {
        Self::with_options(words, SuggestionOptions::default())
    }

    pub fn with_options(words: &'a dyn Set<String>, options: SuggestionOptions) -> Self {
        let strategy = default_strategy(&options);
        Self {
            words,
            options,
            strategy,
        }
    }

    pub fn options(&self) -> &SuggestionOptions {
        &self.options
    }

    /// Returns `true` if the dictionary contains `word`.
    pub fn word_exists(&self, word: &str) -> bool {
        self.words.contains(&word.to_string())
    }

    /// Suggest dictionary words one edit away from `word`.
    ///
    /// Suggestions are returned in discovery order: transpositions first,
    /// then insertions, deletions, substitutions and finally splits (two
    /// words separated by a space). Each suggestion appears once. Calling
    /// this twice with an unchanged dictionary gives the same sequence.
    pub fn find_suggestions(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut status = SuggestionStatus::with_limit(&chars, self.options.max_suggestions);
        self.strategy.generate(self.words, &mut status);
        debug!(
            word,
            suggestions = status.suggestion_count(),
            lookups = status.cost(),
            "generated suggestions"
        );
        status.into_suggestions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A mock dictionary that accepts a predefined set of words.
    struct MockSet {
        accepted: Vec<String>,
    }

    impl MockSet {
        fn new(words: &[&str]) -> Self {
            Self {
                accepted: words.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl Set<String> for MockSet {
        fn add(&mut self, element: String) {
            self.accepted.push(element);
        }

        fn contains(&self, element: &String) -> bool {
            self.accepted.contains(element)
        }

        fn size(&self) -> usize {
            self.accepted.len()
        }
    }

    #[test]
    fn word_exists_consults_dictionary() {
        let words = MockSet::new(&["CAT"]);
        let checker = WordChecker::new(&words);
        assert!(checker.word_exists("CAT"));
        assert!(!checker.word_exists("CAS"));
        assert!(!checker.word_exists(""));
    }

    #[test]
    fn substitution_and_deletion() {
        let words = MockSet::new(&["CAT", "CAR", "CATS"]);
        let checker = WordChecker::new(&words);
        assert!(checker.find_suggestions("CAS").contains(&"CAT".to_string()));
        assert_eq!(checker.find_suggestions("CATS"), vec!["CAT", "CATS"]);
    }

    #[test]
    fn split_is_stable_across_calls() {
        let words = MockSet::new(&["TO", "GO"]);
        let checker = WordChecker::new(&words);
        let first = checker.find_suggestions("TOGO");
        let second = checker.find_suggestions("TOGO");
        assert_eq!(first, vec!["TO GO"]);
        assert_eq!(first, second);
    }

    #[test]
    fn word_without_neighbors_gives_nothing() {
        let words = MockSet::new(&["CAT"]);
        let checker = WordChecker::new(&words);
        assert!(checker.find_suggestions("ZZZZZZ").is_empty());
    }

    #[test]
    fn single_character_word() {
        let words = MockSet::new(&["A", "XA", "I"]);
        let checker = WordChecker::new(&words);
        // insertion: XA; substitution: A, I
        assert_eq!(checker.find_suggestions("X"), vec!["XA", "A", "I"]);
    }

    #[test]
    fn empty_word_gets_single_letters() {
        let words = MockSet::new(&["A", "I"]);
        let checker = WordChecker::new(&words);
        assert_eq!(checker.find_suggestions(""), vec!["A", "I"]);
    }

    #[test]
    fn lowercase_options_change_alphabet() {
        let words = MockSet::new(&["cat", "cut"]);
        let upper = WordChecker::new(&words);
        assert!(upper.find_suggestions("cot").is_empty());

        let lower = WordChecker::with_options(&words, SuggestionOptions::for_case(LetterCase::Lower));
        assert_eq!(lower.find_suggestions("cot"), vec!["cat", "cut"]);
        assert_eq!(lower.options().alphabet[0], 'a');
    }

    #[test]
    fn split_dedup_option_is_applied() {
        let words = MockSet::new(&["A", "AB"]);
        let coupled = WordChecker::new(&words);
        assert_eq!(coupled.find_suggestions("AAB"), vec!["AB"]);

        let options = SuggestionOptions {
            split_dedup: SplitDedup::Independent,
            ..SuggestionOptions::default()
        };
        let independent = WordChecker::with_options(&words, options);
        assert_eq!(independent.find_suggestions("AAB"), vec!["AB", "A AB"]);
    }

    #[test]
    fn max_suggestions_truncates() {
        let words = MockSet::new(&["CAT", "CAR", "CATS"]);
        let options = SuggestionOptions {
            max_suggestions: Some(2),
            ..SuggestionOptions::default()
        };
        let checker = WordChecker::with_options(&words, options);
        assert_eq!(checker.find_suggestions("CAS"), vec!["CATS", "CAR"]);
    }
}
