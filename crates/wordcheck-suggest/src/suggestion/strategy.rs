// Suggestion strategy: runs generators in a fixed order over one status

use wordcheck_core::Set;

use super::generators::*;
use super::status::SuggestionStatus;
use crate::checker::SuggestionOptions;

/// An ordered list of generators. Results accumulate in the order the
/// generators run, so the list order is the ranking of edit classes.
pub struct SuggestionStrategy {
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn new(generators: Vec<Box<dyn SuggestionGenerator>>) -> Self {
        Self { generators }
    }

    /// Run every generator in turn, stopping early once the status reports
    /// its limit is reached.
    pub fn generate(&self, words: &dyn Set<String>, status: &mut SuggestionStatus<'_>) {
        for generator in &self.generators {
            if status.should_abort() {
                break;
            }
            generator.generate(words, status);
        }
    }

    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }
}

/// The single-edit strategy: transposition, insertion, deletion,
/// substitution, then splitting.
pub fn default_strategy(options: &SuggestionOptions) -> SuggestionStrategy {
    let generators: Vec<Box<dyn SuggestionGenerator>> = vec![
        Box::new(Transposition),
        Box::new(Insertion { alphabet: options.alphabet.clone() }),
        Box::new(Deletion),
        Box::new(Substitution { alphabet: options.alphabet.clone() }),
        Box::new(SplitWord { dedup: options.split_dedup }),
    ];
    SuggestionStrategy::new(generators)
}
