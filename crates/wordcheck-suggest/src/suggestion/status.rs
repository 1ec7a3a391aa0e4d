// Suggestion status tracking: ordered results, deduplication, lookup cost

use hashbrown::HashSet;

/// Accumulates the candidates found for one word.
///
/// Candidates keep their discovery order; a candidate equal to one already
/// collected is dropped (first occurrence wins). Every dictionary lookup
/// made on behalf of the word is counted via [`charge`](Self::charge).
pub struct SuggestionStatus<'a> {
    /// The word for which suggestions are being generated.
    word: &'a [char],
    /// Stop collecting once this many suggestions are found.
    max_suggestions: Option<usize>,
    /// Number of dictionary lookups performed so far.
    cost: usize,
    suggestions: Vec<String>,
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    /// Create a status with no limit on the number of suggestions.
    pub fn new(word: &'a [char]) -> Self {
        Self::with_limit(word, None)
    }

    pub fn with_limit(word: &'a [char], max_suggestions: Option<usize>) -> Self {
        Self {
            word,
            max_suggestions,
            cost: 0,
            suggestions: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Returns `true` once the suggestion limit (if any) is reached.
    pub fn should_abort(&self) -> bool {
        self.max_suggestions
            .is_some_and(|max| self.suggestions.len() >= max)
    }

    /// Count one dictionary lookup.
    pub fn charge(&mut self) {
        self.cost += 1;
    }

    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Append a suggestion unless it is already present or the limit is
    /// reached. Returns `true` if it was appended.
    pub fn add_suggestion(&mut self, suggestion: String) -> bool {
        if self.should_abort() {
            return false;
        }
        if self.seen.contains(&suggestion) {
            return false;
        }
        self.seen.insert(suggestion.clone());
        self.suggestions.push(suggestion);
        true
    }

    /// Returns `true` if `candidate` has already been collected.
    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    pub fn word(&self) -> &'a [char] {
        self.word
    }

    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Consume the status and return the suggestions in discovery order.
    pub fn into_suggestions(self) -> Vec<String> {
        self.suggestions
    }
}
