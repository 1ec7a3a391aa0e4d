// Individual suggestion generators: each applies one class of single-edit
// operation to the word and keeps the candidates found in the dictionary.

use wordcheck_core::Set;

use super::status::SuggestionStatus;

/// Separator placed between the two halves of a split word.
const SPLIT_SEPARATOR: char = ' ';

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual suggestion generators.
///
/// Each generator produces candidate words by applying one class of edit
/// operation to the word tracked by `status`, then checks each candidate
/// against `words`.
pub trait SuggestionGenerator {
    fn generate(&self, words: &dyn Set<String>, status: &mut SuggestionStatus<'_>);
}

// ---------------------------------------------------------------------------
// Shared helper
// ---------------------------------------------------------------------------

/// Look up a candidate buffer and, if the dictionary has it, add it to the
/// status.
pub fn suggest_for_buffer(
    words: &dyn Set<String>,
    status: &mut SuggestionStatus<'_>,
    buffer: &[char],
) {
    if status.should_abort() {
        return;
    }
    let candidate: String = buffer.iter().collect();
    status.charge();
    if words.contains(&candidate) {
        status.add_suggestion(candidate);
    }
}

/// Dictionary lookup for the split generator, which tests both halves before
/// deciding on a candidate.
fn exists(words: &dyn Set<String>, status: &mut SuggestionStatus<'_>, part: &str) -> bool {
    status.charge();
    words.contains(&part.to_string())
}

// =========================================================================
// Individual generators
// =========================================================================

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Try swapping each pair of adjacent characters.
pub struct Transposition;

impl SuggestionGenerator for Transposition {
    fn generate(&self, words: &dyn Set<String>, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = status.word_len();
        if wlen < 2 {
            return;
        }
        let mut buffer = word.to_vec();

        for i in 0..wlen - 1 {
            if status.should_abort() {
                break;
            }
            buffer.swap(i, i + 1);
            suggest_for_buffer(words, status, &buffer);
            buffer.swap(i, i + 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Try inserting each letter of an alphabet at every position, including
/// before the first and after the last character.
///
/// The outer loop runs over the alphabet, the inner loop over positions.
pub struct Insertion {
    pub alphabet: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, words: &dyn Set<String>, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = status.word_len();
        let mut buffer = Vec::with_capacity(wlen + 1);

        for &letter in &self.alphabet {
            for j in 0..=wlen {
                if status.should_abort() {
                    return;
                }
                buffer.clear();
                buffer.extend_from_slice(&word[..j]);
                buffer.push(letter);
                buffer.extend_from_slice(&word[j..]);
                suggest_for_buffer(words, status, &buffer);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Try deleting one character at each position.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, words: &dyn Set<String>, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = status.word_len();
        let mut buffer = Vec::with_capacity(wlen);

        for i in 0..wlen {
            if status.should_abort() {
                break;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            suggest_for_buffer(words, status, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Try replacing the character at each position with each letter of an
/// alphabet.
///
/// Replacing a character with itself is not skipped, so a word that is
/// already in the dictionary shows up among its own suggestions.
pub struct Substitution {
    pub alphabet: Vec<char>,
}

impl SuggestionGenerator for Substitution {
    fn generate(&self, words: &dyn Set<String>, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = status.word_len();
        let mut buffer = word.to_vec();

        for &letter in &self.alphabet {
            for j in 0..wlen {
                if status.should_abort() {
                    return;
                }
                buffer[j] = letter;
                suggest_for_buffer(words, status, &buffer);
                buffer[j] = word[j];
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SplitWord
// ---------------------------------------------------------------------------

/// How a split candidate is deduplicated against earlier results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SplitDedup {
    /// Suppress the split candidate if either half on its own was already
    /// suggested. Keeps compatibility with existing word-checker output.
    #[default]
    Coupled,
    /// Deduplicate the split candidate only against itself.
    Independent,
}

/// Try splitting the word in two at every inner position. Both halves must
/// be in the dictionary; the candidate is the halves joined by a space.
pub struct SplitWord {
    pub dedup: SplitDedup,
}

impl SuggestionGenerator for SplitWord {
    fn generate(&self, words: &dyn Set<String>, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = status.word_len();

        for i in 1..wlen {
            if status.should_abort() {
                break;
            }
            let prefix: String = word[..i].iter().collect();
            let suffix: String = word[i..].iter().collect();

            if !exists(words, status, &prefix) || !exists(words, status, &suffix) {
                continue;
            }
            if self.dedup == SplitDedup::Coupled
                && (status.contains(&prefix) || status.contains(&suffix))
            {
                continue;
            }

            let mut candidate = prefix;
            candidate.push(SPLIT_SEPARATOR);
            candidate.push_str(&suffix);
            status.add_suggestion(candidate);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
