// Letter sets for insertion and substitution edits

/// The 26 uppercase Latin letters. Default alphabet for suggestions, since
/// dictionaries are conventionally stored in uppercase.
pub const UPPERCASE_LATIN: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// The 26 lowercase Latin letters.
pub const LOWERCASE_LATIN: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Letter case of an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

impl LetterCase {
    /// The Latin alphabet in this case.
    pub fn latin(self) -> &'static [char] {
        match self {
            LetterCase::Upper => UPPERCASE_LATIN,
            LetterCase::Lower => LOWERCASE_LATIN,
        }
    }
}
