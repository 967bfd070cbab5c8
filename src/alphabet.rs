use crate::config::MIN_ALPHABET_LENGTH;
use crate::error::{HashidsError, Result};
use crate::shuffle::consistent_shuffle;

/// The three disjoint symbol sets a codec works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabets {
    pub alphabet: Vec<char>,
    pub separators: Vec<char>,
    pub guards: Vec<char>,
}

/// `ceil(len / 3.5)` without floats.
const fn separator_target(alphabet_len: usize) -> usize {
    (2 * alphabet_len).div_ceil(7)
}

/// `len / separators > 3.5` without floats.
const fn needs_more_separators(alphabet_len: usize, separators_len: usize) -> bool {
    separators_len == 0 || 2 * alphabet_len > 7 * separators_len
}

const fn guard_count(alphabet_len: usize) -> usize {
    alphabet_len.div_ceil(12)
}

impl Alphabets {
    /// Derive alphabet, separators and guards from raw configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error when the alphabet is empty, has fewer than
    /// [`MIN_ALPHABET_LENGTH`] unique symbols, contains a space, or leaves too
    /// few symbols to encode with once separators and guards are taken out.
    pub fn derive(alphabet: &str, separators: &str, salt: &[char]) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(HashidsError::EmptyAlphabet);
        }

        let mut unique: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in alphabet.chars() {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        if unique.len() < MIN_ALPHABET_LENGTH {
            return Err(HashidsError::AlphabetTooShort {
                unique: unique.len(),
                min: MIN_ALPHABET_LENGTH,
            });
        }
        if unique.contains(&' ') {
            return Err(HashidsError::AlphabetContainsSpace);
        }

        let (mut alphabet, mut separators) = split_separators(unique, separators);
        consistent_shuffle(&mut separators, salt);

        if needs_more_separators(alphabet.len(), separators.len()) {
            let target = separator_target(alphabet.len()).max(2);
            if target > separators.len() {
                let diff = (target - separators.len()).min(alphabet.len());
                separators.extend(alphabet.drain(..diff));
            } else {
                separators.truncate(target);
            }
        }

        consistent_shuffle(&mut alphabet, salt);

        let guard_len = guard_count(alphabet.len());
        let guards: Vec<char> = if alphabet.len() < 3 {
            let n = guard_len.min(separators.len());
            separators.drain(..n).collect()
        } else {
            alphabet.drain(..guard_len).collect()
        };

        if alphabet.len() < 2 || guards.is_empty() {
            return Err(HashidsError::DegenerateAlphabet {
                alphabet: alphabet.into_iter().collect(),
                guards: guards.into_iter().collect(),
            });
        }

        Ok(Self {
            alphabet,
            separators,
            guards,
        })
    }
}

/// Move every requested separator still present in `alphabet` out of it.
///
/// Separators keep their requested order; unknown and repeated ones are dropped.
fn split_separators(mut alphabet: Vec<char>, requested: &str) -> (Vec<char>, Vec<char>) {
    let mut separators = Vec::new();
    for c in requested.chars() {
        if let Some(pos) = alphabet.iter().position(|&a| a == c) {
            alphabet.remove(pos);
            separators.push(c);
        }
    }
    (alphabet, separators)
}
