use crate::alphabet::Alphabets;
use crate::encode::{encode, next_block_alphabet};
use crate::positional::from_digits;

/// Recover the numbers behind `hash`.
///
/// Returns `None` unless re-encoding the result reproduces `hash` exactly.
pub fn decode(
    alphabets: &Alphabets,
    salt: &[char],
    min_length: usize,
    hash: &str,
) -> Option<Vec<u64>> {
    let chars: Vec<char> = hash.chars().collect();
    let parts: Vec<&[char]> = chars.split(|c| alphabets.guards.contains(c)).collect();
    let payload = match parts.as_slice() {
        [_, middle] | [_, middle, _] => *middle,
        [first, ..] => *first,
        [] => return None,
    };

    let (&lottery, rest) = payload.split_first()?;
    let mut working = alphabets.alphabet.clone();
    let mut numbers = Vec::new();
    for block in rest.split(|c| alphabets.separators.contains(c)) {
        next_block_alphabet(&mut working, lottery, salt);
        numbers.push(from_digits(block, &working)?);
    }

    (encode(alphabets, salt, min_length, &numbers) == hash).then_some(numbers)
}
