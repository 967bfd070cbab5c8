use crate::alphabet::Alphabets;
use crate::positional::push_digits;
use crate::shuffle::consistent_shuffle;

/// Pick `symbols[value % len]`.
pub fn pick(symbols: &[char], value: u64) -> char {
    // the remainder is below symbols.len()
    #[allow(clippy::cast_possible_truncation)]
    let index = (value % symbols.len() as u64) as usize;
    symbols[index]
}

const fn ord(c: char) -> u64 {
    c as u64
}

/// Sum of `numbers[i] % (i + 100)`; selects the lottery character.
pub fn lottery_index(numbers: &[u64]) -> u64 {
    numbers.iter().zip(100u64..).map(|(n, m)| n % m).sum()
}

/// Re-derive the alphabet for the next number block.
///
/// The shuffle salt is `lottery ++ salt ++ working`, cut to `working.len()`.
/// Encoding and decoding must both go through here.
pub fn next_block_alphabet(working: &mut [char], lottery: char, salt: &[char]) {
    let block_salt: Vec<char> = std::iter::once(lottery)
        .chain(salt.iter().copied())
        .chain(working.iter().copied())
        .take(working.len())
        .collect();
    consistent_shuffle(working, &block_salt);
}

/// Encode already validated, non-empty `numbers`.
pub fn encode(alphabets: &Alphabets, salt: &[char], min_length: usize, numbers: &[u64]) -> String {
    let Alphabets {
        alphabet,
        separators,
        guards,
    } = alphabets;

    let lottery_index = lottery_index(numbers);
    let lottery = pick(alphabet, lottery_index);

    let mut working = alphabet.clone();
    let mut result = vec![lottery];

    for (i, &number) in numbers.iter().enumerate() {
        next_block_alphabet(&mut working, lottery, salt);
        let block_start = result.len();
        push_digits(&mut result, number, &working);

        if i + 1 < numbers.len() {
            let modulus = ord(result[block_start]) + i as u64;
            // zero only for a NUL first digit on the first block
            let sep_index = number.checked_rem(modulus).unwrap_or(number);
            result.push(pick(separators, sep_index));
        }
    }

    if result.len() < min_length {
        result.insert(0, pick(guards, lottery_index + ord(result[0])));

        if result.len() < min_length {
            result.push(pick(guards, lottery_index + ord(result[2])));
        }
    }

    let half = working.len() / 2;
    while result.len() < min_length {
        let self_salt = working.clone();
        consistent_shuffle(&mut working, &self_salt);

        let mut padded = Vec::with_capacity(result.len() + working.len());
        padded.extend_from_slice(&working[half..]);
        padded.extend_from_slice(&result);
        padded.extend_from_slice(&working[..half]);
        result = padded;

        let excess = result.len().saturating_sub(min_length);
        if excess > 0 {
            result.drain(..excess / 2);
            result.truncate(min_length);
        }
    }

    result.into_iter().collect()
}
