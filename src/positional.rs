/// Append the digits of `value` in base `alphabet.len()`, most significant first.
///
/// Zero is written as `alphabet[0]`. `alphabet` must hold at least two symbols.
pub fn push_digits(out: &mut Vec<char>, mut value: u64, alphabet: &[char]) {
    let radix = alphabet.len() as u64;
    let start = out.len();
    loop {
        // remainder < radix, which came from a usize
        #[allow(clippy::cast_possible_truncation)]
        out.push(alphabet[(value % radix) as usize]);
        value /= radix;
        if value == 0 {
            break;
        }
    }
    out[start..].reverse();
}

/// Parse `digits` back into a number.
///
/// Returns `None` when a digit is not part of `alphabet` or the value does not
/// fit in a `u64`.
pub fn from_digits(digits: &[char], alphabet: &[char]) -> Option<u64> {
    let radix = alphabet.len() as u64;
    digits.iter().try_fold(0u64, |acc, d| {
        let pos = alphabet.iter().position(|a| a == d)? as u64;
        acc.checked_mul(radix)?.checked_add(pos)
    })
}
