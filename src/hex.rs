use crate::error::{HashidsError, Result};

/// Hex digits packed into one number. `1` + 12 digits stays below `2^53`.
const GROUP_DIGITS: usize = 12;

/// Split `hex` into numbers of at most [`GROUP_DIGITS`] digits, each with a
/// leading `1` so leading zeros survive the round trip.
///
/// # Errors
///
/// `HexPrefixNotAllowed` for a `0x`/`0X` prefix unless `allow_prefix` is set,
/// `InvalidHex` for an empty string or any non-hex character.
pub fn hex_to_numbers(hex: &str, allow_prefix: bool) -> Result<Vec<u64>> {
    let digits = match hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")) {
        Some(rest) if allow_prefix => rest,
        Some(_) => {
            return Err(HashidsError::HexPrefixNotAllowed {
                hex: hex.to_string(),
            });
        }
        None => hex,
    };

    let invalid = || HashidsError::InvalidHex {
        hex: hex.to_string(),
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    digits
        .as_bytes()
        .chunks(GROUP_DIGITS)
        .map(|group| {
            group.iter().try_fold(1u64, |acc, &b| {
                char::from(b)
                    .to_digit(16)
                    .map(|nibble| (acc << 4) | u64::from(nibble))
                    .ok_or_else(invalid)
            })
        })
        .collect()
}

/// Inverse of [`hex_to_numbers`]: lowercase hex of each number minus its
/// leading digit.
pub fn numbers_to_hex(numbers: &[u64]) -> String {
    let mut out = String::new();
    for n in numbers {
        let group = format!("{n:x}");
        out.push_str(&group[1..]);
    }
    out
}
