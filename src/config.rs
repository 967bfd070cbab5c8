use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Default alphabet: lowercase, uppercase, then digits.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Default separator candidates.
pub const DEFAULT_SEPARATORS: &str = "cfhistuCFHISTU";

/// Smallest number of unique alphabet characters accepted.
pub const MIN_ALPHABET_LENGTH: usize = 16;

/// Largest number that stays decodable by implementations limited to
/// IEEE-754 doubles (`2^53 - 1`).
pub const MAX_INTEROP_NUMBER_SIZE: u64 = (1 << 53) - 1;

/// Optional behaviours of a codec, combined with `|`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Features(u8);

impl Features {
    pub const NONE: Self = Self(0);
    /// Accept `0x`/`0X` in front of hex input.
    pub const ALLOW_HEX_PREFIX: Self = Self(1);
    /// Return typed errors instead of empty values.
    pub const STRICT_ERRORS: Self = Self(1 << 1);
    /// Accept any `u64`, not just numbers up to [`MAX_INTEROP_NUMBER_SIZE`].
    pub const NO_INTEROP_BOUND: Self = Self(1 << 2);
    pub const ALL: Self = Self(0b111);

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Features {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Features {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::ALLOW_HEX_PREFIX, "ALLOW_HEX_PREFIX"),
            (Self::STRICT_ERRORS, "STRICT_ERRORS"),
            (Self::NO_INTEROP_BOUND, "NO_INTEROP_BOUND"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Features({})", set.join(" | "))
    }
}

/// Raw codec settings, validated by [`crate::Hashids::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashidsConfig {
    pub salt: String,
    pub min_length: usize,
    pub alphabet: String,
    pub separators: String,
    pub features: Features,
}

impl HashidsConfig {
    #[must_use]
    pub fn new(salt: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            min_length: 0,
            alphabet: DEFAULT_ALPHABET.to_string(),
            separators: DEFAULT_SEPARATORS.to_string(),
            features: Features::NONE,
        }
    }

    #[must_use]
    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    #[must_use]
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    #[must_use]
    pub fn separators(mut self, separators: impl Into<String>) -> Self {
        self.separators = separators.into();
        self
    }

    #[must_use]
    pub const fn features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }
}

impl Default for HashidsConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_defaults() {
        let config = HashidsConfig::new("pepper");
        assert_eq!(config.salt, "pepper");
        assert_eq!(config.min_length, 0);
        assert_eq!(config.alphabet, DEFAULT_ALPHABET);
        assert_eq!(config.separators, DEFAULT_SEPARATORS);
        assert_eq!(config.features, Features::NONE);
    }

    #[test]
    fn test_default_has_empty_salt() {
        assert_eq!(HashidsConfig::default(), HashidsConfig::new(""));
    }

    #[test]
    fn test_builder_chain() {
        let config = HashidsConfig::new("s")
            .min_length(8)
            .alphabet("0123456789abcdef")
            .separators("abc")
            .features(Features::STRICT_ERRORS);
        assert_eq!(config.min_length, 8);
        assert_eq!(config.alphabet, "0123456789abcdef");
        assert_eq!(config.separators, "abc");
        assert!(config.features.contains(Features::STRICT_ERRORS));
    }

    #[test]
    fn test_interop_bound() {
        assert_eq!(MAX_INTEROP_NUMBER_SIZE, 9_007_199_254_740_991);
    }

    #[test]
    fn test_features_combine() {
        let mut features = Features::ALLOW_HEX_PREFIX | Features::NO_INTEROP_BOUND;
        assert!(features.contains(Features::ALLOW_HEX_PREFIX));
        assert!(features.contains(Features::NO_INTEROP_BOUND));
        assert!(!features.contains(Features::STRICT_ERRORS));

        features |= Features::STRICT_ERRORS;
        assert_eq!(features, Features::ALL);
    }

    #[test]
    fn test_features_empty() {
        assert!(Features::NONE.is_empty());
        assert!(Features::default().is_empty());
        assert!(!Features::ALL.is_empty());
        assert!(Features::ALL.contains(Features::NONE));
    }

    #[test]
    fn test_features_debug() {
        let features = Features::ALLOW_HEX_PREFIX | Features::STRICT_ERRORS;
        assert_eq!(
            format!("{features:?}"),
            "Features(ALLOW_HEX_PREFIX | STRICT_ERRORS)"
        );
        assert_eq!(format!("{:?}", Features::NONE), "Features()");
    }
}
