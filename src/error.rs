/// Broad category of a [`HashidsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The codec configuration is unusable.
    Config,
    /// A value passed to encode was rejected.
    Input,
    /// A hash did not round-trip under this configuration.
    DecodeMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashidsError {
    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("alphabet must contain at least {min} unique characters, found {unique}")]
    AlphabetTooShort { unique: usize, min: usize },

    #[error("alphabet cannot contain spaces")]
    AlphabetContainsSpace,

    #[error("derived alphabet '{alphabet}' with guards '{guards}' cannot encode numbers")]
    DegenerateAlphabet { alphabet: String, guards: String },

    #[error("no numbers to encode")]
    EmptyInput,

    #[error("number {number} is negative")]
    NegativeNumber { number: i64 },

    #[error("number {number} exceeds the maximum of {max}")]
    NumberOutOfRange { number: u64, max: u64 },

    #[error("invalid hex string: '{hex}'")]
    InvalidHex { hex: String },

    #[error("hex prefix not allowed: '{hex}'")]
    HexPrefixNotAllowed { hex: String },

    #[error("hash '{hash}' was not produced by this configuration")]
    DecodeMismatch { hash: String },
}

impl HashidsError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyAlphabet
            | Self::AlphabetTooShort { .. }
            | Self::AlphabetContainsSpace
            | Self::DegenerateAlphabet { .. } => ErrorKind::Config,
            Self::EmptyInput
            | Self::NegativeNumber { .. }
            | Self::NumberOutOfRange { .. }
            | Self::InvalidHex { .. }
            | Self::HexPrefixNotAllowed { .. } => ErrorKind::Input,
            Self::DecodeMismatch { .. } => ErrorKind::DecodeMismatch,
        }
    }
}

pub type Result<T> = std::result::Result<T, HashidsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_too_short_display() {
        let error = HashidsError::AlphabetTooShort { unique: 10, min: 16 };
        assert_eq!(
            error.to_string(),
            "alphabet must contain at least 16 unique characters, found 10"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let error = HashidsError::NumberOutOfRange {
            number: 9_007_199_254_740_992,
            max: 9_007_199_254_740_991,
        };
        assert_eq!(
            error.to_string(),
            "number 9007199254740992 exceeds the maximum of 9007199254740991"
        );
    }

    #[test]
    fn test_negative_display() {
        let error = HashidsError::NegativeNumber { number: -1 };
        assert_eq!(error.to_string(), "number -1 is negative");
    }

    #[test]
    fn test_hex_displays() {
        let invalid = HashidsError::InvalidHex { hex: "xyz".to_string() };
        assert_eq!(invalid.to_string(), "invalid hex string: 'xyz'");

        let prefixed = HashidsError::HexPrefixNotAllowed { hex: "0xff".to_string() };
        assert_eq!(prefixed.to_string(), "hex prefix not allowed: '0xff'");
    }

    #[test]
    fn test_decode_mismatch_display() {
        let error = HashidsError::DecodeMismatch { hash: "abc".to_string() };
        assert_eq!(
            error.to_string(),
            "hash 'abc' was not produced by this configuration"
        );
    }

    #[test]
    fn test_kind_config() {
        assert_eq!(HashidsError::EmptyAlphabet.kind(), ErrorKind::Config);
        assert_eq!(HashidsError::AlphabetContainsSpace.kind(), ErrorKind::Config);
        assert_eq!(
            HashidsError::AlphabetTooShort { unique: 1, min: 16 }.kind(),
            ErrorKind::Config
        );
        assert_eq!(
            HashidsError::DegenerateAlphabet {
                alphabet: "a".to_string(),
                guards: String::new(),
            }
            .kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_kind_input() {
        assert_eq!(HashidsError::EmptyInput.kind(), ErrorKind::Input);
        assert_eq!(HashidsError::NegativeNumber { number: -5 }.kind(), ErrorKind::Input);
        assert_eq!(
            HashidsError::NumberOutOfRange { number: 2, max: 1 }.kind(),
            ErrorKind::Input
        );
        assert_eq!(
            HashidsError::InvalidHex { hex: String::new() }.kind(),
            ErrorKind::Input
        );
    }

    #[test]
    fn test_kind_mismatch() {
        let error = HashidsError::DecodeMismatch { hash: "x".to_string() };
        assert_eq!(error.kind(), ErrorKind::DecodeMismatch);
    }

    #[test]
    fn test_error_clone_and_equality() {
        let error1 = HashidsError::InvalidHex { hex: "g".to_string() };
        let error2 = error1.clone();
        assert_eq!(error1, error2);
        assert!(format!("{error1:?}").contains("InvalidHex"));
    }
}
