use crate::alphabet::Alphabets;
use crate::config::{Features, HashidsConfig, MAX_INTEROP_NUMBER_SIZE};
use crate::error::{HashidsError, Result};
use crate::hashid::Hashid;
use crate::{decode, encode, hex};

/// Salted, reversible encoder between integer sequences and short strings.
///
/// Construction derives the alphabet, separators and guards once; afterwards
/// the codec is read-only and can be shared between threads freely.
///
/// Outside [`Features::STRICT_ERRORS`] every operation except [`Hashids::new`]
/// answers rejected input with an empty value instead of an error, matching
/// other hashids implementations.
#[derive(Debug, Clone)]
pub struct Hashids {
    salt: Vec<char>,
    min_length: usize,
    features: Features,
    alphabets: Alphabets,
}

impl Hashids {
    /// Build a codec from `config`.
    ///
    /// # Errors
    ///
    /// Always returns configuration errors, whatever the error mode: an empty
    /// alphabet, fewer than 16 unique symbols, a space in the alphabet, or an
    /// alphabet left unusable after separators and guards are removed.
    pub fn new(config: HashidsConfig) -> Result<Self> {
        let salt: Vec<char> = config.salt.chars().collect();
        let alphabets = Alphabets::derive(&config.alphabet, &config.separators, &salt)?;

        tracing::debug!(
            alphabet = alphabets.alphabet.len(),
            separators = alphabets.separators.len(),
            guards = alphabets.guards.len(),
            min_length = config.min_length,
            features = ?config.features,
            "hashids codec configured"
        );

        Ok(Self {
            salt,
            min_length: config.min_length,
            features: config.features,
            alphabets,
        })
    }

    /// Encode `numbers` into a hash.
    ///
    /// # Errors
    ///
    /// In strict mode: `EmptyInput` for an empty slice, `NumberOutOfRange`
    /// for a number above the interop bound (unless lifted).
    pub fn encode(&self, numbers: &[u64]) -> Result<Hashid> {
        self.recover(self.try_encode(numbers))
    }

    /// Encode signed numbers, rejecting negative ones.
    ///
    /// # Errors
    ///
    /// In strict mode: `NegativeNumber` for the first negative value, plus
    /// everything [`Hashids::encode`] rejects.
    pub fn encode_i64(&self, numbers: &[i64]) -> Result<Hashid> {
        let converted = numbers
            .iter()
            .map(|&number| u64::try_from(number).map_err(|_| HashidsError::NegativeNumber { number }))
            .collect::<Result<Vec<u64>>>();
        self.recover(converted.and_then(|numbers| self.try_encode(&numbers)))
    }

    /// Decode a hash produced by this configuration.
    ///
    /// # Errors
    ///
    /// In strict mode: `EmptyInput` for an empty hash, `DecodeMismatch` when
    /// `hash` does not re-encode to itself.
    pub fn decode(&self, hash: &str) -> Result<Vec<u64>> {
        self.recover(self.try_decode(hash))
    }

    /// Encode a hex string of any length.
    ///
    /// # Errors
    ///
    /// In strict mode: `InvalidHex` for empty or non-hex input,
    /// `HexPrefixNotAllowed` for `0x`/`0X` without
    /// [`Features::ALLOW_HEX_PREFIX`].
    pub fn encode_hex(&self, hex: &str) -> Result<String> {
        let allow_prefix = self.features.contains(Features::ALLOW_HEX_PREFIX);
        let encoded = hex::hex_to_numbers(hex, allow_prefix)
            .and_then(|numbers| self.try_encode(&numbers))
            .map(String::from);
        self.recover(encoded)
    }

    /// Decode a hash produced by [`Hashids::encode_hex`] back to lowercase hex.
    ///
    /// # Errors
    ///
    /// Same as [`Hashids::decode`].
    pub fn decode_hex(&self, hash: &str) -> Result<String> {
        self.recover(self.try_decode(hash).map(|numbers| hex::numbers_to_hex(&numbers)))
    }

    #[must_use]
    pub fn salt(&self) -> String {
        self.salt.iter().collect()
    }

    /// Working alphabet, without separators and guards.
    #[must_use]
    pub fn alphabet(&self) -> String {
        self.alphabets.alphabet.iter().collect()
    }

    #[must_use]
    pub fn separators(&self) -> String {
        self.alphabets.separators.iter().collect()
    }

    #[must_use]
    pub fn guards(&self) -> String {
        self.alphabets.guards.iter().collect()
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub const fn features(&self) -> Features {
        self.features
    }

    /// Largest number accepted by encode and produced by decode.
    #[must_use]
    pub const fn max_number(&self) -> u64 {
        if self.features.contains(Features::NO_INTEROP_BOUND) {
            u64::MAX
        } else {
            MAX_INTEROP_NUMBER_SIZE
        }
    }

    fn try_encode(&self, numbers: &[u64]) -> Result<Hashid> {
        if numbers.is_empty() {
            return Err(HashidsError::EmptyInput);
        }
        let max = self.max_number();
        if let Some(&number) = numbers.iter().find(|&&n| n > max) {
            return Err(HashidsError::NumberOutOfRange { number, max });
        }

        let hash = encode::encode(&self.alphabets, &self.salt, self.min_length, numbers);
        Ok(Hashid::new(numbers.to_vec(), hash))
    }

    fn try_decode(&self, hash: &str) -> Result<Vec<u64>> {
        if hash.is_empty() {
            return Err(HashidsError::EmptyInput);
        }

        let max = self.max_number();
        decode::decode(&self.alphabets, &self.salt, self.min_length, hash)
            .filter(|numbers| numbers.iter().all(|&n| n <= max))
            .ok_or_else(|| {
                tracing::trace!(hash, "hash failed round-trip validation");
                HashidsError::DecodeMismatch {
                    hash: hash.to_string(),
                }
            })
    }

    /// Swap errors for an empty value unless strict mode is on.
    fn recover<T: Default>(&self, result: Result<T>) -> Result<T> {
        match result {
            Err(error) if !self.features.contains(Features::STRICT_ERRORS) => {
                tracing::debug!(%error, kind = ?error.kind(), "rejected input, returning empty value");
                Ok(T::default())
            }
            other => other,
        }
    }
}
