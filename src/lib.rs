mod alphabet;
pub mod config;
mod decode;
mod encode;
pub mod error;
pub mod hashid;
pub mod hashids;
mod hex;
mod positional;
mod shuffle;

pub use error::{ErrorKind, HashidsError, Result};
pub use config::{
    DEFAULT_ALPHABET, DEFAULT_SEPARATORS, Features, HashidsConfig, MAX_INTEROP_NUMBER_SIZE,
    MIN_ALPHABET_LENGTH,
};
pub use hashid::Hashid;
pub use hashids::Hashids;
