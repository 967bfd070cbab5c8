use std::fmt;

/// An encoded hash together with the numbers it was built from.
///
/// Equality and hashing cover both fields. The default value is the empty
/// hashid returned for rejected input outside strict mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hashid {
    numbers: Vec<u64>,
    hash: String,
}

impl Hashid {
    pub(crate) const fn new(numbers: Vec<u64>, hash: String) -> Self {
        Self { numbers, hash }
    }

    #[must_use]
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Length of the hash in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hash.chars().count()
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<u64>, String) {
        (self.numbers, self.hash)
    }
}

impl fmt::Display for Hashid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

impl AsRef<str> for Hashid {
    fn as_ref(&self) -> &str {
        &self.hash
    }
}

impl From<Hashid> for String {
    fn from(id: Hashid) -> Self {
        id.hash
    }
}

impl PartialEq<str> for Hashid {
    fn eq(&self, other: &str) -> bool {
        self.hash == other
    }
}

impl PartialEq<&str> for Hashid {
    fn eq(&self, other: &&str) -> bool {
        self.hash == *other
    }
}
