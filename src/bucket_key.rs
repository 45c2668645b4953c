//! BucketKey: the short word prefix that places a word in the table.

use core::fmt;

/// Number of leading characters that form a bucket key.
pub const BUCKET_KEY_LEN: usize = 2;

/// Leading `BUCKET_KEY_LEN` characters of a word (fewer for shorter words).
/// Distinct words sharing a prefix share a bucket.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BucketKey(String);

impl BucketKey {
    pub fn from_word(word: &str) -> Self {
        let end = word
            .char_indices()
            .nth(BUCKET_KEY_LEN)
            .map_or(word.len(), |(i, _)| i);
        BucketKey(word[..end].to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Polynomial rolling hash, `h = c + 31 * h` per character, wrapping at 32 bits.
    pub fn hash_code(&self) -> u32 {
        self.0
            .chars()
            .fold(0u32, |h, c| u32::from(c).wrapping_add(h.wrapping_mul(31)))
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the key is the first two characters, or the whole short word.
    #[test]
    fn prefix_extraction() {
        assert_eq!(BucketKey::from_word("cat").as_str(), "ca");
        assert_eq!(BucketKey::from_word("ca").as_str(), "ca");
        assert_eq!(BucketKey::from_word("c").as_str(), "c");
        assert_eq!(BucketKey::from_word("").as_str(), "");
        assert_eq!(BucketKey::from_word("cat"), BucketKey::from_word("cap"));
        assert_ne!(BucketKey::from_word("cat"), BucketKey::from_word("cut"));
    }

    /// Invariant: prefixes cut on character boundaries, not bytes.
    #[test]
    fn prefix_respects_char_boundaries() {
        assert_eq!(BucketKey::from_word("ééé").as_str(), "éé");
        assert_eq!(BucketKey::from_word("aé").as_str(), "aé");
    }

    /// Invariant: hash follows `c + 31 * h` over the key's characters.
    #[test]
    fn rolling_hash_values() {
        assert_eq!(BucketKey::from_word("").hash_code(), 0);
        assert_eq!(BucketKey::from_word("a").hash_code(), 97);
        assert_eq!(BucketKey::from_word("ca").hash_code(), 97 + 31 * 99);
        assert_eq!(BucketKey::from_word("cat").hash_code(), 97 + 31 * 99);
        assert_eq!(BucketKey::from_word("ba").hash_code(), 97 + 31 * 98);
    }
}
