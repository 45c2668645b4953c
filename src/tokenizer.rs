//! Word tokenizer: lowercase ASCII alphanumeric runs from a byte stream.
//!
//! - Bytes that are not ASCII alphanumeric separate words.
//! - Apostrophes inside a word are dropped without ending it ("don't" -> "dont").
//! - Words are capped at `MAX_WORD_LEN` bytes; the rest of an overlong run
//!   starts the next word.

use std::io::{self, Bytes, Read};

pub const MAX_WORD_LEN: usize = 255;

/// Iterator over the words of a reader. Yields I/O errors as they occur.
pub struct Words<R> {
    bytes: Bytes<R>,
    max_len: usize,
}

pub fn words<R: Read>(reader: R) -> Words<R> {
    Words {
        bytes: reader.bytes(),
        max_len: MAX_WORD_LEN,
    }
}

impl<R: Read> Words<R> {
    /// Override the word length cap (at least one byte).
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len.max(1);
        self
    }
}

impl<R: Read> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = loop {
            match self.bytes.next()? {
                Ok(b) if b.is_ascii_alphanumeric() => break b,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
        };
        let mut word = String::new();
        word.push(char::from(first.to_ascii_lowercase()));
        while word.len() < self.max_len {
            match self.bytes.next() {
                Some(Ok(b)) if b.is_ascii_alphanumeric() => {
                    word.push(char::from(b.to_ascii_lowercase()))
                }
                Some(Ok(b'\'')) => {}
                Some(Ok(_)) | None => break,
                Some(Err(e)) => return Some(Err(e)),
            }
        }
        Some(Ok(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<String> {
        words(input.as_bytes()).map(|w| w.unwrap()).collect()
    }

    /// Invariant: words are lowercased alphanumeric runs split on anything else.
    #[test]
    fn splits_and_lowercases() {
        assert_eq!(
            collect("The Cat, sat on\tthe MAT42!\n"),
            ["the", "cat", "sat", "on", "the", "mat42"]
        );
    }

    /// Invariant: empty or separator-only input yields nothing.
    #[test]
    fn no_words() {
        assert!(collect("").is_empty());
        assert!(collect("  ,.;-- \n\t'").is_empty());
    }

    /// Invariant: apostrophes inside a word are elided, not separators.
    #[test]
    fn apostrophes_elided() {
        assert_eq!(collect("don't it's o'clock"), ["dont", "its", "oclock"]);
        // A leading apostrophe is just a separator.
        assert_eq!(collect("'tis"), ["tis"]);
    }

    /// Invariant: non-ASCII bytes separate words.
    #[test]
    fn non_ascii_separates() {
        assert_eq!(collect("café au lait"), ["caf", "au", "lait"]);
    }

    /// Invariant: overlong runs are cut at the cap and continue as a new word.
    #[test]
    fn overlong_words_split_at_cap() {
        let got: Vec<String> = words("abcdefg hi".as_bytes())
            .with_max_len(3)
            .map(|w| w.unwrap())
            .collect();
        assert_eq!(got, ["abc", "def", "g", "hi"]);
    }

    /// Invariant: the default cap is 255 bytes.
    #[test]
    fn default_cap() {
        let long = "x".repeat(300);
        let got = collect(&long);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].len(), MAX_WORD_LEN);
        assert_eq!(got[1].len(), 300 - MAX_WORD_LEN);
    }

    /// Invariant: read errors surface as `Err` items.
    #[test]
    fn read_errors_propagate() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            }
        }
        let mut it = words(Failing);
        assert!(matches!(it.next(), Some(Err(_))));
    }
}
