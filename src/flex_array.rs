//! FlexArray: append-only list of owned words with linear membership.

use std::io::{self, Write};

const INITIAL_CAPACITY: usize = 2;

#[derive(Debug, Clone)]
pub struct FlexArray {
    items: Vec<String>,
}

impl FlexArray {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an owned copy of `word`. Storage doubles when full.
    pub fn append(&mut self, word: &str) {
        if self.items.len() == self.items.capacity() {
            let grow = self.items.capacity().max(INITIAL_CAPACITY);
            self.items.reserve_exact(grow);
        }
        self.items.push(word.to_owned());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.items.iter().any(|w| w == word)
    }

    /// Words in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Writes every word in insertion order, each followed by a space.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for w in &self.items {
            write!(out, "{w} ")?;
        }
        Ok(())
    }
}

impl Default for FlexArray {
    fn default() -> Self {
        Self::new()
    }
}
