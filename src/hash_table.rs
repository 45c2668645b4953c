//! HashTable: fixed-capacity open addressing over bucket keys, double hashing.

use crate::bucket_key::BucketKey;
use crate::container::{Container, ContainerKind};
use crate::error::Error;
use std::io::{self, Write};
use thiserror::Error as ThisError;
use tracing::{debug, trace};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InsertError {
    /// Every probe position holds a different bucket key.
    #[error("hash table is full")]
    TableFull,
    #[error("cannot insert an empty word")]
    EmptyWord,
}

/// An occupied slot: the bucket key, how many words were added under it,
/// and the container holding those words.
#[derive(Debug)]
pub struct Bucket {
    key: BucketKey,
    count: usize,
    container: Container,
}

impl Bucket {
    fn new(key: BucketKey, kind: ContainerKind, word: &str) -> Self {
        let mut container = Container::new(kind);
        container.add(word);
        Self {
            key,
            count: 1,
            container,
        }
    }

    pub fn key(&self) -> &BucketKey {
        &self.key
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn container(&self) -> &Container {
        &self.container
    }
}

/// Probe positions for one bucket key: start at `hash % capacity`, then step
/// by `1 + start % (capacity - 1)`, at most `capacity` times.
#[derive(Clone, Debug)]
struct Probe {
    next: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl Probe {
    fn new(key: &BucketKey, capacity: usize) -> Self {
        let start = key.hash_code() as usize % capacity;
        Self {
            next: start,
            step: 1 + start % (capacity - 1),
            capacity,
            remaining: capacity,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let i = self.next;
        self.next = (self.next + self.step) % self.capacity;
        Some(i)
    }
}

pub struct HashTable {
    slots: Box<[Option<Bucket>]>,
    kind: ContainerKind,
    occupied: usize,
}

impl HashTable {
    /// Smallest capacity the step formula allows.
    pub const MIN_CAPACITY: usize = 2;

    /// Allocate `capacity` empty slots. The capacity never changes; prime
    /// capacities guarantee every probe sequence visits every slot.
    pub fn new(capacity: usize, kind: ContainerKind) -> Result<Self, Error> {
        if capacity < Self::MIN_CAPACITY {
            return Err(Error::InvalidCapacity(capacity));
        }
        debug!(capacity, ?kind, "creating hash table");
        Ok(Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            kind,
            occupied: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots (distinct bucket keys).
    pub fn len(&self) -> usize {
        self.occupied
    }
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Total words added across all buckets, repeats included.
    pub fn word_count(&self) -> usize {
        self.buckets().map(|(_, b)| b.count).sum()
    }

    /// Add `word` to the bucket for its key, claiming an empty slot if the
    /// key is new. Returns the bucket's updated count.
    pub fn insert(&mut self, word: &str) -> Result<usize, InsertError> {
        if word.is_empty() {
            return Err(InsertError::EmptyWord);
        }
        let key = BucketKey::from_word(word);
        for i in Probe::new(&key, self.capacity()) {
            let slot = &mut self.slots[i];
            match slot {
                Some(bucket) if bucket.key == key => {
                    bucket.count += 1;
                    bucket.container.add(word);
                    return Ok(bucket.count);
                }
                Some(_) => {}
                None => {
                    trace!(slot = i, key = %key, "occupying slot");
                    *slot = Some(Bucket::new(key, self.kind, word));
                    self.occupied += 1;
                    return Ok(1);
                }
            }
        }
        debug!(word, key = %key, occupied = self.occupied, "no slot for bucket key");
        Err(InsertError::TableFull)
    }

    /// Whether `word` was inserted. An empty slot on the probe path ends the
    /// search: its bucket key was never placed.
    pub fn search(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let key = BucketKey::from_word(word);
        for i in Probe::new(&key, self.capacity()) {
            match &self.slots[i] {
                None => return false,
                Some(bucket) if bucket.key == key => return bucket.container.search(word),
                Some(_) => {}
            }
        }
        false
    }

    /// Occupied slots in index order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &Bucket)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|b| (i, b)))
    }

    /// Writes one line per occupied slot, in slot order, holding that
    /// bucket's container dump.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (_, bucket) in self.buckets() {
            bucket.container.print(out)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for HashTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.capacity())
            .field("occupied", &self.occupied)
            .field("kind", &self.kind)
            .finish()
    }
}
