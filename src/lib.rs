//! word-dict: a word-frequency dictionary built from two nested structures,
//! a fixed-size open-addressed hash table whose slots each hold a small
//! word container.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: classify streamed words as known/unknown against a vocabulary
//!   loaded once, with each layer small enough to reason about alone.
//! - Layers:
//!   - FlexArray: append-only `String` list; linear membership; prints in
//!     insertion order.
//!   - RbTree: red-black tree in a slotmap arena; recursive insert with a
//!     bottom-up fix-up at every node on the path; the root is blackened
//!     separately by `fix_root`.
//!   - Container: enum over exactly one of the two, fixed at creation;
//!     the tree arm pairs every `insert` with `fix_root`.
//!   - HashTable: `capacity` slots keyed by `BucketKey` (a word's first two
//!     characters), double hashing, per-bucket occurrence count. The full
//!     word is stored in the bucket's container.
//!
//! Two-level lookup
//! - The table only ever compares bucket keys; exact word matching happens
//!   inside the container. Many distinct words share one slot when they
//!   share a prefix, and `insert` returns the bucket's count, not the
//!   word's.
//! - Hash: `h = c + 31 * h` over the key's characters (wrapping `u32`).
//!   Start slot `h % capacity`, step `1 + start % (capacity - 1)`, at most
//!   `capacity` probes. Only prime capacities guarantee every slot is
//!   reachable from every start; other capacities are accepted and may
//!   report `TableFull` early.
//!
//! Constraints
//! - Fixed capacity (>= 2); no resizing, no removal, no persistence.
//! - Single-threaded; every operation runs to completion.
//! - Repeated words are stored again in both container kinds, never
//!   merged. In the tree, equal keys descend left.
//! - Allocation failure aborts the process (Rust's default).
//!
//! Outer surface
//! - `tokenizer` turns a byte stream into lowercase words; `checker::run`
//!   wires a dictionary stream and a query stream through a table under an
//!   explicit `CheckConfig`. The `word-dict` binary is a thin CLI over it.

pub mod bucket_key;
pub mod checker;
pub mod container;
mod error;
pub mod flex_array;
pub mod hash_table;
pub mod rb_tree;
mod rb_tree_proptest;
pub mod tokenizer;

// Public surface
pub use bucket_key::BucketKey;
pub use checker::{run, CheckConfig, CheckReport};
pub use container::{Container, ContainerKind};
pub use error::Error;
pub use flex_array::FlexArray;
pub use hash_table::{Bucket, HashTable, InsertError};
pub use rb_tree::{Color, RbTree};
