//! Container: one bucket's word store, either a FlexArray or an RbTree.

use crate::flex_array::FlexArray;
use crate::rb_tree::RbTree;
use std::io::{self, Write};

/// Backing structure chosen for every container of a table.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ContainerKind {
    #[default]
    FlexArray,
    RedBlackTree,
}

#[derive(Debug)]
pub enum Container {
    FlexArray(FlexArray),
    RedBlackTree(RbTree),
}

impl Container {
    pub fn new(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::FlexArray => Container::FlexArray(FlexArray::new()),
            ContainerKind::RedBlackTree => Container::RedBlackTree(RbTree::new()),
        }
    }

    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::FlexArray(_) => ContainerKind::FlexArray,
            Container::RedBlackTree(_) => ContainerKind::RedBlackTree,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Container::FlexArray(a) => a.len(),
            Container::RedBlackTree(t) => t.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store `word`. Repeats are stored again, never merged.
    pub fn add(&mut self, word: &str) {
        match self {
            Container::FlexArray(a) => a.append(word),
            Container::RedBlackTree(t) => {
                t.insert(word);
                t.fix_root();
            }
        }
    }

    pub fn search(&self, word: &str) -> bool {
        match self {
            Container::FlexArray(a) => a.contains(word),
            Container::RedBlackTree(t) => t.search(word),
        }
    }

    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Container::FlexArray(a) => a.print(out),
            Container::RedBlackTree(t) => t.print(out),
        }
    }

    pub fn as_flex_array(&self) -> Option<&FlexArray> {
        match self {
            Container::FlexArray(a) => Some(a),
            Container::RedBlackTree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&RbTree> {
        match self {
            Container::RedBlackTree(t) => Some(t),
            Container::FlexArray(_) => None,
        }
    }
}
