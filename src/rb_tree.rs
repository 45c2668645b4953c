//! RbTree: red-black tree of owned words, rebalanced bottom-up on insert.
//!
//! Nodes live in a `SlotMap` arena and refer to their children by
//! generational `NodeKey`; each node has exactly one parent edge, so the
//! arena forms a strict ownership tree. Nodes are never removed, and the
//! whole arena is released at once when the tree is dropped.
//!
//! Insertion descends recursively and rebalances every node on the way
//! back up (`fix`). The root may be left red by that pass; the caller is
//! expected to follow every top-level `insert` with `fix_root`.
//!
//! Keys comparing equal descend to the left, so repeated words are kept
//! as distinct nodes. In-order traversal is therefore non-decreasing
//! rather than strictly increasing, and `search` still finds any of them.

use core::cmp::Ordering;
use slotmap::{new_key_type, SlotMap};
use std::io::{self, Write};

new_key_type! {
    struct NodeKey;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Red-red shapes checked at every node after an insert, as
/// (child side, grandchild side). Checked in order, not exclusively.
const VIOLATIONS: [(Side, Side); 4] = [
    (Side::Left, Side::Left),
    (Side::Left, Side::Right),
    (Side::Right, Side::Left),
    (Side::Right, Side::Right),
];

#[derive(Debug)]
struct Node {
    key: String,
    color: Color,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

impl Node {
    fn new_red(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    fn child(&self, side: Side) -> Option<NodeKey> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeKey> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[derive(Debug)]
pub struct RbTree {
    nodes: SlotMap<NodeKey, Node>,
    root: Option<NodeKey>,
}

impl RbTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }

    /// Number of stored keys, repeats included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|r| self.nodes[r].color)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, link: Option<NodeKey>) -> usize {
        match link {
            None => 0,
            Some(n) => {
                let node = &self.nodes[n];
                1 + self.height_of(node.left).max(self.height_of(node.right))
            }
        }
    }

    /// Insert a copy of `key`, rebalancing bottom-up along the insertion path.
    ///
    /// Leaves the root colour as the fix-up produced it; call `fix_root`
    /// afterwards to restore a black root.
    pub fn insert(&mut self, key: &str) {
        let root = self.insert_at(self.root, key);
        self.root = Some(root);
    }

    /// Force the root black.
    pub fn fix_root(&mut self) {
        if let Some(r) = self.root {
            self.nodes[r].color = Color::Black;
        }
    }

    pub fn search(&self, key: &str) -> bool {
        let mut link = self.root;
        while let Some(n) = link {
            let node = &self.nodes[n];
            link = match node.key.as_str().cmp(key) {
                Ordering::Equal => return true,
                Ordering::Less => node.right,
                Ordering::Greater => node.left,
            };
        }
        false
    }

    /// Keys in order (non-decreasing).
    pub fn iter(&self) -> Iter<'_> {
        let mut it = Iter {
            tree: self,
            stack: Vec::new(),
        };
        it.push_left_spine(self.root);
        it
    }

    /// Writes every key in pre-order (node, left, right), each followed by a space.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut stack: Vec<NodeKey> = self.root.into_iter().collect();
        while let Some(n) = stack.pop() {
            let node = &self.nodes[n];
            write!(out, "{} ", node.key)?;
            stack.extend(node.right);
            stack.extend(node.left);
        }
        Ok(())
    }

    fn insert_at(&mut self, link: Option<NodeKey>, key: &str) -> NodeKey {
        let Some(n) = link else {
            return self.nodes.insert(Node::new_red(key));
        };
        // Equal keys go left.
        let side = if self.nodes[n].key.as_str() < key {
            Side::Right
        } else {
            Side::Left
        };
        let below = self.nodes[n].child(side);
        let below = self.insert_at(below, key);
        *self.nodes[n].child_mut(side) = Some(below);
        self.fix(n)
    }

    fn child_of(&self, link: Option<NodeKey>, side: Side) -> Option<NodeKey> {
        link.and_then(|n| self.nodes[n].child(side))
    }

    // Absent children count as black.
    fn is_red(&self, link: Option<NodeKey>) -> bool {
        link.is_some_and(|n| self.nodes[n].color == Color::Red)
    }

    fn set_color(&mut self, link: Option<NodeKey>, color: Color) {
        if let Some(n) = link {
            self.nodes[n].color = color;
        }
    }

    /// Rotate `n` so that its child on `side` takes its place; returns the
    /// new subtree root. Lifting the left child is a right rotation.
    fn lift(&mut self, n: NodeKey, side: Side) -> NodeKey {
        let Some(pivot) = self.nodes[n].child(side) else {
            return n;
        };
        let inner = self.nodes[pivot].child(side.opposite());
        *self.nodes[n].child_mut(side) = inner;
        *self.nodes[pivot].child_mut(side.opposite()) = Some(n);
        pivot
    }

    fn flip_colors(&mut self, n: NodeKey) {
        let (left, right) = (self.nodes[n].left, self.nodes[n].right);
        self.nodes[n].color = Color::Red;
        self.set_color(left, Color::Black);
        self.set_color(right, Color::Black);
    }

    /// Resolve a red child with a red grandchild below `n`. A red sibling
    /// means a colour flip that hands the violation up to the caller;
    /// otherwise one rotation (outer grandchild) or two (inner grandchild)
    /// make the middle key a black subtree root with two red children.
    fn fix(&mut self, mut n: NodeKey) -> NodeKey {
        for (outer, inner) in VIOLATIONS {
            let child = self.child_of(Some(n), outer);
            if !(self.is_red(child) && self.is_red(self.child_of(child, inner))) {
                continue;
            }
            if self.is_red(self.child_of(Some(n), outer.opposite())) {
                self.flip_colors(n);
                continue;
            }
            if let (Some(c), true) = (child, inner != outer) {
                let lifted = self.lift(c, inner);
                *self.nodes[n].child_mut(outer) = Some(lifted);
            }
            n = self.lift(n, outer);
            self.nodes[n].color = Color::Black;
            let demoted = self.nodes[n].child(outer.opposite());
            self.set_color(demoted, Color::Red);
        }
        n
    }
}

impl Default for RbTree {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over the keys of an `RbTree`.
pub struct Iter<'a> {
    tree: &'a RbTree,
    stack: Vec<NodeKey>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut link: Option<NodeKey>) {
        while let Some(n) = link {
            self.stack.push(n);
            link = self.tree.nodes[n].left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[n];
        self.push_left_spine(node.right);
        Some(node.key.as_str())
    }
}

#[cfg(test)]
impl RbTree {
    /// Panics unless the root is black, no red node has a red child, every
    /// root-to-leaf path has the same number of black nodes, in-order keys
    /// are non-decreasing and every arena node is reachable from the root.
    pub(crate) fn assert_invariants(&self) {
        assert_ne!(self.root_color(), Some(Color::Red), "root must be black");
        self.black_height(self.root);
        let keys: Vec<&str> = self.iter().collect();
        assert_eq!(keys.len(), self.len(), "every node reachable exactly once");
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "in-order keys not sorted: {keys:?}"
        );
    }

    fn black_height(&self, link: Option<NodeKey>) -> usize {
        let Some(n) = link else { return 1 };
        let node = &self.nodes[n];
        if node.color == Color::Red {
            assert!(
                !self.is_red(node.left) && !self.is_red(node.right),
                "red node {:?} has a red child",
                node.key
            );
        }
        let l = self.black_height(node.left);
        let r = self.black_height(node.right);
        assert_eq!(l, r, "unequal black height below {:?}", node.key);
        l + usize::from(node.color == Color::Black)
    }
}
