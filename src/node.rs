//! Forward-linked cells and the arena they live in.
//!
//! `LinkedList` and `Queue` each own a private `SlotMap` of nodes; `next`
//! holds a key into that same map. Keys never cross instances, so a chain
//! can only be reached through the structure that built it.

use core::iter::FusedIterator;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generational key of a node inside one structure's arena.
    pub(crate) struct NodeKey;
}

pub(crate) type Arena<T> = SlotMap<NodeKey, Node<T>>;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeKey>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

/// Borrowing iterator over a node chain, front to back.
///
/// Cloning the iterator restarts nothing; it forks the traversal at its
/// current position. Call `iter()` again on the owner to start over.
pub struct Iter<'a, T> {
    nodes: &'a Arena<T>,
    cursor: Option<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<T>, head: Option<NodeKey>, len: usize) -> Self {
        Self {
            nodes,
            cursor: head,
            remaining: len,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
