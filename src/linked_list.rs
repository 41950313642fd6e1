//! LinkedList: singly linked, head-only sequence over a private node arena.
//!
//! No tail pointer is kept, so `append` walks the chain. This is the bucket
//! type of [`HashMap`](crate::HashMap), where chains stay short.

use crate::error::{Error, Result};
use crate::node::{Arena, Node, NodeKey};
use core::fmt;
use core::iter::FusedIterator;

pub use crate::node::Iter;

#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Arena<T>,
    head: Option<NodeKey>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::with_key(),
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First value, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|k| &self.nodes[k].value)
    }

    fn last_key(&self) -> Option<NodeKey> {
        let mut cur = self.head?;
        while let Some(next) = self.nodes[cur].next {
            cur = next;
        }
        Some(cur)
    }

    fn key_at(&self, index: usize) -> Result<NodeKey> {
        let out_of_range = Error::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        let mut cur = self.head;
        for _ in 0..index {
            cur = cur.and_then(|k| self.nodes[k].next);
        }
        cur.ok_or(out_of_range)
    }

    /// Links `value` after the last node. O(n).
    pub fn append(&mut self, value: T) {
        let last = self.last_key();
        let key = self.nodes.insert(Node::new(value));
        match last {
            Some(last) => self.nodes[last].next = Some(key),
            None => self.head = Some(key),
        }
        self.len += 1;
    }

    /// Makes `value` the new head. O(1).
    pub fn prepend(&mut self, value: T) {
        let mut node = Node::new(value);
        node.next = self.head;
        self.head = Some(self.nodes.insert(node));
        self.len += 1;
    }

    /// Unlinks and returns the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.nodes.remove(self.head?)?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Unlinks the first value matching `pred` and hands it back.
    pub fn take_first<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev: Option<NodeKey> = None;
        let mut cur = self.head;
        while let Some(key) = cur {
            let node = &self.nodes[key];
            if pred(&node.value) {
                let next = node.next;
                match prev {
                    Some(p) => self.nodes[p].next = next,
                    None => self.head = next,
                }
                self.len -= 1;
                return self.nodes.remove(key).map(|n| n.value);
            }
            prev = cur;
            cur = node.next;
        }
        None
    }

    /// Removes the first value matching `pred`. Returns whether one was found;
    /// on `false` the list is untouched.
    pub fn remove<F>(&mut self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.take_first(pred).is_some()
    }

    /// Removes the first value equal to `value`.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove(|v| v == value)
    }

    /// Value at `index`, walking from the head.
    pub fn get(&self, index: usize) -> Result<&T> {
        let key = self.key_at(index)?;
        Ok(&self.nodes[key].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let key = self.key_at(index)?;
        Ok(&mut self.nodes[key].value)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let key = self.last_key()?;
        self.nodes.get_mut(key).map(|n| &mut n.value)
    }

    pub fn find<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|v| pred(*v))
    }

    pub fn find_mut<F>(&mut self, mut pred: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cur = self.head;
        while let Some(key) = cur {
            if pred(&self.nodes[key].value) {
                return self.nodes.get_mut(key).map(|n| &mut n.value);
            }
            cur = self.nodes[key].next;
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
    }

    /// Front-to-back traversal. The list cannot be mutated while it is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Owning iterator; pops from the front.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // One walk to the end, then link in place.
        let mut last = self.last_key();
        for value in iter {
            let key = self.nodes.insert(Node::new(value));
            match last {
                Some(l) => self.nodes[l].next = Some(key),
                None => self.head = Some(key),
            }
            last = Some(key);
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}
