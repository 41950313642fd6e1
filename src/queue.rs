//! Queue: FIFO over its own node chain with head and tail keys.
//!
//! Nodes come from the same arena-backed `Node` type as `LinkedList`, but the
//! queue keeps a tail key so both ends are O(1). `rotate` relinks the head
//! node behind the tail in place, which is observably the same as dequeuing
//! and re-enqueuing its value.

use crate::error::{Error, Result};
use crate::node::{Arena, Node, NodeKey};
use core::fmt;
use core::iter::FusedIterator;

pub use crate::node::Iter;

#[derive(Clone)]
pub struct Queue<T> {
    nodes: Arena<T>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::with_key(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn enqueue(&mut self, value: T) {
        let key = self.nodes.insert(Node::new(value));
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.len += 1;
    }

    /// Removes and returns the oldest value.
    pub fn dequeue(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyQueue)?;
        let node = self.nodes.remove(head).ok_or(Error::EmptyQueue)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// The oldest value, left in place.
    pub fn peek(&self) -> Result<&T> {
        let head = self.head.ok_or(Error::EmptyQueue)?;
        self.nodes
            .get(head)
            .map(|n| &n.value)
            .ok_or(Error::EmptyQueue)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T> {
        let head = self.head.ok_or(Error::EmptyQueue)?;
        self.nodes
            .get_mut(head)
            .map(|n| &mut n.value)
            .ok_or(Error::EmptyQueue)
    }

    /// Moves the head to the tail. A queue of zero or one element is left
    /// as is.
    pub fn rotate(&mut self) {
        if self.len < 2 {
            return;
        }
        if let (Some(head), Some(tail)) = (self.head, self.tail) {
            let next = self.nodes[head].next.take();
            self.nodes[tail].next = Some(head);
            self.head = next;
            self.tail = Some(head);
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Oldest to newest, without dequeuing.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Endless round-robin over the queue: yields a clone of the head, then
    /// rotates. Stops only if the queue is empty.
    ///
    /// ```
    /// use chained_hashmap::Queue;
    ///
    /// let mut q: Queue<&str> = ["01", "04", "08"].into_iter().collect();
    /// let shown: Vec<_> = q.carousel().take(5).collect();
    /// assert_eq!(shown, ["01", "04", "08", "01", "04"]);
    /// assert_eq!(q.peek(), Ok(&"08"));
    /// ```
    pub fn carousel(&mut self) -> Carousel<'_, T>
    where
        T: Clone,
    {
        Carousel { queue: self }
    }
}

/// Iterator returned by [`Queue::carousel`].
pub struct Carousel<'a, T> {
    queue: &'a mut Queue<T>,
}

impl<T: Clone> Iterator for Carousel<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.queue.peek().ok()?.clone();
        self.queue.rotate();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.queue.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}

impl<T: Clone> FusedIterator for Carousel<'_, T> {}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Queue::new();
        q.extend(iter);
        q
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
