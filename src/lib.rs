//! chained-hashmap: a single-threaded, separate-chaining HashMap whose
//! buckets are singly linked lists, plus a FIFO queue over the same node
//! type.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: small collections with explicit, testable invariants (FIFO order,
//!   chain integrity, load-factor control, rehash correctness).
//! - Layers:
//!   - Node<T>: one value and the arena key of the next node. Each owning
//!     structure keeps its nodes in a private `slotmap::SlotMap`.
//!   - LinkedList<T>: head-only singly linked list. O(1) prepend, O(n)
//!     append and positional access.
//!   - Queue<T>: its own chain with head and tail keys; O(1) enqueue,
//!     dequeue and rotate.
//!   - HashMap<K, V, S>: `Vec` of `LinkedList<HashEntry<K, V>>` buckets that
//!     doubles when the projected fill ratio would pass the threshold.
//!
//! Constraints
//! - Single-threaded and synchronous. Callers needing sharing wrap the whole
//!   structure in their own lock.
//! - No `unsafe`. The queue's tail is an arena key, not a raw pointer, so the
//!   chain is never aliased from outside its owner.
//! - Traversals borrow the structure; the borrow checker forbids mutation
//!   while one is alive, so a resize can never invalidate an iterator.
//!
//! Hasher and rehashing invariants
//! - The default hasher is `hashbrown`'s fixed-key builder, deterministic
//!   for the life of the process. Any `BuildHasher` may be supplied.
//! - An entry with key `k` always lives in bucket `hash(k) mod capacity`.
//!   A rehash recomputes that for every entry against the new capacity.
//!
//! Failure policy
//! - Missing keys and unmatched predicates are `None`, not errors.
//! - `Queue::dequeue`/`peek` on an empty queue, `LinkedList::get` out of
//!   range and bad `HashMapConfig` values are reported through [`Error`].
//! - A call that reports a miss or an error has not mutated anything.

pub mod config;
pub mod error;
pub mod hash_map;
mod hash_map_proptest;
pub mod linked_list;
mod node;
pub mod queue;

// Public surface
pub use config::HashMapConfig;
pub use error::{Error, Result};
pub use hash_map::{HashEntry, HashMap};
pub use linked_list::LinkedList;
pub use queue::Queue;
