//! Slot arena backing a tree's node graph.
//!
//! Parent back-references make the node graph cyclic, so nodes live in a
//! `Vec` and refer to each other through stable indices instead of owning
//! pointers. Removing a node vacates its slot onto a free list and the
//! next insertion reuses it, so a long-lived tree churning through values
//! doesn't grow without bound.

use std::fmt;

/// An opaque handle to a node in a [`Tree`](crate::Tree).
///
/// A handle is only meaningful against the tree that produced it. One
/// kept across a removal may point at a vacated slot (the tree's
/// accessors then answer `None`) or, after further insertions, at a
/// different node that reused the slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A tree vertex: the stored value plus its links. The forward links
/// (`left`, `right`) define ownership of subtrees; `parent` is the
/// non-owning back-reference.
#[derive(Clone)]
pub(crate) struct Node<V> {
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<V> Node<V> {
    fn new(value: V) -> Self {
        Node {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }
}

#[derive(Clone)]
enum Slot<V> {
    Occupied(Node<V>),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone)]
pub(crate) struct Arena<V> {
    slots: Vec<Slot<V>>,
    free: Option<u32>,
}

impl<V> Arena<V> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: None,
        }
    }

    /// Stores `value` in a fresh node, reusing a vacated slot when one
    /// exists.
    pub(crate) fn alloc(&mut self, value: V) -> NodeId {
        match self.free {
            Some(index) => {
                let next_free = match &self.slots[index as usize] {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.free = next_free;
                self.slots[index as usize] = Slot::Occupied(Node::new(value));
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(Node::new(value)));
                NodeId((self.slots.len() - 1) as u32)
            }
        }
    }

    /// Vacates the slot behind `id` and returns the value it held.
    pub(crate) fn release(&mut self, id: NodeId) -> V {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id.0 as usize], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                node.value
            }
            Slot::Vacant { .. } => panic!("released a slot that was already vacant"),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<V>> {
        match self.slots.get(id.0 as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        match self.slots.get_mut(id.0 as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Drops every node at once.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_hands_out_distinct_handles() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");

        assert_ne!(a, b);
        assert_eq!(arena.get(a).map(|n| n.value), Some("a"));
        assert_eq!(arena.get(b).map(|n| n.value), Some("b"));
    }

    #[test]
    fn release_returns_the_value_and_vacates_the_slot() {
        let mut arena = Arena::new();
        let id = arena.alloc(7);

        assert_eq!(arena.release(id), 7);
        assert!(arena.get(id).is_none());
    }

    #[test]
    fn released_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let _b = arena.alloc(2);

        arena.release(a);
        let c = arena.alloc(3);

        assert_eq!(c, a);
        assert_eq!(arena.get(c).map(|n| n.value), Some(3));
    }

    #[test]
    fn clear_vacates_everything() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);

        arena.clear();

        assert!(arena.get(a).is_none());
        assert!(arena.get(b).is_none());
    }
}
