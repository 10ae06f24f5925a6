//! The tree engine: insertion, search, removal, extrema, and order
//! statistics over an arena-backed node graph.

use std::cmp::Ordering;
use std::mem;

use crate::arena::{Arena, Node, NodeId};
use crate::error::Error;

/// Which child slot of a parent a node hangs off of.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Direction {
    Left,
    Right,
}

fn natural_order<V: Ord>(a: &V, b: &V) -> Ordering {
    a.cmp(b)
}

/// An unbalanced binary search tree over values of type `V`, ordered by a
/// comparator `C` injected at construction.
///
/// Values comparing equal under the comparator are rejected, so the tree
/// behaves as an ordered set. Every node keeps a parent back-reference,
/// and the whole node graph lives in an arena owned by the tree; nodes
/// are addressed through copyable [`NodeId`] handles.
///
/// There is no self-balancing: inserting values in sorted order
/// degenerates the tree into a list and every operation into O(n). That
/// shape is accepted here, not mitigated.
///
/// # Examples
///
/// ```
/// use bstree::Tree;
///
/// let mut tree = Tree::new();
///
/// // Nothing in here yet.
/// assert_eq!(tree.find(&1), None);
///
/// let id = tree.insert(1).unwrap();
/// assert_eq!(tree.find(&1), Some(id));
/// assert_eq!(tree.value(id), Some(&1));
///
/// // Removing a value returns it.
/// assert_eq!(tree.remove(&1), Ok(1));
/// assert_eq!(tree.find(&1), None);
/// ```
#[derive(Clone)]
pub struct Tree<V, C = fn(&V, &V) -> Ordering>
where
    C: Fn(&V, &V) -> Ordering,
{
    arena: Arena<V>,
    root: Option<NodeId>,
    size: usize,
    comparator: C,
}

impl<V: Ord> Tree<V> {
    /// Creates an empty tree ordered by `V`'s natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<V>)
    }
}

impl<V: Ord> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> Tree<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    /// Creates an empty tree ordered by `comparator`.
    ///
    /// The comparator must be a total order over the values the tree will
    /// see; the tree consults nothing else when placing a node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// // Order strings by length instead of lexicographically.
    /// let mut tree = Tree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// tree.insert("ox").unwrap();
    /// tree.insert("heron").unwrap();
    /// tree.insert("badger").unwrap();
    ///
    /// let shortest = tree.min().unwrap();
    /// assert_eq!(tree.value(shortest), Some(&"ox"));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
            size: 0,
            comparator,
        }
    }

    /// Number of values currently stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Handle of the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The value stored at `id`, or `None` for a stale handle.
    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Handle of `id`'s left child.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|node| node.left)
    }

    /// Handle of `id`'s right child.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|node| node.right)
    }

    /// Handle of `id`'s parent. `None` for the root and for stale
    /// handles.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|node| node.parent)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<V> {
        self.arena.get(id).expect("live NodeId refers to an occupied slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        self.arena
            .get_mut(id)
            .expect("live NodeId refers to an occupied slot")
    }

    pub(crate) fn compare(&self, value: &V, id: NodeId) -> Ordering {
        (self.comparator)(value, &self.node(id).value)
    }

    /// Inserts `value` and returns a handle to its new node.
    ///
    /// A value comparing equal to one already stored is rejected with
    /// [`Error::DuplicateValue`]; nothing is attached and the size does
    /// not change. Cost is O(depth): O(log n) on randomly ordered input,
    /// O(n) once sorted insertions have degenerated the tree into a list.
    pub fn insert(&mut self, value: V) -> Result<NodeId, Error> {
        match self.root {
            None => {
                let id = self.arena.alloc(value);
                self.root = Some(id);
                self.size = 1;
                Ok(id)
            }
            Some(root) => self.insert_in(root, value),
        }
    }

    fn insert_in(&mut self, id: NodeId, value: V) -> Result<NodeId, Error> {
        match self.compare(&value, id) {
            Ordering::Less => match self.node(id).left {
                Some(left) => self.insert_in(left, value),
                None => Ok(self.attach(id, value, Direction::Left)),
            },
            Ordering::Greater => match self.node(id).right {
                Some(right) => self.insert_in(right, value),
                None => Ok(self.attach(id, value, Direction::Right)),
            },
            Ordering::Equal => Err(Error::DuplicateValue),
        }
    }

    /// Hangs a fresh node off `parent`'s `direction` slot.
    fn attach(&mut self, parent: NodeId, value: V, direction: Direction) -> NodeId {
        let id = self.arena.alloc(value);
        self.node_mut(id).parent = Some(parent);
        match direction {
            Direction::Left => self.node_mut(parent).left = Some(id),
            Direction::Right => self.node_mut(parent).right = Some(id),
        }
        self.size += 1;
        id
    }

    /// Looks up the node holding a value comparing equal to `value`.
    pub fn find(&self, value: &V) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            current = match self.compare(value, id) {
                Ordering::Less => self.node(id).left,
                Ordering::Greater => self.node(id).right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Node holding the smallest value in the tree.
    pub fn min(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Node holding the largest value in the tree.
    pub fn max(&self) -> Option<NodeId> {
        self.root.map(|root| self.rightmost(root))
    }

    /// Node holding the smallest value within the subtree rooted at
    /// `node`. Usable on any subtree, which is how removal locates
    /// in-order successors. `None` for a stale handle.
    pub fn min_in(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?;
        Some(self.leftmost(node))
    }

    /// Node holding the largest value within the subtree rooted at
    /// `node`. `None` for a stale handle.
    pub fn max_in(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?;
        Some(self.rightmost(node))
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    /// Removes the node whose value compares equal to `value` and returns
    /// the value it held, or [`Error::NotFound`] if no node matches.
    ///
    /// Descends by comparator sign, rewriting child links along the path.
    /// A leaf is simply detached; a node with one child has that child
    /// promoted into its place; a node with two children has its value
    /// replaced by its in-order successor (the smallest value of its
    /// right subtree) and the successor's node spliced out instead. The
    /// successor, being a leftmost node, has at most a right child, so
    /// that splice never cascades.
    pub fn remove(&mut self, value: &V) -> Result<V, Error> {
        let root = self.root.ok_or(Error::NotFound)?;
        let (new_root, removed) = self.remove_in(root, value);
        self.root = new_root;
        if let Some(id) = self.root {
            self.node_mut(id).parent = None;
        }
        removed.ok_or(Error::NotFound)
    }

    /// Removes `value` from the subtree rooted at `id`, returning the
    /// handle that takes the subtree's place plus the removed value.
    fn remove_in(&mut self, id: NodeId, value: &V) -> (Option<NodeId>, Option<V>) {
        match self.compare(value, id) {
            Ordering::Less => {
                let removed = match self.node(id).left {
                    Some(left) => {
                        let (new_left, removed) = self.remove_in(left, value);
                        self.node_mut(id).left = new_left;
                        if let Some(child) = new_left {
                            self.node_mut(child).parent = Some(id);
                        }
                        removed
                    }
                    None => None,
                };
                (Some(id), removed)
            }
            Ordering::Greater => {
                let removed = match self.node(id).right {
                    Some(right) => {
                        let (new_right, removed) = self.remove_in(right, value);
                        self.node_mut(id).right = new_right;
                        if let Some(child) = new_right {
                            self.node_mut(child).parent = Some(id);
                        }
                        removed
                    }
                    None => None,
                };
                (Some(id), removed)
            }
            Ordering::Equal => self.remove_node(id),
        }
    }

    /// The three deletion cases, applied to the node actually holding the
    /// target value.
    fn remove_node(&mut self, id: NodeId) -> (Option<NodeId>, Option<V>) {
        let (left, right) = {
            let node = self.node(id);
            (node.left, node.right)
        };
        match (left, right) {
            // A leaf: detach it.
            (None, None) => {
                let value = self.arena.release(id);
                self.size -= 1;
                (None, Some(value))
            }
            // One child: promote it into the removed node's place.
            (Some(child), None) | (None, Some(child)) => {
                let parent = self.node(id).parent;
                self.node_mut(child).parent = parent;
                let value = self.arena.release(id);
                self.size -= 1;
                (Some(child), Some(value))
            }
            // Two children: replace the value with the in-order
            // successor's and splice the successor's node out.
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let successor_value = self.splice_out(successor);
                let value = mem::replace(&mut self.node_mut(id).value, successor_value);
                self.size -= 1;
                (Some(id), Some(value))
            }
        }
    }

    /// Unlinks a node with no left child, wiring its right child (if any)
    /// into its parent's slot, and returns its value. Only called on
    /// in-order successors, which always have a parent.
    fn splice_out(&mut self, id: NodeId) -> V {
        let (parent, child) = {
            let node = self.node(id);
            (node.parent.expect("in-order successor has a parent"), node.right)
        };
        if self.node(parent).left == Some(id) {
            self.node_mut(parent).left = child;
        } else {
            self.node_mut(parent).right = child;
        }
        if let Some(child) = child {
            self.node_mut(child).parent = Some(parent);
        }
        self.arena.release(id)
    }

    /// Node holding the `k`th smallest value, 1-indexed.
    ///
    /// `None` when `k` is outside `[1, size]`.
    pub fn kth_smallest(&self, k: usize) -> Option<NodeId> {
        self.kth(k, Direction::Left)
    }

    /// Node holding the `k`th largest value, 1-indexed.
    ///
    /// `None` when `k` is outside `[1, size]`.
    pub fn kth_largest(&self, k: usize) -> Option<NodeId> {
        self.kth(k, Direction::Right)
    }

    fn kth(&self, k: usize, direction: Direction) -> Option<NodeId> {
        // The walk below settles nodes by decrementing a counter, so an
        // out-of-range k has to be rejected before walking.
        if k < 1 || k > self.size {
            return None;
        }
        let mut remaining = k;
        self.kth_in(self.root, &mut remaining, direction)
    }

    /// Walks the `direction` subtree first, settles the current node by
    /// decrementing the counter, then sweeps the opposite subtree for the
    /// nodes not yet accounted for.
    fn kth_in(
        &self,
        node: Option<NodeId>,
        remaining: &mut usize,
        direction: Direction,
    ) -> Option<NodeId> {
        let id = node?;
        let (far, near) = match direction {
            Direction::Left => (self.node(id).left, self.node(id).right),
            Direction::Right => (self.node(id).right, self.node(id).left),
        };
        if let Some(found) = self.kth_in(far, remaining, direction) {
            return Some(found);
        }
        *remaining -= 1;
        if *remaining == 0 {
            return Some(id);
        }
        self.kth_in(near, remaining, direction)
    }

    /// Releases every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.size = 0;
    }

    /// Visits the stored values in ascending comparator order.
    ///
    /// Iteration follows parent links instead of recursing, so it is safe
    /// on arbitrarily deep trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [3, 1, 2] {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// let sorted: Vec<i32> = tree.iter().copied().collect();
    /// assert_eq!(sorted, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V, C> {
        Iter {
            tree: self,
            next: self.min(),
        }
    }

    /// In-order successor of `id` via parent links.
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right {
            return Some(self.leftmost(right));
        }
        let mut current = id;
        let mut parent = self.node(id).parent;
        while let Some(above) = parent {
            if self.node(above).right == Some(current) {
                current = above;
                parent = self.node(above).parent;
            } else {
                return Some(above);
            }
        }
        None
    }
}

/// In-order iterator over a [`Tree`]'s values. Created by [`Tree::iter`].
pub struct Iter<'a, V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    tree: &'a Tree<V, C>,
    next: Option<NodeId>,
}

impl<'a, V, C> Iterator for Iter<'a, V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let id = self.next?;
        self.next = self.tree.successor(id);
        Some(&self.tree.node(id).value)
    }
}

impl<'a, V, C> IntoIterator for &'a Tree<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    type Item = &'a V;
    type IntoIter = Iter<'a, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
