//! Visitor-driven walks over the node graph.
//!
//! Each strategy is a variant of [`Traversal`]. The driver invokes the
//! visitor once per visited node with a [`Walk`] context carrying the
//! running count and an early-exit switch, and reports the totals in an
//! [`IterationReport`].

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::arena::NodeId;
use crate::tree::Tree;

/// The order in which [`Tree::traverse`] visits nodes.
#[derive(Debug)]
pub enum Traversal<'a, V> {
    /// Left subtree, node, right subtree: values arrive in ascending
    /// comparator order. The basis of tree-sort.
    InOrder,
    /// Node, left subtree, right subtree (depth-first).
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Level by level, through an explicit FIFO queue sized to the tree,
    /// so deep trees don't cost stack.
    BreadthFirst,
    /// Only the comparator-guided path from the root toward the given
    /// value: a traced lookup. The walk ends at the matching node, or at
    /// the leaf where the descent runs out.
    Search(&'a V),
}

// Not derived: the strategy is copyable whether or not `V` is.
impl<'a, V> Clone for Traversal<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, V> Copy for Traversal<'a, V> {}

/// Iteration context handed to the visitor on every visit.
#[derive(Debug)]
pub struct Walk {
    count: usize,
    done: bool,
}

impl Walk {
    fn new() -> Self {
        Walk {
            count: 0,
            done: false,
        }
    }

    /// How many nodes have been visited so far, the current one included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Ends the traversal; no further nodes are visited.
    pub fn stop(&mut self) {
        self.done = true;
    }
}

/// What a finished [`Tree::traverse`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IterationReport {
    /// Number of nodes the visitor was invoked on. Equal to the tree size
    /// for the four exhaustive strategies, unless the visitor stopped the
    /// walk early.
    pub count: usize,
    /// Whether the visitor cut the traversal short via [`Walk::stop`].
    pub stopped: bool,
}

impl<V, C> Tree<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    /// Walks the tree with the given strategy, invoking `visitor` with
    /// each visited node's value and the iteration context.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Traversal, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// let mut values = Vec::new();
    /// let report = tree.traverse(Traversal::InOrder, |value, _walk| {
    ///     values.push(*value);
    /// });
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// assert_eq!(report.count, 3);
    /// assert!(!report.stopped);
    /// ```
    pub fn traverse<F>(&self, strategy: Traversal<'_, V>, mut visitor: F) -> IterationReport
    where
        F: FnMut(&V, &mut Walk),
    {
        let mut walk = Walk::new();
        match strategy {
            Traversal::InOrder => self.walk_in_order(self.root(), &mut visitor, &mut walk),
            Traversal::PreOrder => self.walk_pre_order(self.root(), &mut visitor, &mut walk),
            Traversal::PostOrder => self.walk_post_order(self.root(), &mut visitor, &mut walk),
            Traversal::BreadthFirst => self.walk_breadth_first(&mut visitor, &mut walk),
            Traversal::Search(value) => {
                self.walk_search(self.root(), value, &mut visitor, &mut walk)
            }
        }
        IterationReport {
            count: walk.count,
            stopped: walk.done,
        }
    }

    fn visit<F>(&self, id: NodeId, visitor: &mut F, walk: &mut Walk)
    where
        F: FnMut(&V, &mut Walk),
    {
        walk.count += 1;
        visitor(&self.node(id).value, walk);
    }

    fn walk_in_order<F>(&self, node: Option<NodeId>, visitor: &mut F, walk: &mut Walk)
    where
        F: FnMut(&V, &mut Walk),
    {
        if walk.done {
            return;
        }
        let id = match node {
            Some(id) => id,
            None => return,
        };
        self.walk_in_order(self.node(id).left, visitor, walk);
        if walk.done {
            return;
        }
        self.visit(id, visitor, walk);
        self.walk_in_order(self.node(id).right, visitor, walk);
    }

    fn walk_pre_order<F>(&self, node: Option<NodeId>, visitor: &mut F, walk: &mut Walk)
    where
        F: FnMut(&V, &mut Walk),
    {
        if walk.done {
            return;
        }
        let id = match node {
            Some(id) => id,
            None => return,
        };
        self.visit(id, visitor, walk);
        self.walk_pre_order(self.node(id).left, visitor, walk);
        self.walk_pre_order(self.node(id).right, visitor, walk);
    }

    fn walk_post_order<F>(&self, node: Option<NodeId>, visitor: &mut F, walk: &mut Walk)
    where
        F: FnMut(&V, &mut Walk),
    {
        if walk.done {
            return;
        }
        let id = match node {
            Some(id) => id,
            None => return,
        };
        self.walk_post_order(self.node(id).left, visitor, walk);
        self.walk_post_order(self.node(id).right, visitor, walk);
        if walk.done {
            return;
        }
        self.visit(id, visitor, walk);
    }

    fn walk_breadth_first<F>(&self, visitor: &mut F, walk: &mut Walk)
    where
        F: FnMut(&V, &mut Walk),
    {
        let root = match self.root() {
            Some(root) => root,
            None => return,
        };
        let mut queue = VecDeque::with_capacity(self.size());
        queue.push_back(root);
        while let Some(id) = queue.pop_front() {
            self.visit(id, visitor, walk);
            if walk.done {
                return;
            }
            if let Some(left) = self.node(id).left {
                queue.push_back(left);
            }
            if let Some(right) = self.node(id).right {
                queue.push_back(right);
            }
        }
    }

    fn walk_search<F>(&self, node: Option<NodeId>, value: &V, visitor: &mut F, walk: &mut Walk)
    where
        F: FnMut(&V, &mut Walk),
    {
        if walk.done {
            return;
        }
        let id = match node {
            Some(id) => id,
            None => return,
        };
        let ordering = self.compare(value, id);
        self.visit(id, visitor, walk);
        match ordering {
            Ordering::Less => self.walk_search(self.node(id).left, value, visitor, walk),
            Ordering::Greater => self.walk_search(self.node(id).right, value, visitor, walk),
            Ordering::Equal => {}
        }
    }
}
