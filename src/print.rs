//! Tree rendering for demos and debugging.
//!
//! Reads nodes exclusively through the public accessor surface (value,
//! left, right, parent), the same read-only contract external
//! pretty-printers get.

use std::cmp::Ordering;
use std::fmt;

use crate::arena::NodeId;
use crate::tree::Tree;

impl<V, C> fmt::Display for Tree<V, C>
where
    V: fmt::Display,
    C: Fn(&V, &V) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_from(self.root(), f, "")
    }
}

impl<V, C> Tree<V, C>
where
    V: fmt::Display,
    C: Fn(&V, &V) -> Ordering,
{
    /// One `├──`-connected line per node, right subtree rendered above
    /// left so the output reads top-down like the tree tilted on its
    /// side.
    fn fmt_from(
        &self,
        node: Option<NodeId>,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
    ) -> fmt::Result {
        let id = match node {
            Some(id) => id,
            None => return Ok(()),
        };
        let value = self.value(id).expect("reachable node is occupied");
        writeln!(f, "{}├──{}", prefix, value)?;

        // Nodes sitting in their parent's right slot get a continuation
        // bar drawn under them.
        let is_right = self
            .parent(id)
            .map_or(false, |parent| self.right(parent) == Some(id));
        let separator = if is_right { "│  " } else { "   " };
        let child_prefix = format!("{}{}", prefix, separator);

        self.fmt_from(self.right(id), f, &child_prefix)?;
        self.fmt_from(self.left(id), f, &child_prefix)
    }
}

impl<V, C> fmt::Debug for Tree<V, C>
where
    V: fmt::Debug,
    C: Fn(&V, &V) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size())
            .field(
                "root",
                &DebugNode {
                    tree: self,
                    node: self.root(),
                },
            )
            .finish()
    }
}

struct DebugNode<'a, V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    tree: &'a Tree<V, C>,
    node: Option<NodeId>,
}

impl<'a, V, C> fmt::Debug for DebugNode<'a, V, C>
where
    V: fmt::Debug,
    C: Fn(&V, &V) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            None => f.write_str("Leaf"),
            Some(id) => f
                .debug_struct("Node")
                .field(
                    "value",
                    self.tree.value(id).expect("reachable node is occupied"),
                )
                .field(
                    "left",
                    &DebugNode {
                        tree: self.tree,
                        node: self.tree.left(id),
                    },
                )
                .field(
                    "right",
                    &DebugNode {
                        tree: self.tree,
                        node: self.tree.right(id),
                    },
                )
                .finish(),
        }
    }
}
