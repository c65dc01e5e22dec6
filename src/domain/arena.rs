//! Arena-backed first-child/next-sibling tree.
//!
//! Every node is owned by exactly one slot: the `child` edge of its parent or the
//! `next` edge of its preceding sibling. Splices move indices between slots and
//! never duplicate a subtree.

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, TreeResult};

/// Label given to the root element.
pub const ROOT_LABEL: &str = "html";

/// Tree node: an element when `child` is set, a text leaf otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    /// Element name for elements, literal text for leaves
    pub label: String,
    /// First child, None for leaves
    pub child: Option<Index>,
    /// Next sibling at the same nesting level
    pub next: Option<Index>,
}

impl TagNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            child: None,
            next: None,
        }
    }

    pub fn is_element(&self) -> bool {
        self.child.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.child.is_none()
    }
}

impl fmt::Display for TagNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_element() {
            write!(f, "<{}>", self.label)
        } else {
            write!(f, "{:?}", self.label)
        }
    }
}

/// Arena storage for one markup document.
///
/// The root is created with the arena and is never removed.
#[derive(Debug)]
pub struct TagTree {
    arena: Arena<TagNode>,
    root: Index,
}

impl Default for TagTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TagTree {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TagNode::new(ROOT_LABEL));
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get(&self, idx: Index) -> Option<&TagNode> {
        self.arena.get(idx)
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut TagNode> {
        self.arena.get_mut(idx)
    }

    /// Like [`TagTree::get`] but reports stale indices as an error.
    pub fn node(&self, idx: Index) -> TreeResult<&TagNode> {
        self.arena.get(idx).ok_or(DomainError::NodeNotFound(idx))
    }

    pub fn label(&self, idx: Index) -> Option<&str> {
        self.get(idx).map(|n| n.label.as_str())
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// A tree always holds its root, so this only reports whether the root has content.
    pub fn is_empty(&self) -> bool {
        self.get(self.root).map_or(true, TagNode::is_leaf)
    }

    #[instrument(level = "trace", skip(self, label))]
    pub(crate) fn insert_node(
        &mut self,
        label: impl Into<String>,
        child: Option<Index>,
        next: Option<Index>,
    ) -> Index {
        self.arena.insert(TagNode {
            label: label.into(),
            child,
            next,
        })
    }

    /// Drops a node that no slot refers to any more.
    pub(crate) fn release(&mut self, idx: Index) -> Option<TagNode> {
        self.arena.remove(idx)
    }

    /// Last node of the sibling chain starting at `idx`.
    pub fn last_sibling(&self, idx: Index) -> Index {
        let mut current = idx;
        while let Some(next) = self.get(current).and_then(|n| n.next) {
            current = next;
        }
        current
    }

    /// Appends `node` as the last child of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn append_child(&mut self, parent: Index, node: Index) {
        match self.get(parent).and_then(|p| p.child) {
            Some(first) => {
                let tail = self.last_sibling(first);
                if let Some(tail) = self.get_mut(tail) {
                    tail.next = Some(node);
                }
            }
            None => {
                if let Some(parent) = self.get_mut(parent) {
                    parent.child = Some(node);
                }
            }
        }
    }

    /// Inserts `node` directly after `after`, taking over its former `next`.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn insert_after(&mut self, after: Index, node: Index) {
        let former_next = self.get(after).and_then(|n| n.next);
        if let Some(inserted) = self.get_mut(node) {
            inserted.next = former_next;
        }
        if let Some(after) = self.get_mut(after) {
            after.next = Some(node);
        }
    }

    /// Direct children of `parent`, in order.
    pub fn children(&self, parent: Index) -> Siblings<'_> {
        Siblings {
            tree: self,
            current: self.get(parent).and_then(|p| p.child),
        }
    }

    /// Document-order (pre-order) traversal starting at the root.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Index of every node in document order.
    pub fn indices(&self) -> Vec<Index> {
        self.iter().map(|(idx, _)| idx).collect()
    }

    /// First element with `label` in document order.
    pub fn find_first(&self, label: &str) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.is_element() && node.label == label)
            .map(|(idx, _)| idx)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in self.children(idx) {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    /// Text of every leaf in document order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_texts(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.label.clone())
            .collect()
    }
}

pub struct Siblings<'a> {
    tree: &'a TagTree,
    current: Option<Index>,
}

impl Iterator for Siblings<'_> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.tree.get(current).and_then(|n| n.next);
        Some(current)
    }
}

pub struct TreeIterator<'a> {
    tree: &'a TagTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a TagTree) -> Self {
        Self {
            tree,
            stack: vec![tree.root()],
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TagNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.get(current) {
                // Sibling goes under the child so the whole child subtree comes first
                if let Some(next) = node.next {
                    self.stack.push(next);
                }
                if let Some(child) = node.child {
                    self.stack.push(child);
                }
                return Some((current, node));
            }
        }
        None
    }
}
