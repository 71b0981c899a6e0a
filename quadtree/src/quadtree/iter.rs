use super::node::Node;
use super::QuadTree;
use common::Rect;

/// Shared view of one materialized node.
pub struct NodeRef<'a, T> {
    id: u32,
    node: &'a Node<T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.node.bounds
    }

    pub fn objects(&self) -> &'a [T] {
        &self.node.bucket
    }
}

/// Mutable view of one materialized node. Objects can be mutated in
/// place; the bucket length cannot change through this view.
pub struct NodeMut<'a, T> {
    id: u32,
    bounds: Rect,
    objects: &'a mut [T],
}

impl<'a, T> NodeMut<'a, T> {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn objects_mut(&mut self) -> &mut [T] {
        self.objects
    }
}

impl<T, F> QuadTree<T, F>
where
    F: Fn(&T) -> Rect,
{
    /// Iterates materialized, non-empty nodes in increasing id order.
    /// Restartable by calling again; reversible via `rev()`.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            inner: self.slots.iter().enumerate(),
        }
    }

    /// Mutable form of [`QuadTree::nodes`].
    pub fn nodes_mut(&mut self) -> NodesMut<'_, T> {
        NodesMut {
            inner: self.slots.iter_mut().enumerate(),
        }
    }

    /// Bidirectional cursor over the same sequence as [`QuadTree::nodes`],
    /// with fatal out-of-range semantics: dereferencing or advancing the
    /// end position panics, as does retreating from the first element.
    pub fn cursor(&self) -> NodeCursor<'_, T, F> {
        NodeCursor {
            tree: self,
            pos: self.next_occupied(0),
        }
    }

    fn next_occupied(&self, from: usize) -> Option<u32> {
        self.slots[from.min(self.slots.len())..]
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|n| !n.bucket.is_empty()))
            .map(|offset| (from + offset) as u32)
    }

    fn prev_occupied(&self, before: usize) -> Option<u32> {
        self.slots[..before.min(self.slots.len())]
            .iter()
            .rposition(|slot| slot.as_ref().is_some_and(|n| !n.bucket.is_empty()))
            .map(|id| id as u32)
    }
}

pub struct Nodes<'a, T> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Option<Node<T>>>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, slot) in self.inner.by_ref() {
            if let Some(node) = slot.as_ref() {
                if !node.bucket.is_empty() {
                    return Some(NodeRef {
                        id: id as u32,
                        node,
                    });
                }
            }
        }
        None
    }
}

impl<'a, T> DoubleEndedIterator for Nodes<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((id, slot)) = self.inner.next_back() {
            if let Some(node) = slot.as_ref() {
                if !node.bucket.is_empty() {
                    return Some(NodeRef {
                        id: id as u32,
                        node,
                    });
                }
            }
        }
        None
    }
}

pub struct NodesMut<'a, T> {
    inner: std::iter::Enumerate<std::slice::IterMut<'a, Option<Node<T>>>>,
}

impl<'a, T> Iterator for NodesMut<'a, T> {
    type Item = NodeMut<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, slot) in self.inner.by_ref() {
            if let Some(node) = slot.as_mut() {
                if !node.bucket.is_empty() {
                    return Some(NodeMut {
                        id: id as u32,
                        bounds: node.bounds,
                        objects: &mut node.bucket,
                    });
                }
            }
        }
        None
    }
}

impl<'a, T> DoubleEndedIterator for NodesMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((id, slot)) = self.inner.next_back() {
            if let Some(node) = slot.as_mut() {
                if !node.bucket.is_empty() {
                    return Some(NodeMut {
                        id: id as u32,
                        bounds: node.bounds,
                        objects: &mut node.bucket,
                    });
                }
            }
        }
        None
    }
}

/// Explicit position in the node sequence. `None` is the one-past-the-end
/// position; a fresh cursor starts at the first non-empty node, or at the
/// end when the tree holds no objects.
pub struct NodeCursor<'a, T, F = fn(&T) -> Rect> {
    tree: &'a QuadTree<T, F>,
    pos: Option<u32>,
}

impl<'a, T, F> NodeCursor<'a, T, F>
where
    F: Fn(&T) -> Rect,
{
    pub fn is_end(&self) -> bool {
        self.pos.is_none()
    }

    /// The node at the cursor. Panics at the end position.
    pub fn node(&self) -> NodeRef<'a, T> {
        let id = match self.pos {
            Some(id) => id,
            None => panic!("cannot dereference the end position"),
        };
        NodeRef {
            id,
            node: self
                .tree
                .node(id)
                .expect("cursor position is a materialized node"),
        }
    }

    /// Advances to the next non-empty node. Panics when already at the
    /// end position.
    pub fn move_next(&mut self) {
        let id = match self.pos {
            Some(id) => id,
            None => panic!("increment would move past the end"),
        };
        self.pos = self.tree.next_occupied(id as usize + 1);
    }

    /// Retreats to the previous non-empty node; from the end position
    /// this is the last node. Panics when already at the first element
    /// (or when the sequence is empty).
    pub fn move_prev(&mut self) {
        let before = match self.pos {
            Some(id) => id as usize,
            None => self.tree.slots.len(),
        };
        match self.tree.prev_occupied(before) {
            Some(id) => self.pos = Some(id),
            None => panic!("decrement would move before the first node"),
        }
    }
}
