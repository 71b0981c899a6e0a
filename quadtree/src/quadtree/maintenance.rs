use super::node::{child_id, Node};
use super::query::NodeStack;
use super::QuadTree;
use common::Rect;

impl<T, F> QuadTree<T, F>
where
    F: Fn(&T) -> Rect,
{
    /// Removes exactly the addressed slot. The node must be materialized,
    /// must not be the root, and its bucket must already be empty;
    /// violating any of these is a programmer error and panics. Erasure
    /// does not cascade: the caller guarantees no materialized
    /// descendants exist.
    pub fn erase(&mut self, id: u32) {
        assert!(id != 0, "the root node cannot be erased; use clear()");
        let node = self
            .slots
            .get(id as usize)
            .and_then(Option::as_ref)
            .unwrap_or_else(|| panic!("erase on absent node {}", id));
        assert!(
            node.bucket.is_empty(),
            "erase on node {} with {} objects still in its bucket",
            id,
            node.bucket.len()
        );
        debug_assert!(
            self.is_leaf(id),
            "erase on node {} with materialized descendants",
            id
        );
        self.slots[id as usize] = None;
    }

    /// Resets to a single fresh root with the original world bounds and a
    /// zero object count.
    pub fn clear(&mut self) {
        let bounds = self.bounds();
        let max_objects = self.config.max_objects;
        self.slots.clear();
        self.slots.push(Some(Node::new(bounds, max_objects)));
        self.len = 0;
    }

    /// Removes and returns every object whose current rectangle is no
    /// longer strictly contained by its node's bounds. The root keeps its
    /// objects (it is the catch-all). Callers re-`push` the returned
    /// objects to re-seat them; bucket order is not preserved.
    pub fn take_strays(&mut self) -> Vec<T> {
        let mut strays = Vec::new();
        let get_rect = &self.get_rect;
        for slot in self.slots.iter_mut().skip(1) {
            let node = match slot.as_mut() {
                Some(node) => node,
                None => continue,
            };
            let mut i = 0;
            while i < node.bucket.len() {
                if node.bounds.contains(&get_rect(&node.bucket[i])) {
                    i += 1;
                } else {
                    strays.push(node.bucket.swap_remove(i));
                }
            }
        }
        self.len -= strays.len();
        strays
    }

    /// Removes the first object comparing equal to `object`, located by
    /// rect-guided descent from the root. The object's rectangle must be
    /// current for the descent to find it. A node left with an empty
    /// bucket and no materialized children is erased, unless it is the
    /// root.
    pub fn remove(&mut self, object: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let rect = (self.get_rect)(object);
        let (id, index) = self.find_object(object, &rect)?;
        let node = self.slots[id as usize]
            .as_mut()
            .expect("found node is materialized");
        let removed = node.bucket.swap_remove(index);
        self.len -= 1;
        if id != 0 && self.node(id).map_or(false, |n| n.bucket.is_empty()) && self.is_leaf(id) {
            self.erase(id);
        }
        Some(removed)
    }

    fn find_object(&self, object: &T, rect: &Rect) -> Option<(u32, usize)>
    where
        T: PartialEq,
    {
        let mut stack = NodeStack::new();
        stack.push(0);
        while let Some(id) = stack.pop() {
            let node = self.node(id).expect("queued node is materialized");
            if let Some(index) = node.bucket.iter().position(|stored| stored == object) {
                return Some((id, index));
            }
            for q in 0..4 {
                let cid = child_id(id, q);
                if let Some(child) = self.node(cid) {
                    if child.bounds.intersects(rect) {
                        stack.push(cid);
                    }
                }
            }
        }
        None
    }
}
