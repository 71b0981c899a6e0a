use super::node::{child_id, quadrant_bounds, Node};
use super::QuadTree;
use common::Rect;

impl<T, F> QuadTree<T, F>
where
    F: Fn(&T) -> Rect,
{
    /// Inserts an object. The object lands in the root bucket first; if
    /// that pushes the bucket past `max_objects`, a redistribution pass
    /// sinks every object that fits a single quadrant into the matching
    /// child, materializing child slots on the way down.
    pub fn push(&mut self, object: T) {
        self.root_mut().bucket.push(object);
        self.len += 1;
        if self.root().bucket.len() > self.config.max_objects {
            self.redistribute(0, 0);
        }
    }

    /// Bulk insert; equivalent to `push` per object.
    pub fn extend<I>(&mut self, objects: I)
    where
        I: IntoIterator<Item = T>,
    {
        for object in objects {
            self.push(object);
        }
    }

    fn redistribute(&mut self, id: u32, depth: u32) {
        if depth >= self.config.max_depth {
            // Depth cap reached: the bucket keeps its objects instead of
            // splitting into ever-thinner quadrants.
            return;
        }

        let (bounds, drained) = {
            let node = self.slots[id as usize]
                .as_mut()
                .expect("redistribute on absent node");
            (node.bounds, std::mem::take(&mut node.bucket))
        };

        let mut retained = Vec::with_capacity(self.config.max_objects + 1);
        for object in drained {
            let rect = (self.get_rect)(&object);
            // First quadrant (fixed order NW, NE, SW, SE) that strictly
            // contains the object's rectangle receives it.
            match (0..4).find(|&q| quadrant_bounds(&bounds, q).contains(&rect)) {
                Some(q) => {
                    let child = self.materialize_child(id, q, &bounds);
                    child.bucket.push(object);
                }
                None => retained.push(object),
            }
        }
        self.slots[id as usize]
            .as_mut()
            .expect("redistribute on absent node")
            .bucket = retained;

        // A child that collected more than max_objects overflows in turn.
        for q in 0..4 {
            let cid = child_id(id, q);
            let overfull = self
                .node(cid)
                .map_or(false, |child| child.bucket.len() > self.config.max_objects);
            if overfull {
                self.redistribute(cid, depth + 1);
            }
        }
    }

    fn materialize_child(&mut self, id: u32, quadrant: u32, parent_bounds: &Rect) -> &mut Node<T> {
        let last_sibling = child_id(id, 3) as usize;
        if self.slots.len() <= last_sibling {
            // All four sibling slots are reserved (as absent) the moment
            // any one of them materializes.
            self.slots.resize_with(last_sibling + 1, || None);
        }
        let cid = child_id(id, quadrant) as usize;
        if self.slots[cid].is_none() {
            let bounds = quadrant_bounds(parent_bounds, quadrant);
            self.slots[cid] = Some(Node::new(bounds, self.config.max_objects));
        }
        self.slots[cid].as_mut().expect("child slot just materialized")
    }
}
