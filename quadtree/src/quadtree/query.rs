use super::node::child_id;
use super::QuadTree;
use common::Rect;
use smallvec::SmallVec;

pub(crate) type NodeStack = SmallVec<[u32; 64]>;

impl<T, F> QuadTree<T, F>
where
    F: Fn(&T) -> Rect,
{
    /// Lazy depth-first region query. Subtrees whose node bounds do not
    /// intersect `region` are pruned; every object in a surviving node's
    /// bucket is yielded without re-testing its own rectangle against
    /// `region`, so callers needing exact overlap must re-test. Dropping
    /// the iterator early is the supported way to stop consuming.
    pub fn query(&self, region: Rect) -> Query<'_, T, F> {
        let mut stack = NodeStack::new();
        if self.root().bounds.intersects(&region) {
            stack.push(0);
        }
        Query {
            tree: self,
            region,
            stack,
            bucket: [].iter(),
        }
    }
}

pub struct Query<'a, T, F = fn(&T) -> Rect> {
    tree: &'a QuadTree<T, F>,
    region: Rect,
    stack: NodeStack,
    bucket: std::slice::Iter<'a, T>,
}

impl<'a, T, F> Iterator for Query<'a, T, F>
where
    F: Fn(&T) -> Rect,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(object) = self.bucket.next() {
                return Some(object);
            }
            let id = self.stack.pop()?;
            let node = self.tree.node(id).expect("queued node is materialized");
            // Reverse push order so quadrant 0 is the next node visited.
            for q in (0..4).rev() {
                let cid = child_id(id, q);
                if let Some(child) = self.tree.node(cid) {
                    if child.bounds.intersects(&self.region) {
                        self.stack.push(cid);
                    }
                }
            }
            self.bucket = node.bucket.iter();
        }
    }
}
