mod config;
mod insert;
mod iter;
mod maintenance;
mod node;
mod query;

pub use config::Config;
pub use iter::{NodeCursor, NodeMut, NodeRef, Nodes, NodesMut};
pub use query::Query;

use common::Rect;
use node::{child_id, Node};

/// Region quadtree over axis-aligned bounding boxes.
///
/// Nodes live in a flat growable vector of optional slots addressed by the
/// implicit 4-ary heap formula: slot 0 is the root, the children of slot
/// `id` are slots `4*id + 1 ..= 4*id + 4`. Non-root slots start absent and
/// are materialized lazily when a bucket overflow redistributes objects
/// into them.
///
/// `get_rect` must be pure and deterministic. The index is not updated
/// automatically when an object's rectangle changes; see
/// [`QuadTree::take_strays`].
pub struct QuadTree<T, F = fn(&T) -> Rect> {
    slots: Vec<Option<Node<T>>>,
    get_rect: F,
    len: usize,
    config: Config,
}

impl<T, F> QuadTree<T, F>
where
    F: Fn(&T) -> Rect,
{
    pub fn new(world_bounds: Rect, get_rect: F) -> Self {
        Self::new_with_config(world_bounds, get_rect, Config::default())
    }

    pub fn new_with_config(world_bounds: Rect, get_rect: F, config: Config) -> Self {
        assert!(
            config.max_depth <= Config::MAX_DEPTH_LIMIT,
            "max_depth {} exceeds the supported limit {}",
            config.max_depth,
            Config::MAX_DEPTH_LIMIT
        );
        let mut slots = Vec::with_capacity(256);
        slots.push(Some(Node::new(world_bounds, config.max_objects)));
        Self {
            slots,
            get_rect,
            len: 0,
            config,
        }
    }

    /// World bounds, fixed for the tree's lifetime.
    pub fn bounds(&self) -> Rect {
        self.root().bounds
    }

    /// Number of objects stored across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max_objects(&self) -> usize {
        self.config.max_objects
    }

    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// Number of currently materialized nodes.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn root(&self) -> &Node<T> {
        self.slots[0].as_ref().expect("root is always materialized")
    }

    fn root_mut(&mut self) -> &mut Node<T> {
        self.slots[0].as_mut().expect("root is always materialized")
    }

    /// Slot lookup; ids beyond the current capacity are absent.
    fn node(&self, id: u32) -> Option<&Node<T>> {
        self.slots.get(id as usize).and_then(Option::as_ref)
    }

    fn is_leaf(&self, id: u32) -> bool {
        (0..4).all(|q| self.node(child_id(id, q)).is_none())
    }
}
