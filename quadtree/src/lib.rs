pub mod quadtree;

pub use quadtree::{Config, NodeCursor, NodeMut, NodeRef, QuadTree, Query};
