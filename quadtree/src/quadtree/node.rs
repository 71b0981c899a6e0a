use common::Rect;

pub(crate) struct Node<T> {
    pub(crate) bounds: Rect,
    pub(crate) bucket: Vec<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(bounds: Rect, max_objects: usize) -> Self {
        Self {
            bounds,
            bucket: Vec::with_capacity(max_objects + 1),
        }
    }
}

/// Implicit 4-ary heap addressing: child `quadrant` of node `id`.
#[inline]
pub(crate) fn child_id(id: u32, quadrant: u32) -> u32 {
    4 * id + 1 + quadrant
}

/// Quadrant bounds by exact per-axis midpoint split, in fixed order
/// 0=NW, 1=NE, 2=SW, 3=SE.
pub(crate) fn quadrant_bounds(bounds: &Rect, quadrant: u32) -> Rect {
    let center = bounds.center();
    match quadrant {
        0 => Rect::new(bounds.left, bounds.top, center.x, center.y),
        1 => Rect::new(center.x, bounds.top, bounds.right, center.y),
        2 => Rect::new(bounds.left, center.y, center.x, bounds.bottom),
        3 => Rect::new(center.x, center.y, bounds.right, bounds.bottom),
        _ => unreachable!("quadrant index out of range: {}", quadrant),
    }
}
