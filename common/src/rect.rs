use crate::vec2::Vec2;
use rand::Rng;

/// Axis-aligned rectangle stored as its four edges, with `left <= right`
/// and `top <= bottom` guaranteed by construction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

fn minmax(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Rect {
    /// Normalizing constructor: per-axis operands are sorted, so argument
    /// order does not matter.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        debug_assert!(
            left.is_finite() && top.is_finite() && right.is_finite() && bottom.is_finite(),
            "rect edges must be finite (left: {}, top: {}, right: {}, bottom: {})",
            left,
            top,
            right,
            bottom
        );
        let (left, right) = minmax(left, right);
        let (top, bottom) = minmax(top, bottom);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self::new(
            center.x - half_extent.x,
            center.y - half_extent.y,
            center.x + half_extent.x,
            center.y + half_extent.y,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Open-interval overlap test. Rectangles that only touch along an
    /// edge or corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Strict containment test. A rectangle does not contain an equal
    /// copy of itself.
    pub fn contains(&self, other: &Rect) -> bool {
        self.left < other.left
            && self.right > other.right
            && self.top < other.top
            && self.bottom > other.bottom
    }

    /// Half-open box test: `x` in `[left, right)`, `y` in `[top, bottom)`.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    /// Uniform random point at least `margin` away from every edge.
    /// Degenerate rectangles clamp to the top-left inset corner.
    pub fn random_point_inside<R: Rng>(&self, margin: f32, rng: &mut R) -> Vec2 {
        Vec2::new(
            safe_rand_f32(rng, self.left + margin, self.right - margin),
            safe_rand_f32(rng, self.top + margin, self.bottom - margin),
        )
    }
}

fn safe_rand_f32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}
