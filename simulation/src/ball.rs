use common::{Rect, Vec2};

pub const RADIUS: f32 = 10.0;
pub const SPEED: f32 = 240.0;

/// A moving ball. Position is its center; direction is a unit heading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ball {
    pub id: u32,
    pub position: Vec2,
    pub direction: Vec2,
}

impl Ball {
    /// New ball headed along one of the four diagonals, cycled by id.
    pub fn new(id: u32, position: Vec2) -> Self {
        let direction = match id % 4 {
            0 => Vec2::new(0.707, 0.707),
            1 => Vec2::new(0.707, -0.707),
            2 => Vec2::new(-0.707, 0.707),
            _ => Vec2::new(-0.707, -0.707),
        }
        .normalize();
        Self {
            id,
            position,
            direction,
        }
    }

    pub fn aabb(&self) -> Rect {
        Rect::from_center(self.position, Vec2::new(RADIUS, RADIUS))
    }

    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction * (SPEED * dt);
    }
}

/// Clamps the ball inside `walls` with a `RADIUS` margin and flips the
/// matching direction component on contact.
pub fn rebound_off_walls(ball: &mut Ball, walls: &Rect) {
    let pos = &mut ball.position;
    let dir = &mut ball.direction;
    if pos.x < walls.left + RADIUS {
        pos.x = walls.left + RADIUS;
        dir.x *= -1.0;
    } else if pos.x >= walls.right - RADIUS {
        pos.x = walls.right - RADIUS;
        dir.x *= -1.0;
    }
    if pos.y < walls.top + RADIUS {
        pos.y = walls.top + RADIUS;
        dir.y *= -1.0;
    } else if pos.y >= walls.bottom - RADIUS {
        pos.y = walls.bottom - RADIUS;
        dir.y *= -1.0;
    }
}

/// Center distance test against a single radius.
pub fn balls_collide(lhs: &Ball, rhs: &Ball) -> bool {
    (lhs.position - rhs.position).length_sq() <= RADIUS * RADIUS
}

fn reflect(n: Vec2, d: Vec2) -> Vec2 {
    d - n * (2.0 * n.dot(d))
}

/// Reflects both headings off the collision normal and pushes the pair
/// apart so they no longer overlap.
pub fn resolve(lhs: &mut Ball, rhs: &mut Ball) {
    let delta = lhs.position - rhs.position;
    let norm = delta.normalize();
    let dist = delta.dot(norm);

    let rhs_rebound = reflect(-norm, rhs.direction);
    let lhs_rebound = reflect(norm, lhs.direction);

    let overlap = (RADIUS - dist) * 2.0;
    lhs.position += norm * overlap;
    rhs.position += -norm * overlap;

    lhs.direction = lhs_rebound;
    rhs.direction = rhs_rebound;
}
