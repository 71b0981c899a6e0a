use crate::ball::{balls_collide, rebound_off_walls, resolve, Ball, RADIUS};
use common::{Rect, Vec2};
use fxhash::FxHashMap;
use quadtree::{Config, QuadTree};
use rand::Rng;
use tracing::{debug, info};

fn ball_aabb(ball: &Ball) -> Rect {
    ball.aabb()
}

/// Per-step counters. `comparisons` counts every candidate a collision
/// query yielded, self hits included.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct StepStats {
    pub moved: usize,
    pub strays: usize,
    pub comparisons: u64,
    pub collisions: usize,
}

/// Bouncing-ball world backed by a [`QuadTree`] for broad-phase collision
/// detection.
pub struct Simulation {
    tree: QuadTree<Ball, fn(&Ball) -> Rect>,
    walls: Rect,
    next_id: u32,
    comparisons_min: u64,
    comparisons_max: u64,
}

impl Simulation {
    pub fn new(walls: Rect) -> Self {
        Self::new_with_config(walls, Config::default())
    }

    pub fn new_with_config(walls: Rect, config: Config) -> Self {
        Self {
            tree: QuadTree::new_with_config(walls, ball_aabb, config),
            walls,
            next_id: 0,
            comparisons_min: u64::MAX,
            comparisons_max: 0,
        }
    }

    pub fn walls(&self) -> Rect {
        self.walls
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Running `(min, max)` of per-step comparison counts; `None` before
    /// the first step.
    pub fn comparison_range(&self) -> Option<(u64, u64)> {
        (self.comparisons_min <= self.comparisons_max)
            .then_some((self.comparisons_min, self.comparisons_max))
    }

    pub fn spawn_at(&mut self, position: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.tree.push(Ball::new(id, position));
        id
    }

    /// Spawns `count` balls at uniform random positions kept a ball
    /// radius away from the walls.
    pub fn spawn_random<R: Rng>(&mut self, count: usize, rng: &mut R) {
        let walls = self.walls;
        self.tree.extend((0..count).map(|_| {
            let id = self.next_id;
            self.next_id += 1;
            Ball::new(id, walls.random_point_inside(RADIUS, rng))
        }));
        info!(count, total = self.tree.len(), "spawned balls");
    }

    /// Advances the world by `dt` seconds: move and rebound every ball,
    /// re-seat the ones that left their node, then detect and resolve
    /// collisions through quadtree queries.
    pub fn step(&mut self, dt: f32) -> StepStats {
        let mut stats = StepStats::default();

        for mut node in self.tree.nodes_mut() {
            for ball in node.objects_mut() {
                ball.advance(dt);
                rebound_off_walls(ball, &self.walls);
                stats.moved += 1;
            }
        }

        let strays = self.tree.take_strays();
        stats.strays = strays.len();
        for ball in strays {
            self.tree.push(ball);
        }

        let (comparisons, collisions) = self.resolve_collisions();
        stats.comparisons = comparisons;
        stats.collisions = collisions;

        self.comparisons_min = self.comparisons_min.min(stats.comparisons);
        self.comparisons_max = self.comparisons_max.max(stats.comparisons);
        debug!(
            moved = stats.moved,
            strays = stats.strays,
            comparisons = stats.comparisons,
            collisions = stats.collisions,
            "step"
        );
        stats
    }

    fn resolve_collisions(&mut self) -> (u64, usize) {
        let mut comparisons = 0u64;
        let mut pairs = Vec::new();
        for node in self.tree.nodes() {
            for ball in node.objects() {
                for other in self.tree.query(ball.aabb()) {
                    comparisons += 1;
                    // Visit each unordered pair once.
                    if other.id > ball.id && balls_collide(ball, other) {
                        pairs.push((ball.id, other.id));
                    }
                }
            }
        }

        if pairs.is_empty() {
            return (comparisons, 0);
        }

        let mut balls: FxHashMap<u32, Ball> = self
            .tree
            .nodes()
            .flat_map(|node| node.objects().iter().map(|ball| (ball.id, *ball)))
            .collect();
        for &(lhs_id, rhs_id) in &pairs {
            let mut lhs = balls[&lhs_id];
            let mut rhs = balls[&rhs_id];
            resolve(&mut lhs, &mut rhs);
            balls.insert(lhs_id, lhs);
            balls.insert(rhs_id, rhs);
        }

        // Write resolved state back in place; the next step's stray pass
        // re-seats any ball whose box left its node.
        for mut node in self.tree.nodes_mut() {
            for ball in node.objects_mut() {
                *ball = balls[&ball.id];
            }
        }
        (comparisons, pairs.len())
    }

    /// Balls whose boxes overlap `viewport`, exact. Node-level query hits
    /// are re-tested against the viewport.
    pub fn visible(&self, viewport: Rect) -> impl Iterator<Item = Ball> + '_ {
        self.tree
            .query(viewport)
            .filter(move |ball| ball.aabb().intersects(&viewport))
            .copied()
    }

    pub fn balls(&self) -> impl Iterator<Item = &Ball> + '_ {
        self.tree.nodes().flat_map(|node| node.objects().iter())
    }
}
