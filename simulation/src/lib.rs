pub mod ball;
pub mod sim;

pub use ball::{balls_collide, rebound_off_walls, resolve, Ball, RADIUS, SPEED};
pub use sim::{Simulation, StepStats};
