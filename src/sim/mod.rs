//! Simulation module
//!
//! Everything that happens in a frame lives here:
//! - Entities (`Ball`, `EvilCircle`) built on a shared `Shape`
//! - Pairwise collision checks
//! - Scene bootstrap and the per-frame `tick`
//! - The run loop that repeats ticks until stopped
//!
//! Randomness only comes from the scene's seeded RNG; drawing only goes
//! through the `Surface` trait.

pub mod ball;
pub mod collision;
pub mod evil;
pub mod input;
pub mod scene;
pub mod shape;
pub mod tick;

pub use ball::Ball;
pub use collision::{circles_overlap, collide_with_population};
pub use evil::EvilCircle;
pub use input::KeyState;
pub use scene::{BallCounter, Scene};
pub use shape::{Bounds, Shape};
pub use tick::{FrameReport, StopFlag, run, tick};
