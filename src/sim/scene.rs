//! Scene state and bootstrap
//!
//! A scene owns everything a frame touches: the ball population, the evil
//! circle, the live-ball counter and the seeded RNG.

use glam::DVec2;

use super::ball::Ball;
use super::evil::EvilCircle;
use super::shape::Bounds;
use crate::ball_count_text;
use crate::config::SceneConfig;
use crate::platform::{KeyboardInput, TextDisplay};
use crate::rng::{SimRng, random_color, random_int, seeded};

/// Number of balls still alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BallCounter {
    count: usize,
}

impl BallCounter {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Record one eaten ball
    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    /// Text for the counter display
    pub fn text(&self) -> String {
        ball_count_text(self.count)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Scene {
    /// Seed the scene was built from
    pub seed: u64,
    pub config: SceneConfig,
    pub bounds: Bounds,
    /// Fixed population in creation order; eaten balls stay with `exists = false`
    pub balls: Vec<Ball>,
    pub evil: EvilCircle,
    pub counter: BallCounter,
    /// Frames simulated so far
    pub frame: u64,
    pub(crate) rng: SimRng,
}

impl Scene {
    /// Build the initial population and center the evil circle
    pub fn new(config: SceneConfig, bounds: Bounds, seed: u64) -> Self {
        let mut rng = seeded(seed);
        let balls: Vec<Ball> = (0..config.ball_count)
            .map(|_| spawn_ball(&mut rng, &config, bounds))
            .collect();
        let counter = BallCounter::new(balls.len());
        let evil = EvilCircle::new(
            bounds.center(),
            config.evil_size,
            config.evil_step,
            config.evil_line_width,
        );

        Self {
            seed,
            config,
            bounds,
            balls,
            evil,
            counter,
            frame: 0,
            rng,
        }
    }

    /// Build a scene, hook the evil circle up to the keyboard and show the
    /// starting count
    pub fn bootstrap(
        config: SceneConfig,
        bounds: Bounds,
        seed: u64,
        keyboard: &mut dyn KeyboardInput,
        display: Option<&mut dyn TextDisplay>,
    ) -> Self {
        let scene = Self::new(config, bounds, seed);
        keyboard.subscribe(scene.evil.keys().clone());
        if let Some(display) = display {
            display.set_text(&scene.counter.text());
        }
        log::info!(
            "Scene ready: {} balls on {}x{} (seed {})",
            scene.balls.len(),
            bounds.width,
            bounds.height,
            seed
        );
        scene
    }

    /// Balls whose `exists` flag is still set
    pub fn alive_count(&self) -> usize {
        self.balls.iter().filter(|b| b.exists).count()
    }

    /// True once the evil circle has eaten every ball
    pub fn is_cleared(&self) -> bool {
        self.counter.count() == 0
    }

    /// Nearest live ball to `pos`, if any
    pub fn nearest_alive(&self, pos: DVec2) -> Option<&Ball> {
        self.balls
            .iter()
            .filter(|b| b.exists)
            .min_by(|a, b| {
                a.pos()
                    .distance_squared(pos)
                    .partial_cmp(&b.pos().distance_squared(pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// A ball fully on screen with random size, velocity and color
///
/// On an arena narrower than the ball the position pins to the inset
/// instead of sampling an empty range.
fn spawn_ball(rng: &mut SimRng, config: &SceneConfig, bounds: Bounds) -> Ball {
    let size = random_int(rng, config.min_ball_size, config.max_ball_size);
    let x = random_int(rng, size, (bounds.width as i32 - size).max(size));
    let y = random_int(rng, size, (bounds.height as i32 - size).max(size));
    let vel_x = random_int(rng, -config.max_speed, config.max_speed);
    let vel_y = random_int(rng, -config.max_speed, config.max_speed);
    let color = random_color(rng);

    Ball::new(
        DVec2::new(f64::from(x), f64::from(y)),
        DVec2::new(f64::from(vel_x), f64::from(vel_y)),
        color,
        f64::from(size),
    )
}
