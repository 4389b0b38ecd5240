//! The player-controlled evil circle

use glam::DVec2;

use super::ball::Ball;
use super::collision::circles_overlap;
use super::input::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP, KeyState};
use super::scene::BallCounter;
use super::shape::{Bounds, Shape};
use crate::color::Color;
use crate::platform::TextDisplay;
use crate::renderer::Surface;

/// A hollow white circle steered with WASD that eats balls on contact
#[derive(Debug, Clone)]
pub struct EvilCircle {
    /// `vel` is the per-frame step applied while a key is held
    pub shape: Shape,
    color: Color,
    size: f64,
    line_width: f64,
    keys: KeyState,
}

impl EvilCircle {
    pub fn new(pos: DVec2, size: f64, step: f64, line_width: f64) -> Self {
        Self {
            shape: Shape::new(pos, DVec2::splat(step)),
            color: Color::White,
            size,
            line_width,
            keys: KeyState::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.shape.pos
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Key state read by `move_by_keys`; clone it to feed it from listeners
    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Step once in every held direction (diagonals compose)
    pub fn move_by_keys(&mut self) {
        let step = self.shape.vel;
        let pos = &mut self.shape.pos;
        if self.keys.is_pressed(KEY_LEFT) {
            pos.x -= step.x;
        }
        if self.keys.is_pressed(KEY_RIGHT) {
            pos.x += step.x;
        }
        if self.keys.is_pressed(KEY_UP) {
            pos.y -= step.y;
        }
        if self.keys.is_pressed(KEY_DOWN) {
            pos.y += step.y;
        }
    }

    /// Pull the circle back by one radius from every edge it crosses
    pub fn check_bounds(&mut self, bounds: Bounds) {
        let size = self.size;
        let pos = &mut self.shape.pos;
        if pos.x + size > bounds.width {
            pos.x -= size;
        }
        if pos.x - size < 0.0 {
            pos.x += size;
        }
        if pos.y + size > bounds.height {
            pos.y -= size;
        }
        if pos.y - size < 0.0 {
            pos.y += size;
        }
    }

    /// Paint as an outlined circle
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.stroke_circle(self.shape.pos, self.size, self.color, self.line_width);
    }

    /// Eat every live ball within reach
    ///
    /// Each eaten ball is marked dead, the counter drops by one and the
    /// display (if any) shows the new count. Returns how many were eaten.
    pub fn collision_detect(
        &self,
        balls: &mut [Ball],
        counter: &mut BallCounter,
        mut display: Option<&mut (dyn TextDisplay + '_)>,
    ) -> usize {
        let mut eaten = 0;
        for (index, ball) in balls.iter_mut().enumerate() {
            if !ball.exists {
                continue;
            }
            if circles_overlap(self.shape.pos, self.size, ball.pos(), ball.size) {
                ball.exists = false;
                counter.decrement();
                eaten += 1;
                log::debug!("Ball {} eaten, {} left", index, counter.count());
                if let Some(display) = display.as_deref_mut() {
                    display.set_text(&counter.text());
                }
            }
        }
        eaten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 800.0;
    const H: f64 = 600.0;

    fn evil_at(x: f64, y: f64) -> EvilCircle {
        EvilCircle::new(DVec2::new(x, y), 10.0, 5.0, 3.0)
    }

    fn ball_at(x: f64, y: f64) -> Ball {
        Ball::new(DVec2::new(x, y), DVec2::new(1.0, 1.0), Color::rgb(9, 9, 9), 10.0)
    }

    #[test]
    fn test_construction_defaults() {
        let evil = evil_at(400.0, 300.0);
        assert_eq!(evil.color(), Color::White);
        assert_eq!(evil.size(), 10.0);
        assert_eq!(evil.shape.vel, DVec2::new(5.0, 5.0));
    }

    #[test]
    fn test_move_without_keys_stays_put() {
        let mut evil = evil_at(400.0, 300.0);
        evil.move_by_keys();
        assert_eq!(evil.pos(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_move_diagonal() {
        let mut evil = evil_at(400.0, 300.0);
        evil.keys().key_down("d");
        evil.keys().key_down("W");
        evil.move_by_keys();
        assert_eq!(evil.pos(), DVec2::new(405.0, 295.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut evil = evil_at(400.0, 300.0);
        evil.keys().key_down("a");
        evil.keys().key_down("d");
        evil.move_by_keys();
        assert_eq!(evil.pos(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_check_bounds_right_edge_is_idempotent() {
        let mut evil = evil_at(W, 300.0);
        evil.check_bounds(Bounds::new(W, H));
        assert_eq!(evil.pos(), DVec2::new(W - 10.0, 300.0));
        evil.check_bounds(Bounds::new(W, H));
        assert_eq!(evil.pos(), DVec2::new(W - 10.0, 300.0));
    }

    #[test]
    fn test_check_bounds_corner_applies_both() {
        let mut evil = evil_at(3.0, 4.0);
        evil.check_bounds(Bounds::new(W, H));
        assert_eq!(evil.pos(), DVec2::new(13.0, 14.0));
    }

    #[test]
    fn test_draw_strokes_white_circle() {
        let evil = evil_at(50.0, 60.0);
        let mut rec = crate::renderer::Recorder::new();
        evil.draw(&mut rec);
        assert_eq!(
            rec.commands,
            vec![crate::renderer::DrawCommand::StrokedCircle {
                center: DVec2::new(50.0, 60.0),
                radius: 10.0,
                color: Color::White,
                line_width: 3.0,
            }]
        );
    }

    #[test]
    fn test_eat_once() {
        let evil = evil_at(100.0, 100.0);
        let mut balls = vec![ball_at(110.0, 100.0), ball_at(300.0, 300.0)];
        let mut counter = BallCounter::new(2);
        let mut display = String::new();

        let eaten = evil.collision_detect(&mut balls, &mut counter, Some(&mut display));
        assert_eq!(eaten, 1);
        assert!(!balls[0].exists);
        assert!(balls[1].exists);
        assert_eq!(counter.count(), 1);
        assert_eq!(display, "Ball count: 1");

        let eaten = evil.collision_detect(&mut balls, &mut counter, Some(&mut display));
        assert_eq!(eaten, 0);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_eat_several_without_display() {
        let evil = evil_at(100.0, 100.0);
        let mut balls = vec![ball_at(95.0, 100.0), ball_at(105.0, 105.0), ball_at(100.0, 100.0)];
        let mut counter = BallCounter::new(3);
        let eaten = evil.collision_detect(&mut balls, &mut counter, None);
        assert_eq!(eaten, 3);
        assert_eq!(counter.count(), 0);
        assert!(balls.iter().all(|b| !b.exists));
    }
}
