//! Bouncing balls

use glam::DVec2;

use super::shape::{Bounds, Shape};
use crate::color::Color;
use crate::renderer::Surface;

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub shape: Shape,
    pub color: Color,
    /// Radius, fixed at creation
    pub size: f64,
    /// Cleared once when the evil circle eats the ball; never set again
    pub exists: bool,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2, color: Color, size: f64) -> Self {
        Self {
            shape: Shape::new(pos, vel),
            color,
            size,
            exists: true,
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.shape.pos
    }

    #[inline]
    pub fn vel(&self) -> DVec2 {
        self.shape.vel
    }

    /// Paint as a filled circle
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.exists {
            return;
        }
        surface.fill_circle(self.shape.pos, self.size, self.color);
    }

    /// Advance one frame, bouncing off the canvas edges
    ///
    /// If this step would carry the leading edge past a wall, the matching
    /// velocity component is forced to point inward first. A ball already
    /// heading inward keeps its velocity.
    pub fn update(&mut self, bounds: Bounds) {
        if !self.exists {
            return;
        }
        let Shape { pos, vel } = &mut self.shape;
        let size = self.size;

        if pos.x + vel.x + size > bounds.width {
            vel.x = -vel.x.abs();
        }
        if pos.x + vel.x - size < 0.0 {
            vel.x = vel.x.abs();
        }
        if pos.y + vel.y + size > bounds.height {
            vel.y = -vel.y.abs();
        }
        if pos.y + vel.y - size < 0.0 {
            vel.y = vel.y.abs();
        }

        *pos += *vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Recorder;
    use proptest::prelude::*;

    fn ball(x: f64, y: f64, vx: f64, vy: f64, size: f64) -> Ball {
        Ball::new(DVec2::new(x, y), DVec2::new(vx, vy), Color::rgb(1, 2, 3), size)
    }

    #[test]
    fn test_update_moves_by_velocity() {
        let mut b = ball(100.0, 100.0, -7.0, -7.0, 10.0);
        b.update(Bounds::new(800.0, 600.0));
        assert_eq!(b.pos(), DVec2::new(93.0, 93.0));
        assert_eq!(b.vel(), DVec2::new(-7.0, -7.0));
    }

    #[test]
    fn test_bounce_off_right_and_bottom() {
        let bounds = Bounds::new(200.0, 100.0);
        let mut b = ball(185.0, 85.0, 7.0, 7.0, 10.0);
        b.update(bounds);
        assert_eq!(b.vel(), DVec2::new(-7.0, -7.0));
        assert_eq!(b.pos(), DVec2::new(178.0, 78.0));
    }

    #[test]
    fn test_bounce_off_left_and_top() {
        let bounds = Bounds::new(200.0, 100.0);
        let mut b = ball(12.0, 11.0, -5.0, -3.0, 10.0);
        b.update(bounds);
        assert_eq!(b.vel(), DVec2::new(5.0, 3.0));
        assert_eq!(b.pos(), DVec2::new(17.0, 14.0));
    }

    #[test]
    fn test_inward_velocity_at_wall_is_kept() {
        // Touching the right wall but already heading left
        let mut b = ball(190.0, 50.0, -4.0, 0.0, 10.0);
        b.update(Bounds::new(200.0, 100.0));
        assert_eq!(b.vel(), DVec2::new(-4.0, 0.0));
        assert_eq!(b.pos(), DVec2::new(186.0, 50.0));
    }

    #[test]
    fn test_dead_ball_is_inert() {
        let mut b = ball(50.0, 50.0, 3.0, 3.0, 10.0);
        b.exists = false;
        let before = b.clone();

        let mut rec = Recorder::new();
        b.draw(&mut rec);
        b.update(Bounds::new(200.0, 200.0));

        assert_eq!(b, before);
        assert!(rec.commands.is_empty());
    }

    #[test]
    fn test_draw_fills_circle() {
        let b = ball(50.0, 40.0, 0.0, 0.0, 12.0);
        let mut rec = Recorder::new();
        b.draw(&mut rec);
        assert_eq!(
            rec.commands,
            vec![crate::renderer::DrawCommand::FilledCircle {
                center: DVec2::new(50.0, 40.0),
                radius: 12.0,
                color: Color::rgb(1, 2, 3),
            }]
        );
    }

    proptest! {
        #[test]
        fn ball_stays_inside_bounds(
            width in 60i32..1200,
            height in 60i32..1200,
            size in 10i32..=20,
            vx in -7i32..=7,
            vy in -7i32..=7,
            fx in 0.0f64..=1.0,
            fy in 0.0f64..=1.0,
            steps in 1usize..400,
        ) {
            let size = f64::from(size);
            let bounds = Bounds::new(f64::from(width), f64::from(height));
            let x = (size + fx * (bounds.width - 2.0 * size)).floor();
            let y = (size + fy * (bounds.height - 2.0 * size)).floor();
            let mut b = ball(x, y, f64::from(vx), f64::from(vy), size);

            for _ in 0..steps {
                b.update(bounds);
                prop_assert!(b.pos().x >= size && b.pos().x <= bounds.width - size);
                prop_assert!(b.pos().y >= size && b.pos().y <= bounds.height - size);
            }
        }
    }
}
