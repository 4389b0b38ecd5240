//! Collision detection between circles
//!
//! Brute-force pairwise checks: every live ball tests every other live ball
//! each frame. Contacts only recolor balls; nothing bounces off anything but
//! the walls.

use glam::DVec2;
use rand::Rng;

use super::ball::Ball;
use crate::rng::random_color;

/// True when two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: DVec2, a_radius: f64, b: DVec2, b_radius: f64) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Recolor the ball at `index` and every live ball it overlaps
///
/// Each contact draws one new color and gives it to both balls. Returns the
/// number of contacts found. A dead ball at `index` does nothing.
pub fn collide_with_population(balls: &mut [Ball], index: usize, rng: &mut impl Rng) -> usize {
    if !balls[index].exists {
        return 0;
    }

    let mut contacts = 0;
    for other in 0..balls.len() {
        if other == index || !balls[other].exists {
            continue;
        }
        let (a, b) = (&balls[index], &balls[other]);
        if circles_overlap(a.pos(), a.size, b.pos(), b.size) {
            let color = random_color(rng);
            balls[index].color = color;
            balls[other].color = color;
            contacts += 1;
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::rng::seeded;

    fn ball_at(x: f64, y: f64, size: f64, color: Color) -> Ball {
        Ball::new(DVec2::new(x, y), DVec2::ZERO, color, size)
    }

    #[test]
    fn test_overlap_is_strict() {
        assert!(circles_overlap(DVec2::ZERO, 10.0, DVec2::new(19.9, 0.0), 10.0));
        assert!(!circles_overlap(DVec2::ZERO, 10.0, DVec2::new(20.0, 0.0), 10.0));
        assert!(!circles_overlap(DVec2::ZERO, 10.0, DVec2::new(30.0, 40.0), 10.0));
    }

    #[test]
    fn test_overlapping_balls_share_new_color() {
        let mut rng = seeded(7);
        let mut balls = vec![
            ball_at(100.0, 100.0, 10.0, Color::rgb(1, 1, 1)),
            ball_at(115.0, 100.0, 10.0, Color::rgb(2, 2, 2)),
        ];
        let contacts = collide_with_population(&mut balls, 1, &mut rng);
        assert_eq!(contacts, 1);
        assert_eq!(balls[0].color, balls[1].color);
        assert!(balls.iter().all(|b| b.exists));
    }

    #[test]
    fn test_shared_color_is_a_single_draw() {
        let mut rng = seeded(99);
        let expected = random_color(&mut seeded(99));
        let mut balls = vec![
            ball_at(100.0, 100.0, 10.0, Color::rgb(1, 1, 1)),
            ball_at(105.0, 100.0, 10.0, Color::rgb(2, 2, 2)),
        ];
        collide_with_population(&mut balls, 0, &mut rng);
        assert_eq!(balls[0].color, expected);
        assert_eq!(balls[1].color, expected);
    }

    #[test]
    fn test_distant_balls_keep_colors() {
        let mut rng = seeded(7);
        let mut balls = vec![
            ball_at(100.0, 100.0, 10.0, Color::rgb(1, 1, 1)),
            ball_at(120.0, 100.0, 10.0, Color::rgb(2, 2, 2)),
        ];
        assert_eq!(collide_with_population(&mut balls, 0, &mut rng), 0);
        assert_eq!(balls[0].color, Color::rgb(1, 1, 1));
        assert_eq!(balls[1].color, Color::rgb(2, 2, 2));
    }

    #[test]
    fn test_dead_balls_are_skipped() {
        let mut rng = seeded(7);
        let mut balls = vec![
            ball_at(100.0, 100.0, 10.0, Color::rgb(1, 1, 1)),
            ball_at(101.0, 100.0, 10.0, Color::rgb(2, 2, 2)),
        ];
        balls[1].exists = false;
        let before = balls.clone();

        // Neither as target...
        assert_eq!(collide_with_population(&mut balls, 0, &mut rng), 0);
        // ...nor as initiator
        assert_eq!(collide_with_population(&mut balls, 1, &mut rng), 0);
        assert_eq!(balls, before);
    }

    #[test]
    fn test_ball_ignores_itself() {
        let mut rng = seeded(7);
        let mut balls = vec![ball_at(100.0, 100.0, 10.0, Color::rgb(1, 1, 1))];
        assert_eq!(collide_with_population(&mut balls, 0, &mut rng), 0);
        assert_eq!(balls[0].color, Color::rgb(1, 1, 1));
    }
}
