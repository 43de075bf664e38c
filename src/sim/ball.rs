//! The ball and its collision responses
//!
//! A ball exists only between a serve and a loss; outside of that window the
//! session holds `None`. Motion is one Euler step per tick with no
//! substepping, so a very fast ball can tunnel through thin obstacles. That
//! is a known and accepted limitation at the configured speed range.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

use super::shape::Ellipse;

/// A moving ellipse with a 2D velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub shape: Ellipse,
    pub vel: Vec2,
}

impl Ball {
    /// Serve a fresh ball from the arena center
    ///
    /// The horizontal component gets a random magnitude in the configured
    /// speed range with a random sign; the vertical component gets a random
    /// magnitude in the same range and always points downward.
    pub fn serve(config: &GameConfig, rng: &mut Pcg32) -> Self {
        let size = Vec2::new(config.ball_width, config.ball_height);
        let center = Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0);

        let mut vx = rng.random_range(config.ball_min_speed..=config.ball_max_speed);
        if rng.random_bool(0.5) {
            vx = -vx;
        }
        let vy = -rng.random_range(config.ball_min_speed..=config.ball_max_speed);

        Self {
            shape: Ellipse::new(center - size / 2.0, size),
            vel: Vec2::new(vx, vy),
        }
    }

    /// One Euler step: position += velocity
    pub fn advance(&mut self) {
        self.shape.pos += self.vel;
    }

    /// The four bounding-box corners in collision-scan order:
    /// left-bottom, left-top, right-bottom, right-top
    pub fn corners(&self) -> [Vec2; 4] {
        let s = &self.shape;
        [
            Vec2::new(s.left(), s.bottom()),
            Vec2::new(s.left(), s.top()),
            Vec2::new(s.right(), s.bottom()),
            Vec2::new(s.right(), s.top()),
        ]
    }

    /// Brick hit: reverse the vertical velocity unconditionally
    ///
    /// The field acts as a single reflecting layer; which face of the brick
    /// was struck is deliberately not modeled.
    pub fn on_brick_collision(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Paddle hit: reverse the vertical velocity only while descending
    ///
    /// The guard keeps a ball already deflected upward this tick from being
    /// flipped back down.
    pub fn on_paddle_collision(&mut self) {
        if self.vel.y < 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Arena wall responses, checked in fixed priority order
    ///
    /// Left, right, and top edges reflect; the floor reports a lost ball,
    /// but only while the ball is descending -- a freshly served ball that
    /// overlaps the floor on its way up must not count as lost. First match
    /// wins; simultaneous wall contacts are not combined.
    ///
    /// Returns true when the ball is lost this tick.
    pub fn on_wall_collision(&mut self, config: &GameConfig) -> bool {
        if self.shape.left() < 0.0 {
            self.vel.x = -self.vel.x;
        } else if self.shape.right() > config.arena_width {
            self.vel.x = -self.vel.x;
        } else if self.shape.top() > config.arena_height {
            self.vel.y = -self.vel.y;
        } else if self.shape.bottom() < 0.0 && self.vel.y < 0.0 {
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            shape: Ellipse::new(pos, Vec2::new(10.0, 10.0)),
            vel,
        }
    }

    #[test]
    fn serve_is_centered_and_descending() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..50 {
            let ball = Ball::serve(&config, &mut rng);
            assert_eq!(
                ball.shape.center(),
                Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0)
            );
            assert!(ball.vel.x.abs() >= config.ball_min_speed);
            assert!(ball.vel.x.abs() <= config.ball_max_speed);
            assert!(ball.vel.y <= -config.ball_min_speed);
            assert!(ball.vel.y >= -config.ball_max_speed);
        }
    }

    #[test]
    fn serve_is_deterministic_for_a_seed() {
        let config = GameConfig::default();
        let a = Ball::serve(&config, &mut Pcg32::seed_from_u64(42));
        let b = Ball::serve(&config, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn advance_applies_velocity_once() {
        let mut ball = ball_at(Vec2::new(100.0, 100.0), Vec2::new(3.0, -2.0));
        ball.advance();
        assert_eq!(ball.shape.pos, Vec2::new(103.0, 98.0));
    }

    #[test]
    fn brick_collision_always_flips_vy() {
        let mut ball = ball_at(Vec2::new(0.0, 0.0), Vec2::new(1.0, -3.0));
        ball.on_brick_collision();
        assert_eq!(ball.vel, Vec2::new(1.0, 3.0));
        ball.on_brick_collision();
        assert_eq!(ball.vel, Vec2::new(1.0, -3.0));
    }

    #[test]
    fn paddle_collision_only_flips_descending_ball() {
        let mut ball = ball_at(Vec2::new(0.0, 0.0), Vec2::new(1.0, -3.0));
        ball.on_paddle_collision();
        assert_eq!(ball.vel.y, 3.0);
        // Already ascending: must not flip back down.
        ball.on_paddle_collision();
        assert_eq!(ball.vel.y, 3.0);
    }

    #[test]
    fn side_walls_reflect_vx() {
        let config = GameConfig::default();

        let mut ball = ball_at(Vec2::new(-1.0, 300.0), Vec2::new(-2.0, 1.0));
        assert!(!ball.on_wall_collision(&config));
        assert_eq!(ball.vel.x, 2.0);

        let mut ball = ball_at(Vec2::new(config.arena_width - 5.0, 300.0), Vec2::new(2.0, 1.0));
        assert!(!ball.on_wall_collision(&config));
        assert_eq!(ball.vel.x, -2.0);
    }

    #[test]
    fn top_wall_reflects_vy() {
        let config = GameConfig::default();
        let mut ball = ball_at(Vec2::new(200.0, config.arena_height - 5.0), Vec2::new(1.0, 4.0));
        assert!(!ball.on_wall_collision(&config));
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn left_wall_wins_over_top_wall() {
        // Ball past both the left edge and the ceiling: only the left
        // response fires because it is checked first.
        let config = GameConfig::default();
        let mut ball = ball_at(Vec2::new(-2.0, config.arena_height - 2.0), Vec2::new(-1.0, 2.0));
        assert!(!ball.on_wall_collision(&config));
        assert_eq!(ball.vel, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn floor_reports_loss_only_while_descending() {
        let config = GameConfig::default();

        let mut descending = ball_at(Vec2::new(200.0, -11.0), Vec2::new(1.0, -2.0));
        assert!(descending.on_wall_collision(&config));

        // Same position but ascending: not a loss, and no reflection either.
        let mut ascending = ball_at(Vec2::new(200.0, -11.0), Vec2::new(1.0, 2.0));
        assert!(!ascending.on_wall_collision(&config));
        assert_eq!(ascending.vel, Vec2::new(1.0, 2.0));
    }
}
