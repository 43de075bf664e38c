//! A single game of brickfall
//!
//! `GameSession` owns the paddle, the brick field, and the ball while one is
//! in play. It advances exactly one frame of simulation per call and reports
//! the two terminal conditions (ball lost, field cleared) back to the
//! controller; it never decides macro-state itself.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

use super::ball::Ball;
use super::field::BrickField;
use super::shape::Rect;

/// What the ball's corner scan hit this tick
///
/// At most one contact is resolved per tick. The paddle outranks every
/// brick; bricks are identified by their index in the field's layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Paddle,
    Brick(usize),
}

/// One game: paddle + brick field + at most one ball in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    pub field: BrickField,
    pub paddle: Rect,
    /// The ball in play; `None` exactly while waiting for a serve
    pub ball: Option<Ball>,
    /// Pointer x captured when the current drag started
    anchor_touch_x: f32,
    /// Paddle x captured when the current drag started
    anchor_paddle_x: f32,
}

impl GameSession {
    /// Build a fresh session: full brick grid, paddle at the left edge,
    /// no ball in play
    pub fn new(config: GameConfig) -> Self {
        config.validate();
        let field = BrickField::new(&config);
        let paddle = Rect::new(
            Vec2::new(0.0, config.paddle_offset),
            Vec2::new(config.paddle_width, config.paddle_height),
        );

        Self {
            config,
            field,
            paddle,
            ball: None,
            anchor_touch_x: 0.0,
            anchor_paddle_x: 0.0,
        }
    }

    /// Track the pointer with the paddle
    ///
    /// When a drag starts (`last` absent, `current` present) the pointer and
    /// paddle positions are captured as anchors; afterward the paddle mirrors
    /// the pointer's displacement from those anchors rather than jumping to
    /// the absolute pointer position. The paddle is clamped to the arena
    /// after every call.
    pub fn update_paddle(&mut self, last: Option<Vec2>, current: Option<Vec2>) {
        if last.is_none()
            && let Some(touch) = current
        {
            self.anchor_touch_x = touch.x;
            self.anchor_paddle_x = self.paddle.pos.x;
        }

        if let Some(touch) = current {
            self.paddle.pos.x = self.anchor_paddle_x + (touch.x - self.anchor_touch_x);
        }

        self.paddle.pos.x = self
            .paddle
            .pos
            .x
            .clamp(0.0, self.config.arena_width - self.config.paddle_width);
    }

    /// Put a freshly constructed ball into play, replacing any previous one
    pub fn serve_ball(&mut self, rng: &mut Pcg32) {
        let ball = Ball::serve(&self.config, rng);
        log::debug!(
            "ball served at {:?} with velocity {:?}",
            ball.shape.center(),
            ball.vel
        );
        self.ball = Some(ball);
    }

    /// Advance the ball one tick and resolve collisions
    ///
    /// Order of operations: move the ball, resolve at most one paddle/brick
    /// contact, then always run the wall check. Returns true when the ball
    /// was lost off the bottom edge this tick.
    ///
    /// Panics if no ball is in play; the controller only calls this in the
    /// active state, so a missing ball is a coordination bug.
    pub fn advance_ball(&mut self) -> bool {
        let mut ball = self.ball.take().expect("advance_ball with no ball in play");
        ball.advance();

        match self.find_contact(&ball) {
            Some(Contact::Paddle) => ball.on_paddle_collision(),
            Some(Contact::Brick(index)) => {
                ball.on_brick_collision();
                let brick = self.field.remove(index);
                log::debug!(
                    "brick destroyed at {:?}, {} remaining",
                    brick.rect.pos,
                    self.field.len()
                );
            }
            None => {}
        }

        let lost = ball.on_wall_collision(&self.config);
        self.ball = Some(ball);
        lost
    }

    /// Scan the ball's corners for the first paddle or brick contact
    ///
    /// Corner-major, object-minor: for each corner in turn (left-bottom,
    /// left-top, right-bottom, right-top) the paddle is tested first, then
    /// the bricks in layout order. The first hit wins and everything else is
    /// ignored this tick.
    fn find_contact(&self, ball: &Ball) -> Option<Contact> {
        for corner in ball.corners() {
            if self.paddle.contains(corner) {
                return Some(Contact::Paddle);
            }

            for (index, brick) in self.field.bricks().iter().enumerate() {
                if brick.rect.contains(corner) {
                    return Some(Contact::Brick(index));
                }
            }
        }

        None
    }

    /// True once every brick has been destroyed
    pub fn field_cleared(&self) -> bool {
        self.field.is_empty()
    }
}
