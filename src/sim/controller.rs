//! Top-level session state machine
//!
//! The controller owns one [`GameSession`] across its lifetime plus the
//! meta-state around it: the press-to-play screen, the pre-serve countdown,
//! the between-lives pause, and the terminal win/lose screen. Each host tick
//! it runs exactly one state's handler -- transitions never re-enter another
//! handler within the same tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

use super::field::Brick;
use super::session::GameSession;
use super::shape::{Ellipse, Rect};

/// Macro-state of the session controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Welcome screen; no session exists yet
    Inactive,
    /// Session exists, paddle is live, ball not yet served
    Countdown,
    /// Ball in play
    Active,
    /// Ball lost with lives remaining; waiting for a press to resume
    Paused,
    /// Terminal win/lose screen
    Complete,
}

/// The one UI message visible in the current phase, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    PressToPlay,
    TryAgain,
    Win,
    Lose,
}

impl Message {
    pub fn text(&self) -> &'static str {
        match self {
            Message::PressToPlay => "Press to Play",
            Message::TryAgain => "Click! Try again",
            Message::Win => "You Win",
            Message::Lose => "You Lost",
        }
    }
}

/// Input sampled by the host for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer/touch position in arena coordinates, or `None` while not
    /// pressed. Arena origin is bottom-left.
    pub pointer: Option<Vec2>,
}

/// Immutable per-tick snapshot for the rendering layer
///
/// Everything a renderer needs: plain rectangles and ellipses with colors,
/// plus the phase and its message. The snapshot owns its data, so the host
/// may keep it around after the next tick mutates the simulation.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub phase: GamePhase,
    /// Paddle rectangle; `None` only on the welcome screen
    pub paddle: Option<Rect>,
    /// Ball ellipse while one is in play
    pub ball: Option<Ellipse>,
    /// Live bricks in draw order
    pub bricks: Vec<Brick>,
    pub message: Option<Message>,
}

/// Drives a [`GameSession`] through the five-phase lifecycle
#[derive(Debug, Clone)]
pub struct SessionController {
    config: GameConfig,
    rng: Pcg32,
    pub phase: GamePhase,
    /// `None` exactly while `phase` is [`GamePhase::Inactive`]
    pub session: Option<GameSession>,
    /// Serves remaining; decremented on every serve, including the first
    pub lives: u32,
    /// Frames spent in the current countdown
    countdown_frames: u32,
    pub message: Option<Message>,
    /// Previous tick's pointer sample, for press-edge detection on the
    /// welcome screen
    last_sample: Option<Vec2>,
    /// Previous pointer sample seen by paddle tracking; advanced only while
    /// the paddle is live (countdown and active), so the session-starting
    /// press still reads as a drag start on the first countdown tick
    paddle_sample: Option<Vec2>,
}

impl SessionController {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        config.validate();
        log::info!("controller ready (seed {seed})");

        Self {
            lives: config.lives,
            config,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Inactive,
            session: None,
            countdown_frames: 0,
            message: Some(Message::PressToPlay),
            last_sample: None,
            paddle_sample: None,
        }
    }

    /// Advance one simulation tick
    ///
    /// `dt` is the host's reported delta in seconds. It is advisory only --
    /// physics advances one fixed step per call -- but a huge delta means
    /// the host loop is falling behind, which is worth a warning.
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        if dt > 0.5 {
            log::warn!("tick delta {dt:.3}s; host loop is falling behind");
        }

        match self.phase {
            GamePhase::Inactive => self.tick_inactive(input.pointer),
            GamePhase::Countdown => self.tick_countdown(input.pointer),
            GamePhase::Active => self.tick_active(input.pointer),
            GamePhase::Paused => self.tick_paused(input.pointer),
            GamePhase::Complete => {}
        }

        self.last_sample = input.pointer;
    }

    /// Welcome screen: a fresh press starts a new session
    fn tick_inactive(&mut self, pointer: Option<Vec2>) {
        if self.last_sample.is_none() && pointer.is_some() {
            log::info!("new session: {} lives", self.config.lives);
            self.session = Some(GameSession::new(self.config.clone()));
            self.lives = self.config.lives;
            self.paddle_sample = None;
            self.message = None;
            self.enter_countdown();
        }
    }

    /// Paddle is live; serve once the countdown elapses
    fn tick_countdown(&mut self, pointer: Option<Vec2>) {
        let session = self.session.as_mut().expect("no session outside inactive");
        session.update_paddle(self.paddle_sample, pointer);
        self.paddle_sample = pointer;

        self.countdown_frames += 1;
        if self.countdown_frames >= self.config.countdown_ticks() {
            session.serve_ball(&mut self.rng);
            self.lives -= 1;
            self.phase = GamePhase::Active;
            log::info!("serve: {} lives remaining", self.lives);
        }
    }

    /// Normal play: track the paddle, move the ball, interpret the outcome
    fn tick_active(&mut self, pointer: Option<Vec2>) {
        let session = self.session.as_mut().expect("no session outside inactive");
        session.update_paddle(self.paddle_sample, pointer);
        self.paddle_sample = pointer;

        let lost = session.advance_ball();

        if lost {
            session.ball = None;
            if self.lives == 0 {
                log::info!("ball lost on the last life");
                self.message = Some(Message::Lose);
                self.phase = GamePhase::Complete;
            } else {
                log::info!("ball lost, {} lives remaining", self.lives);
                self.message = Some(Message::TryAgain);
                self.phase = GamePhase::Paused;
            }
        }

        // A cleared field wins even on the tick the ball was lost.
        if session.field_cleared() {
            log::info!("field cleared");
            self.message = Some(Message::Win);
            self.phase = GamePhase::Complete;
        }
    }

    /// Between lives: any press resumes the countdown
    fn tick_paused(&mut self, pointer: Option<Vec2>) {
        if pointer.is_some() {
            self.message = None;
            self.enter_countdown();
        }
    }

    fn enter_countdown(&mut self) {
        self.countdown_frames = 0;
        self.phase = GamePhase::Countdown;
    }

    /// Snapshot the drawable state for the rendering layer
    pub fn scene(&self) -> Scene {
        Scene {
            phase: self.phase,
            paddle: self.session.as_ref().map(|s| s.paddle),
            ball: self
                .session
                .as_ref()
                .and_then(|s| s.ball.as_ref().map(|b| b.shape)),
            bricks: self
                .session
                .as_ref()
                .map(|s| s.field.bricks().to_vec())
                .unwrap_or_default(),
            message: self.message,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
