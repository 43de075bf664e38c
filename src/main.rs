//! Headless brickfall run
//!
//! Drives the simulation at its configured tick rate with a scripted paddle
//! that chases the ball, then prints a JSON summary of the run. Useful for
//! exercising the engine end to end without a rendering host and for
//! reproducing a session from a seed.
//!
//! Usage: `brickfall [seed]`

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use serde::Serialize;

use brickfall::{GameConfig, GamePhase, SessionController, TickInput};

/// Hard stop for a run that never resolves (a perfect paddle can rally for
/// a very long time).
const MAX_TICKS: u64 = 200_000;

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    phase: GamePhase,
    message: Option<&'static str>,
    lives_remaining: u32,
    bricks_remaining: usize,
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });

    let config = GameConfig::default();
    let dt = 1.0 / config.tick_rate as f32;
    let mut controller = SessionController::new(config, seed);

    // The pointer stays pressed for the whole run. The drag anchor is
    // captured at x = 0 with the paddle at x = 0, so from then on the
    // pointer x maps one-to-one onto the paddle x.
    let mut pointer_x = 0.0;
    let mut ticks = 0u64;

    while controller.phase != GamePhase::Complete && ticks < MAX_TICKS {
        let scene = controller.scene();
        if let (Some(ball), Some(paddle)) = (scene.ball, scene.paddle) {
            // Chase the ball: center the paddle under it.
            pointer_x = ball.center().x - paddle.size.x / 2.0;
        }

        let input = TickInput {
            pointer: Some(Vec2::new(pointer_x, 40.0)),
        };
        controller.tick(&input, dt);
        ticks += 1;
    }

    let summary = RunSummary {
        seed,
        ticks,
        phase: controller.phase,
        message: controller.message.map(|m| m.text()),
        lives_remaining: controller.lives,
        bricks_remaining: controller
            .session
            .as_ref()
            .map(|s| s.field.len())
            .unwrap_or(0),
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize run summary: {err}"),
    }
}
