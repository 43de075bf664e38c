//! Data-driven game constants
//!
//! One immutable [`GameConfig`] value is built at session start and passed
//! into the constructors that need it. There are no module-level mutable
//! globals, so tests can instantiate differently-tuned sessions in parallel.

use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
}

/// Game tuning parameters
///
/// All lengths are in arena units with the origin at the bottom-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Arena width
    pub arena_width: f32,
    /// Arena height
    pub arena_height: f32,

    /// Paddle width
    pub paddle_width: f32,
    /// Paddle height
    pub paddle_height: f32,
    /// Distance from the arena floor to the paddle's bottom edge
    pub paddle_offset: f32,

    /// Number of brick rows
    pub brick_rows: usize,
    /// Number of bricks in each row
    pub bricks_in_row: usize,
    /// Brick width
    pub brick_width: f32,
    /// Brick height
    pub brick_height: f32,
    /// Horizontal gap between bricks (half a gap pads each arena edge)
    pub brick_sep_h: f32,
    /// Vertical gap between brick rows
    pub brick_sep_v: f32,
    /// Distance from the arena ceiling to the top row
    pub brick_y_offset: f32,
    /// Fill color per row, cycled when there are more rows than colors
    pub row_colors: Vec<Color>,

    /// Ball bounding-box width
    pub ball_width: f32,
    /// Ball bounding-box height
    pub ball_height: f32,
    /// Minimum magnitude of each serve velocity component
    pub ball_min_speed: f32,
    /// Maximum magnitude of each serve velocity component
    pub ball_max_speed: f32,

    /// Seconds of countdown before each serve
    pub countdown_seconds: u32,
    /// Simulation ticks per second (the host clock's target rate)
    pub tick_rate: u32,
    /// Serves the player gets before the session ends
    pub lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 480.0,
            arena_height: 620.0,

            paddle_width: 58.0,
            paddle_height: 11.0,
            paddle_offset: 30.0,

            brick_rows: 10,
            bricks_in_row: 10,
            brick_width: 43.0,
            brick_height: 8.0,
            brick_sep_h: 5.0,
            brick_sep_v: 4.0,
            brick_y_offset: 70.0,
            row_colors: vec![
                Color::RED,
                Color::RED,
                Color::ORANGE,
                Color::ORANGE,
                Color::YELLOW,
                Color::YELLOW,
                Color::GREEN,
                Color::GREEN,
                Color::CYAN,
                Color::CYAN,
            ],

            ball_width: 10.0,
            ball_height: 10.0,
            ball_min_speed: 1.0,
            ball_max_speed: 5.0,

            countdown_seconds: 3,
            tick_rate: 60,
            lives: 3,
        }
    }
}

impl GameConfig {
    /// Countdown length in ticks
    pub fn countdown_ticks(&self) -> u32 {
        self.countdown_seconds * self.tick_rate
    }

    /// Panic if the configuration cannot describe a playable arena.
    ///
    /// Violations are construction bugs, not runtime conditions, so this
    /// asserts rather than returning an error.
    pub fn validate(&self) {
        assert!(
            self.arena_width > 0.0 && self.arena_height > 0.0,
            "arena must have positive dimensions"
        );
        assert!(
            self.paddle_width <= self.arena_width,
            "paddle wider than arena"
        );
        assert!(!self.row_colors.is_empty(), "row_colors must be non-empty");
        assert!(
            self.ball_min_speed > 0.0 && self.ball_min_speed <= self.ball_max_speed,
            "ball speed range is empty"
        );
        assert!(self.tick_rate > 0, "tick_rate must be positive");
        assert!(self.lives > 0, "lives must be positive");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GameConfig::default().validate();
    }

    #[test]
    fn countdown_ticks_scales_with_rate() {
        let mut config = GameConfig::default();
        config.countdown_seconds = 3;
        config.tick_rate = 60;
        assert_eq!(config.countdown_ticks(), 180);
    }

    #[test]
    #[should_panic(expected = "lives must be positive")]
    fn zero_lives_rejected() {
        let config = GameConfig {
            lives: 0,
            ..GameConfig::default()
        };
        config.validate();
    }

    #[test]
    #[should_panic(expected = "paddle wider than arena")]
    fn oversized_paddle_rejected() {
        let config = GameConfig {
            paddle_width: 500.0,
            arena_width: 480.0,
            ..GameConfig::default()
        };
        config.validate();
    }
}
