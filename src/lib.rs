//! Brickfall - a classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, collisions)
//! - `config`: Data-driven game constants
//!
//! The crate is headless: each tick it consumes a pointer sample from the
//! host's input layer and produces a [`sim::Scene`] of plain rectangles and
//! ellipses for the host's rendering layer. Nothing in here draws, blocks,
//! or spawns threads.

pub mod config;
pub mod sim;

pub use config::{Color, GameConfig};
pub use sim::{GamePhase, Message, Scene, SessionController, TickInput};
