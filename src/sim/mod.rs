//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous step per host tick, no internal timing
//! - Seeded RNG only
//! - Stable iteration order (bricks keep layout order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod controller;
pub mod field;
pub mod session;
pub mod shape;

pub use ball::Ball;
pub use controller::{GamePhase, Message, Scene, SessionController, TickInput};
pub use field::{Brick, BrickField};
pub use session::{Contact, GameSession};
pub use shape::{Ellipse, Rect};
