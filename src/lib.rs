//! Game-state engine for a grid battle match between a human player and a
//! trivial automated opponent.
//!
//! The engine covers board state ([`Grid`]), the ship catalog loaded from an
//! external definition file ([`Fleet`]), three fleet placement algorithms
//! ([`place`] with [`Strategy`]), single-shot resolution ([`attack`]) and the
//! alternating-turn state machine ([`GameSession`]). Presentation layers call
//! into these and receive primitive results; nothing here blocks, suspends or
//! shares state between sessions.

mod attack;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod logging;
mod placement;
mod ui;

pub use attack::attack;
pub use common::GameError;
pub use config::{DEFAULT_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, PLACEMENT_FILE, SHIPS_FILE};
pub use fleet::{Fleet, FleetHealth, ShipClass};
pub use game::{random_target, GameSession, SessionState, Side, TurnReport};
pub use grid::{Cell, Grid};
pub use logging::init_logging;
pub use placement::{place, Orientation, PlacementPlan, ShipPlacement, Strategy};
pub use ui::render_grid;
