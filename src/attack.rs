//! Attack resolution: applies a single shot to a grid and fleet-health pair.

use log::info;

use crate::common::GameError;
use crate::fleet::FleetHealth;
use crate::grid::Grid;

/// Resolve one shot at `(x, y)` against `grid` and its paired `health`.
///
/// A miss (including a repeat shot at an already-cleared cell) returns `false`
/// and leaves all state untouched. A hit clears the cell, decrements the
/// struck ship's remaining segment count by one and returns `true`.
pub fn attack(
    x: usize,
    y: usize,
    grid: &mut Grid,
    health: &mut FleetHealth,
) -> Result<bool, GameError> {
    match grid.cell(x, y)? {
        None => {
            info!("attack at ({}, {}) missed", x, y);
            Ok(false)
        }
        Some(ship) => {
            health.record_hit(ship);
            grid.clear(x, y);
            info!("attack at ({}, {}) hit ship {}", x, y, ship);
            Ok(true)
        }
    }
}
