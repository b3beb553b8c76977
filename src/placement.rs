//! Fleet placement: sequential, random and externally-specified algorithms.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, error};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::common::GameError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::fleet::Fleet;
use crate::grid::Grid;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

/// Placement origin and orientation for one ship: `(x, y, orientation)`.
pub type ShipPlacement = (usize, usize, Orientation);

/// Externally supplied placement record mapping ship names to positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementPlan(HashMap<String, ShipPlacement>);

impl PlacementPlan {
    /// An empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a plan from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            error!("failed to read placement record from {}: {}", path.display(), err);
            if err.kind() == io::ErrorKind::NotFound {
                GameError::SourceNotFound(path.display().to_string())
            } else {
                GameError::Format(err.to_string())
            }
        })?;
        serde_json::from_str(&text)
            .map_err(|err| GameError::Format(format!("invalid placement record: {}", err)))
    }

    /// Record a position for `name`.
    pub fn insert(&mut self, name: impl Into<String>, x: usize, y: usize, orientation: Orientation) {
        self.0.insert(name.into(), (x, y, orientation));
    }

    /// Position recorded for `name`, if any. Entries for ships outside the
    /// registry in play are ignored by the placement engine.
    pub fn get(&self, name: &str) -> Option<&ShipPlacement> {
        self.0.get(name)
    }
}

/// Placement algorithm selector passed to [`place`].
#[derive(Debug, Clone, Copy)]
pub enum Strategy<'a> {
    /// Deterministic fixture: ship `i` into row `i` from column 0, horizontal.
    /// Useful for tests and demos, not a sensible game placement.
    Sequential,
    /// Uniform random origin and orientation with a bounded retry budget.
    Random,
    /// Positions supplied by an external placement record.
    Custom(&'a PlacementPlan),
}

/// Place every ship of `fleet` onto `grid` using the selected strategy.
///
/// On success each ship occupies exactly `length` contiguous cells in a single
/// orientation and no two ships overlap. On failure the grid may retain ships
/// placed by earlier iterations; callers should discard it.
pub fn place<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &Fleet,
    strategy: Strategy<'_>,
    rng: &mut R,
) -> Result<(), GameError> {
    match strategy {
        Strategy::Sequential => place_sequential(grid, fleet),
        Strategy::Random => place_random(grid, fleet, rng),
        Strategy::Custom(plan) => place_custom(grid, fleet, plan),
    }
}

/// Cells covered by a ship of `length` from `(x, y)` in `orientation`.
fn span(
    x: usize,
    y: usize,
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (x + i, y),
        Orientation::Vertical => (x, y + i),
    })
}

/// Bounds- and overlap-check the span, then write the ship into it.
/// The failing ship writes nothing; earlier ships are left as they are.
fn write_ship(
    grid: &mut Grid,
    index: usize,
    name: &str,
    x: usize,
    y: usize,
    orientation: Orientation,
    length: usize,
) -> Result<(), GameError> {
    for (cx, cy) in span(x, y, orientation, length) {
        if grid.cell(cx, cy)?.is_some() {
            error!("invalid placement for {}: ({}, {}) is occupied", name, cx, cy);
            return Err(GameError::InvalidPlacement(name.to_string()));
        }
    }
    for (cx, cy) in span(x, y, orientation, length) {
        grid.set(cx, cy, index);
    }
    Ok(())
}

fn place_sequential(grid: &mut Grid, fleet: &Fleet) -> Result<(), GameError> {
    for (index, class) in fleet.iter().enumerate() {
        write_ship(
            grid,
            index,
            class.name(),
            0,
            index,
            Orientation::Horizontal,
            class.length(),
        )?;
    }
    Ok(())
}

fn place_random<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &Fleet,
    rng: &mut R,
) -> Result<(), GameError> {
    for (index, class) in fleet.iter().enumerate() {
        place_random_single(grid, index, class.name(), class.length(), rng)?;
    }
    Ok(())
}

fn place_random_single<R: Rng + ?Sized>(
    grid: &mut Grid,
    index: usize,
    name: &str,
    length: usize,
    rng: &mut R,
) -> Result<(), GameError> {
    let size = grid.size();
    if length > size {
        // no origin fits the ship in either orientation
        return Err(GameError::PlacementExhausted {
            ship: name.to_string(),
            attempts: 0,
        });
    }
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (size - length, size - 1),
            Orientation::Vertical => (size - 1, size - length),
        };
        let x = rng.random_range(0..=max_x);
        let y = rng.random_range(0..=max_y);
        let free = span(x, y, orientation, length).all(|(cx, cy)| matches!(grid.cell(cx, cy), Ok(None)));
        if free {
            for (cx, cy) in span(x, y, orientation, length) {
                grid.set(cx, cy, index);
            }
            return Ok(());
        }
        debug!(
            "placement of {} at ({}, {}) {:?} blocked, retrying (attempt {})",
            name, x, y, orientation, attempt
        );
    }
    error!("unable to place {} after {} attempts", name, MAX_PLACEMENT_ATTEMPTS);
    Err(GameError::PlacementExhausted {
        ship: name.to_string(),
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

fn place_custom(grid: &mut Grid, fleet: &Fleet, plan: &PlacementPlan) -> Result<(), GameError> {
    for (index, class) in fleet.iter().enumerate() {
        let &(x, y, orientation) = plan
            .get(class.name())
            .ok_or_else(|| GameError::MissingPlacement(class.name().to_string()))?;
        write_ship(grid, index, class.name(), x, y, orientation, class.length())?;
    }
    Ok(())
}
