//! Fleet registry and per-ship health counters.

use std::fs;
use std::io;
use std::path::Path;

use log::{error, info};

use crate::common::GameError;

/// Type of ship: name and segment length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipClass {
    name: String,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's length in segments.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Ordered, immutable catalog of the ships in a match.
///
/// Order is insertion order from the source; sequential placement depends on
/// it. Ships are referred to elsewhere by their index in this registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    classes: Vec<ShipClass>,
}

impl Fleet {
    /// Build a registry from pre-parsed classes. Names must be unique and
    /// lengths positive; an empty registry is rejected.
    pub fn new(classes: Vec<ShipClass>) -> Result<Self, GameError> {
        if classes.is_empty() {
            return Err(GameError::Format("no ship records".into()));
        }
        for (i, class) in classes.iter().enumerate() {
            if class.length == 0 {
                return Err(GameError::Format(format!(
                    "ship {:?} has zero length",
                    class.name
                )));
            }
            if classes[..i].iter().any(|c| c.name == class.name) {
                return Err(GameError::Format(format!(
                    "duplicate ship name {:?}",
                    class.name
                )));
            }
        }
        Ok(Fleet { classes })
    }

    /// Parse `name:length` records, one per line. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let mut classes = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (name, length) = line.split_once(':').ok_or_else(|| {
                GameError::Format(format!(
                    "line {}: expected name:length, got {:?}",
                    lineno + 1,
                    line
                ))
            })?;
            let length = length.trim().parse::<usize>().map_err(|_| {
                GameError::Format(format!(
                    "line {}: invalid length {:?}",
                    lineno + 1,
                    length.trim()
                ))
            })?;
            classes.push(ShipClass::new(name.trim(), length));
        }
        Self::new(classes)
    }

    /// Load a registry from a `name:length`-per-line UTF-8 file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            error!("failed to read ship definitions from {}: {}", path.display(), err);
            if err.kind() == io::ErrorKind::NotFound {
                GameError::SourceNotFound(path.display().to_string())
            } else {
                GameError::Format(err.to_string())
            }
        })?;
        let fleet = Self::parse(&text)?;
        info!("loaded {} ship classes from {}", fleet.len(), path.display());
        Ok(fleet)
    }

    /// Number of ship classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always `false` for a constructed registry; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class at `index`.
    pub fn get(&self, index: usize) -> Option<&ShipClass> {
        self.classes.get(index)
    }

    /// Iterate classes in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ShipClass> {
        self.classes.iter()
    }

    /// Registry index of the ship with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.name == name)
    }

    /// Total number of ship segments across the registry.
    pub fn total_segments(&self) -> usize {
        self.classes.iter().map(|c| c.length).sum()
    }
}

/// Remaining segment counters for one side's fleet, indexed like the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetHealth {
    remaining: Vec<usize>,
}

impl FleetHealth {
    /// Full health for every ship in `fleet`.
    pub fn new(fleet: &Fleet) -> Self {
        Self {
            remaining: fleet.iter().map(|c| c.length()).collect(),
        }
    }

    /// Remaining segments of the ship at `index`.
    pub fn remaining(&self, index: usize) -> Option<usize> {
        self.remaining.get(index).copied()
    }

    /// `true` when the ship at `index` has no segments left.
    pub fn is_sunk(&self, index: usize) -> bool {
        self.remaining.get(index).is_some_and(|&count| count == 0)
    }

    /// `true` when every ship is sunk, i.e. the owning side has lost.
    pub fn all_sunk(&self) -> bool {
        self.remaining.iter().all(|&count| count == 0)
    }

    /// Total segments still afloat.
    pub fn total_remaining(&self) -> usize {
        self.remaining.iter().sum()
    }

    pub(crate) fn record_hit(&mut self, index: usize) {
        if let Some(count) = self.remaining.get_mut(index) {
            *count = count.saturating_sub(1);
        }
    }
}
