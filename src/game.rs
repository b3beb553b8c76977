//! Turn orchestration for a match between the player and the automated
//! opponent.

use log::info;
use rand::Rng;

use crate::attack::attack;
use crate::common::GameError;
use crate::fleet::{Fleet, FleetHealth};
use crate::grid::Grid;
use crate::placement::{place, Strategy};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for both sides' fleets to be placed.
    AwaitingPlacement,
    /// Turns are being played.
    InProgress,
    /// The named side has sunk the opposing fleet.
    Finished(Side),
}

/// Outcome of one full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player_shot: (usize, usize),
    pub player_hit: bool,
    /// `None` when the player's shot ended the game before the reply.
    pub opponent_shot: Option<((usize, usize), bool)>,
}

/// Uniformly random coordinate on a `size` x `size` grid.
///
/// The automated opponent keeps no memory of earlier shots and may target
/// already-revealed cells; a repeat shot resolves as a plain miss.
pub fn random_target<R: Rng + ?Sized>(size: usize, rng: &mut R) -> (usize, usize) {
    (rng.random_range(0..size), rng.random_range(0..size))
}

/// One match: both sides' grids and fleet healths plus the lifecycle state.
///
/// The session is single-threaded and turn-synchronous; callers running
/// multiple sessions keep one `GameSession` per match and serialise access.
#[derive(Debug)]
pub struct GameSession {
    player_grid: Grid,
    player_health: FleetHealth,
    opponent_grid: Grid,
    opponent_health: FleetHealth,
    state: SessionState,
}

impl GameSession {
    /// Create a session with empty `size` x `size` grids for both sides.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            player_grid: Grid::new(size)?,
            player_health: FleetHealth::default(),
            opponent_grid: Grid::new(size)?,
            opponent_health: FleetHealth::default(),
            state: SessionState::AwaitingPlacement,
        })
    }

    /// Place `fleet` for one side using the given strategy. Once both sides
    /// have ships the session moves to [`SessionState::InProgress`].
    ///
    /// A placement failure discards that side's partially written grid so the
    /// caller can retry with a corrected plan.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        side: Side,
        fleet: &Fleet,
        strategy: Strategy<'_>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        if self.state != SessionState::AwaitingPlacement {
            return Err(GameError::AlreadyPlaced);
        }
        let (grid, health) = match side {
            Side::Player => (&mut self.player_grid, &mut self.player_health),
            Side::Opponent => (&mut self.opponent_grid, &mut self.opponent_health),
        };
        if !grid.is_empty() {
            return Err(GameError::AlreadyPlaced);
        }
        let size = grid.size();
        if let Err(err) = place(grid, fleet, strategy, rng) {
            *grid = Grid::new(size)?;
            return Err(err);
        }
        *health = FleetHealth::new(fleet);
        if !self.player_grid.is_empty() && !self.opponent_grid.is_empty() {
            self.state = SessionState::InProgress;
            info!("both fleets placed, game in progress");
        }
        Ok(())
    }

    /// Play one full turn: the player's shot, then (if the game is still on)
    /// the automated opponent's uniformly random reply.
    ///
    /// Exhaustion is checked after each half-turn, so ties are impossible and
    /// the reply is skipped when the player's shot ends the game. An
    /// out-of-range player shot is an error and does not advance the turn.
    pub fn play_turn<R: Rng + ?Sized>(
        &mut self,
        shot: (usize, usize),
        rng: &mut R,
    ) -> Result<TurnReport, GameError> {
        match self.state {
            SessionState::AwaitingPlacement => return Err(GameError::PlacementPending),
            SessionState::Finished(_) => return Err(GameError::AlreadyFinished),
            SessionState::InProgress => {}
        }

        let player_hit = attack(
            shot.0,
            shot.1,
            &mut self.opponent_grid,
            &mut self.opponent_health,
        )?;
        if self.opponent_health.all_sunk() {
            self.state = SessionState::Finished(Side::Player);
            info!("player sunk the last ship and wins");
            return Ok(TurnReport {
                player_shot: shot,
                player_hit,
                opponent_shot: None,
            });
        }

        let reply = random_target(self.player_grid.size(), rng);
        let opponent_hit = attack(
            reply.0,
            reply.1,
            &mut self.player_grid,
            &mut self.player_health,
        )?;
        if self.player_health.all_sunk() {
            self.state = SessionState::Finished(Side::Opponent);
            info!("opponent sunk the last ship and wins");
        }

        Ok(TurnReport {
            player_shot: shot,
            player_hit,
            opponent_shot: Some((reply, opponent_hit)),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Winner, once the session is finished.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            SessionState::Finished(side) => Some(side),
            _ => None,
        }
    }

    /// The given side's board.
    pub fn grid(&self, side: Side) -> &Grid {
        match side {
            Side::Player => &self.player_grid,
            Side::Opponent => &self.opponent_grid,
        }
    }

    /// The given side's fleet health.
    pub fn health(&self, side: Side) -> &FleetHealth {
        match side {
            Side::Player => &self.player_health,
            Side::Opponent => &self.opponent_health,
        }
    }
}
