/// Default board size when none is specified.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Default ship definition file, `name:length` records one per line.
pub const SHIPS_FILE: &str = "battleships.txt";

/// Default placement record consumed by the custom placement algorithm.
pub const PLACEMENT_FILE: &str = "placement.json";

/// Attempt budget for random placement before giving up on a ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
