//! Default match parameters.
//!
//! Board size and stone supply are chosen per match at runtime; these are
//! the values used when a caller does not ask for anything specific.

// =============================================================================
// Match Defaults
// =============================================================================

/// Board size (NxN) used when none is requested. Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Stones each player may place over the whole match.
pub const DEFAULT_STONES: u32 = 180;

// =============================================================================
// Demo Bot Parameters
// =============================================================================

/// How many random points the demo bot tries before giving up and passing.
pub const BOT_ATTEMPTS: usize = 16;

// =============================================================================
// Display Characters
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
