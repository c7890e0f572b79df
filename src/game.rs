//! Match state and the per-move rules.
//!
//! A [`GameState`] owns the current board, the board before the last
//! accepted action, whose turn it is, and each color's stone supply and
//! prisoner count. It changes only through [`GameState::play`] and
//! [`GameState::pass`]. Moves are tried on a copy of the board, so a
//! rejected action never changes anything, with one exception: an action
//! that discovers the game has ended marks it over.
//!
//! Only the single previous board is remembered for repetition checks.

use log::{debug, info};
use serde::Serialize;

use crate::board::{Board, Color, Move};
use crate::constants::{DEFAULT_BOARD_SIZE, DEFAULT_STONES};
use crate::error::MoveError;
use crate::scoring::{self, Score};
use crate::snapshot::Snapshot;

/// Parameters fixed for the lifetime of a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub stones_per_player: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            stones_per_player: DEFAULT_STONES,
        }
    }
}

/// Stone supply and prisoners for one color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    /// Stones this color may still place
    pub remaining: u32,
    /// Opponent stones this color has captured
    pub captured: usize,
}

/// The most recent accepted stone placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub mv: Move,
    pub pieces_removed: usize,
}

/// Anything a player can do on their turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Move),
    Pass(Color),
}

impl Action {
    pub fn player(&self) -> Color {
        match self {
            Action::Move(m) => m.player,
            Action::Pass(c) => *c,
        }
    }
}

/// State of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    current: Board,
    previous: Option<Board>,
    active: Color,
    over: bool,
    black: Ledger,
    white: Ledger,
    last_move: Option<LastMove>,
    stones_per_player: u32,
}

impl GameState {
    /// Start a match on an empty `size x size` board. Black moves first.
    pub fn new(size: usize, stones_per_player: u32) -> Self {
        let ledger = Ledger {
            remaining: stones_per_player,
            captured: 0,
        };
        Self {
            current: Board::new(size),
            previous: None,
            active: Color::Black,
            over: false,
            black: ledger,
            white: ledger,
            last_move: None,
            stones_per_player,
        }
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::new(config.board_size, config.stones_per_player)
    }

    pub fn size(&self) -> usize {
        self.current.size()
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Board before the last accepted action, if there was one.
    pub fn previous(&self) -> Option<&Board> {
        self.previous.as_ref()
    }

    pub fn active_player(&self) -> Color {
        self.active
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn stones_per_player(&self) -> u32 {
        self.stones_per_player
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn ledger(&self, color: Color) -> Ledger {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
            Color::None => Ledger::default(),
        }
    }

    fn ledger_mut(&mut self, color: Color) -> &mut Ledger {
        // the active player is never None
        match color {
            Color::White => &mut self.white,
            _ => &mut self.black,
        }
    }

    fn end(&mut self, reason: &str) {
        self.over = true;
        info!("game over: {reason}");
    }

    /// Place a stone for the active player.
    ///
    /// Returns the number of opponent stones captured.
    pub fn play(&mut self, m: Move) -> Result<usize, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        if m.player != self.active {
            return Err(MoveError::WrongPlayer);
        }
        if self.ledger(m.player).remaining == 0 {
            // A match that started without stones can only end by passing
            if self.ledger(m.player.opponent()).remaining == 0 && self.stones_per_player > 0 {
                self.end("both players are out of stones");
                return Err(MoveError::GameOver);
            }
            return Err(MoveError::NoStones);
        }

        let mut next = self.current.clone();
        let captured = next.apply(m)?;
        if self.previous.as_ref() == Some(&next) {
            return Err(MoveError::RepeatState);
        }

        self.previous = Some(std::mem::replace(&mut self.current, next));
        let ledger = self.ledger_mut(m.player);
        ledger.remaining -= 1;
        ledger.captured += captured;
        self.active = m.player.opponent();
        self.last_move = Some(LastMove {
            mv: m,
            pieces_removed: captured,
        });
        debug!("{} plays {}, captures {captured}", m.player, m.position);
        Ok(captured)
    }

    /// Give up the turn without placing a stone.
    ///
    /// A pass straight after another pass ends the game and is reported as
    /// [`MoveError::GameOver`].
    pub fn pass(&mut self, color: Color) -> Result<(), MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        if color != self.active {
            return Err(MoveError::WrongPlayer);
        }
        if self.previous.as_ref() == Some(&self.current) {
            self.end("both players passed");
            return Err(MoveError::GameOver);
        }
        self.previous = Some(self.current.clone());
        self.active = color.opponent();
        debug!("{color} passes");
        Ok(())
    }

    /// Apply either kind of action. A pass captures nothing.
    pub fn act(&mut self, action: Action) -> Result<usize, MoveError> {
        match action {
            Action::Move(m) => self.play(m),
            Action::Pass(c) => self.pass(c).map(|()| 0),
        }
    }

    /// Stones, territory and prisoners per color. Available at any time.
    pub fn score(&self) -> Score {
        let mut s = scoring::score(&self.current);
        s.black += self.black.captured;
        s.white += self.white.captured;
        s
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}
