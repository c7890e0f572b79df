//! Random player used by the demo.
//!
//! The bot picks a uniformly random empty point. If the rules reject it
//! (self-capture, repeated board, ...) it tries again a few times and then
//! passes. It never inspects anything but the current board.

use log::{debug, warn};

use crate::board::{Board, Color, Move, Position};
use crate::constants::BOT_ATTEMPTS;
use crate::error::{MatchError, MoveError};
use crate::game::Action;
use crate::registry::{Match, PlayerId};

pub struct RandomBot {
    rng: fastrand::Rng,
    attempts: usize,
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
            attempts: BOT_ATTEMPTS,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            attempts: BOT_ATTEMPTS,
        }
    }

    /// A random empty point for `color`, or a pass on a full board.
    pub fn choose(&mut self, board: &Board, color: Color) -> Action {
        let size = board.size() as i32;
        let empty: Vec<Position> = (0..size)
            .flat_map(|x| (0..size).map(move |y| Position::new(x, y)))
            .filter(|&p| board.get(p) == Color::None)
            .collect();
        if empty.is_empty() {
            return Action::Pass(color);
        }
        let position = empty[self.rng.usize(..empty.len())];
        Action::Move(Move { player: color, position })
    }

    /// Take one turn for `id`. The caller must already hold the turn.
    pub fn play_turn(&mut self, game: &Match, id: PlayerId) -> Result<Action, MatchError> {
        let color = game.seat(id)?;
        for _ in 0..self.attempts {
            let action = self.choose(game.state().board(), color);
            if let Action::Pass(_) = action {
                break;
            }
            match game.act(id, action) {
                Ok(captured) => {
                    debug!("{color} bot played {action:?}, captured {captured}");
                    return Ok(action);
                }
                Err(MatchError::Move(MoveError::NoStones)) => break,
                Err(MatchError::Move(
                    e @ (MoveError::SelfCapture | MoveError::RepeatState | MoveError::SpotNotEmpty),
                )) => warn!("{color} bot rejected: {e}"),
                Err(e) => return Err(e),
            }
        }
        let pass = Action::Pass(color);
        game.act(id, pass)?;
        Ok(pass)
    }

    /// Play turns for `id` until the match ends. Returns the number of turns
    /// taken.
    pub fn play_match(&mut self, game: &Match, id: PlayerId) -> Result<usize, MatchError> {
        let mut turns = 0;
        while game.wait(id)? {
            match self.play_turn(game, id) {
                Ok(_) => turns += 1,
                Err(MatchError::Move(MoveError::GameOver)) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(turns)
    }
}
