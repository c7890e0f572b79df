//! JSON view of a match.
//!
//! The snapshot is write-only: it drops the previous board and the capture
//! history, so a match cannot be rebuilt from it.

use serde::Serialize;

use crate::board::Color;
use crate::game::{GameState, Ledger};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Vec<Vec<Color>>,
    #[serde(rename = "currentplayer")]
    pub current_player: Color,
    pub black: Ledger,
    pub white: Ledger,
    #[serde(rename = "lastmove")]
    pub last_move: LastMoveRecord,
}

/// Flattened last move. All zero with a `None` player before the first move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LastMoveRecord {
    pub player: Color,
    pub x: i32,
    pub y: i32,
    pub pieces_removed: usize,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let last_move = state
            .last_move()
            .map(|lm| LastMoveRecord {
                player: lm.mv.player,
                x: lm.mv.position.x,
                y: lm.mv.position.y,
                pieces_removed: lm.pieces_removed,
            })
            .unwrap_or_default();
        Self {
            board: state.board().rows().map(<[Color]>::to_vec).collect(),
            current_player: state.active_player(),
            black: state.ledger(Color::Black),
            white: state.ledger(Color::White),
            last_move,
        }
    }
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
