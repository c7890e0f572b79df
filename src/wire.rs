//! Decoding of move request bodies.
//!
//! A move is sent as a JSON array: `[x, y]` places a stone, `[]` passes.
//! The acting color comes from the seat, never from the body.

use crate::board::{Color, Move};
use crate::error::WireError;
use crate::game::Action;

pub fn parse_action(player: Color, body: &str) -> Result<Action, WireError> {
    let coords: Vec<i32> = serde_json::from_str(body)?;
    match coords[..] {
        [] => Ok(Action::Pass(player)),
        [x, y] => Ok(Action::Move(Move::new(player, x, y))),
        _ => Err(WireError::Arity(coords.len())),
    }
}
