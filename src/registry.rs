//! Match registry.
//!
//! Players join one at a time. The first joiner opens a match and sits as
//! Black; the second joiner takes White in that same match, after which the
//! next joiner opens a fresh one. Each player gets a unique id used for
//! every later request.
//!
//! All match state lives in [`Match`] values owned by the registry; nothing
//! is global.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::info;
use serde::Serialize;

use crate::board::{Color, Move};
use crate::error::MatchError;
use crate::game::{Action, GameConfig, GameState};
use crate::scoring::Score;
use crate::snapshot::Snapshot;
use crate::turn::TurnGate;

pub type PlayerId = u64;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One game between two seated players.
#[derive(Debug)]
pub struct Match {
    state: Mutex<GameState>,
    gate: TurnGate,
    seats: Mutex<HashMap<PlayerId, Color>>,
}

impl Match {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::with_config(config);
        let gate = TurnGate::new(state.active_player());
        Self {
            state: Mutex::new(state),
            gate,
            seats: Mutex::new(HashMap::new()),
        }
    }

    fn sit(&self, id: PlayerId, color: Color) {
        lock(&self.seats).insert(id, color);
    }

    /// Color played by `id` in this match.
    pub fn seat(&self, id: PlayerId) -> Result<Color, MatchError> {
        lock(&self.seats)
            .get(&id)
            .copied()
            .ok_or(MatchError::UnknownPlayer(id))
    }

    pub fn players(&self) -> usize {
        lock(&self.seats).len()
    }

    /// Apply an action for `id` while holding the turn token.
    ///
    /// The action is always attributed to `id`'s seat color. The token is
    /// handed back tagged with the active player whether or not the action
    /// was accepted.
    pub fn act(&self, id: PlayerId, action: Action) -> Result<usize, MatchError> {
        let color = self.seat(id)?;
        let action = match action {
            Action::Move(m) => Action::Move(Move { player: color, ..m }),
            Action::Pass(_) => Action::Pass(color),
        };

        let token = self.gate.acquire();
        let mut state = lock(&self.state);
        let result = state.act(action);
        let next = state.active_player();
        let over = state.is_over();
        drop(state);
        token.release(next);

        if over {
            self.gate.close();
        }
        result.map_err(MatchError::from)
    }

    /// Block until it is `id`'s turn. Returns `false` if the game ended
    /// instead.
    pub fn wait(&self, id: PlayerId) -> Result<bool, MatchError> {
        let color = self.seat(id)?;
        Ok(self.gate.wait_for_turn(color) && !self.is_over())
    }

    pub fn wait_timeout(&self, id: PlayerId, timeout: Duration) -> Result<bool, MatchError> {
        let color = self.seat(id)?;
        Ok(self.gate.wait_for_turn_timeout(color, timeout) && !self.is_over())
    }

    pub fn is_over(&self) -> bool {
        lock(&self.state).is_over()
    }

    pub fn snapshot(&self) -> Snapshot {
        lock(&self.state).snapshot()
    }

    pub fn score(&self) -> Score {
        lock(&self.state).score()
    }

    /// Copy of the full state, for inspection.
    pub fn state(&self) -> GameState {
        lock(&self.state).clone()
    }
}

/// Result of joining: the player's id, color and match.
#[derive(Clone, Debug, Serialize)]
pub struct Seat {
    #[serde(rename = "ID")]
    pub id: PlayerId,
    pub color: Color,
    #[serde(skip)]
    pub game: Arc<Match>,
}

#[derive(Debug)]
struct RegistryInner {
    next_id: PlayerId,
    pending: Option<Arc<Match>>,
    players: HashMap<PlayerId, Arc<Match>>,
}

#[derive(Debug)]
pub struct MatchRegistry {
    config: GameConfig,
    inner: Mutex<RegistryInner>,
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl MatchRegistry {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(RegistryInner {
                next_id: 1,
                pending: None,
                players: HashMap::new(),
            }),
        }
    }

    /// Seat a new player. `size` picks the board size when this join opens a
    /// match; 0 means the registry default. It is ignored for the second
    /// player.
    pub fn join(&self, size: usize) -> Seat {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;

        let (game, color) = match inner.pending.take() {
            Some(game) => (game, Color::White),
            None => {
                let config = GameConfig {
                    board_size: if size == 0 { self.config.board_size } else { size },
                    ..self.config
                };
                let game = Arc::new(Match::new(config));
                inner.pending = Some(Arc::clone(&game));
                (game, Color::Black)
            }
        };
        game.sit(id, color);
        inner.players.insert(id, Arc::clone(&game));
        info!("player {id} joined as {color}");

        Seat { id, color, game }
    }

    pub fn lookup(&self, id: PlayerId) -> Option<Arc<Match>> {
        lock(&self.inner).players.get(&id).cloned()
    }

    /// Forget a player. The match lives on for any other holder.
    pub fn leave(&self, id: PlayerId) -> Option<Arc<Match>> {
        let mut inner = lock(&self.inner);
        let game = inner.players.remove(&id)?;
        if inner
            .pending
            .as_ref()
            .is_some_and(|p| Arc::ptr_eq(p, &game))
        {
            inner.pending = None;
        }
        Some(game)
    }

    /// Number of seated players.
    pub fn len(&self) -> usize {
        lock(&self.inner).players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
