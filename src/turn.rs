//! Turn gate: exclusive, alternating ownership of a match.
//!
//! The gate holds a single token tagged with the color whose turn it is.
//! Whoever wants to change the match acquires the token, acts, and releases
//! it tagged with the next color. Waiting for a turn sleeps on a condition
//! variable instead of repeatedly taking and returning the token.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::board::Color;

#[derive(Debug)]
struct GateState {
    turn: Color,
    closed: bool,
}

#[derive(Debug)]
pub struct TurnGate {
    state: Mutex<GateState>,
    changed: Condvar,
}

/// Exclusive right to act on a match. Dropping the token without calling
/// [`TurnToken::release`] hands it back with the same color.
pub struct TurnToken<'a> {
    guard: MutexGuard<'a, GateState>,
    gate: &'a TurnGate,
}

impl TurnToken<'_> {
    /// Color the token was tagged with when acquired.
    pub fn color(&self) -> Color {
        self.guard.turn
    }

    /// Hand the token back, tagged with whoever moves next.
    pub fn release(mut self, next: Color) {
        self.guard.turn = next;
    }
}

impl Drop for TurnToken<'_> {
    fn drop(&mut self) {
        self.gate.changed.notify_all();
    }
}

impl TurnGate {
    pub fn new(first: Color) -> Self {
        Self {
            state: Mutex::new(GateState {
                turn: first,
                closed: false,
            }),
            changed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the token, blocking only while someone else holds it.
    pub fn acquire(&self) -> TurnToken<'_> {
        TurnToken {
            guard: self.lock(),
            gate: self,
        }
    }

    /// Color the token is currently tagged with.
    pub fn current(&self) -> Color {
        self.lock().turn
    }

    /// Block until the token is tagged with `color` or the gate is closed.
    ///
    /// Returns whether it is now `color`'s turn.
    pub fn wait_for_turn(&self, color: Color) -> bool {
        let guard = self
            .changed
            .wait_while(self.lock(), |s| s.turn != color && !s.closed)
            .unwrap_or_else(PoisonError::into_inner);
        guard.turn == color
    }

    /// Like [`TurnGate::wait_for_turn`] but gives up after `timeout`.
    pub fn wait_for_turn_timeout(&self, color: Color, timeout: Duration) -> bool {
        let (guard, _) = self
            .changed
            .wait_timeout_while(self.lock(), timeout, |s| s.turn != color && !s.closed)
            .unwrap_or_else(PoisonError::into_inner);
        guard.turn == color
    }

    /// Wake every waiter for good. Used once a match is over.
    pub fn close(&self) {
        self.lock().closed = true;
        self.changed.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}
