//! Integration tests for gobotgo
//!
//! These exercise the public API end to end: board fixtures, the move/pass
//! state machine, scoring, and matches played across threads through the
//! registry and turn gate.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use gobotgo::board::{Board, Color, Move, Position};
use gobotgo::bot::RandomBot;
use gobotgo::error::{MatchError, MoveError};
use gobotgo::game::{Action, GameConfig, GameState, Ledger};
use gobotgo::registry::MatchRegistry;
use gobotgo::scoring::{self, Score};
use gobotgo::wire::parse_action;

// =============================================================================
// Helper functions
// =============================================================================

fn board(s: &str) -> Board {
    s.parse().expect("valid board text")
}

fn registry(size: usize, stones: u32) -> MatchRegistry {
    MatchRegistry::new(GameConfig {
        board_size: size,
        stones_per_player: stones,
    })
}

// =============================================================================
// Board fixtures
// =============================================================================

#[test]
fn test_copy_independence() {
    let mut original = board("X . . / . O . / . . X");
    let mut copy = original.clone();
    copy.set(Position::new(0, 1), Color::White);
    assert_eq!(original.get(Position::new(0, 1)), Color::None);
    original.set(Position::new(2, 0), Color::Black);
    assert_eq!(copy.get(Position::new(2, 0)), Color::None);
}

#[test]
fn test_flood_fill_fixture() {
    let b = board("O X / . O");
    let mask = b.bounded_mask(Position::new(0, 1)).expect("lone black stone is bounded");
    assert_eq!(mask.positions().collect::<Vec<_>>(), vec![Position::new(0, 1)]);
    assert!(b.bounded_mask(Position::new(0, 0)).is_none());
    assert!(b.bounded_mask(Position::new(1, 1)).is_none());
}

#[test]
fn test_capture_fixture() {
    let mut b = board(". X / . O");
    assert_eq!(b.apply(Move::new(Color::White, 0, 0)), Ok(1));
    assert_eq!(b, board("O . / . O"));
}

#[test]
fn test_self_capture_fixture() {
    let mut b = board(". X / X .");
    assert_eq!(b.apply(Move::new(Color::White, 0, 0)), Err(MoveError::SelfCapture));
    assert_eq!(b, board(". X / X ."));
}

#[test]
fn test_scoring_fixture() {
    assert_eq!(scoring::score(&board(". X / X .")), Score { black: 4, white: 0 });
}

// =============================================================================
// State machine
// =============================================================================

#[test]
fn test_turn_alternation() {
    let mut game = GameState::new(4, 20);
    assert_eq!(game.play(Move::new(Color::White, 0, 0)), Err(MoveError::WrongPlayer));
    assert_eq!(game.play(Move::new(Color::Black, 0, 0)), Ok(0));
    assert_eq!(game.active_player(), Color::White);
}

#[test]
fn test_zero_stones() {
    let mut game = GameState::new(4, 0);
    assert_eq!(game.play(Move::new(Color::Black, 1, 1)), Err(MoveError::NoStones));
    assert_eq!(game.ledger(Color::Black), Ledger { remaining: 0, captured: 0 });
    assert_eq!(game.ledger(Color::White), Ledger { remaining: 0, captured: 0 });
    assert_eq!(game.board(), &Board::new(4));
}

#[test]
fn test_double_pass_is_terminal() {
    let mut game = GameState::new(9, 10);
    game.play(Move::new(Color::Black, 4, 4)).unwrap();
    game.pass(Color::White).unwrap();
    assert_eq!(game.pass(Color::Black), Err(MoveError::GameOver));
    assert!(game.is_over());
    assert_eq!(game.play(Move::new(Color::White, 0, 0)), Err(MoveError::GameOver));
    assert_eq!(game.pass(Color::White), Err(MoveError::GameOver));
    // scoring still works afterwards
    assert_eq!(game.score().black, 81);
}

#[test]
fn test_pass_does_not_record_last_move() {
    let mut game = GameState::new(5, 10);
    game.play(Move::new(Color::Black, 2, 2)).unwrap();
    game.pass(Color::White).unwrap();
    let last = game.last_move().unwrap();
    assert_eq!(last.mv, Move::new(Color::Black, 2, 2));
    assert_eq!(game.snapshot().current_player, Color::Black);
}

// =============================================================================
// Matches over the registry
// =============================================================================

#[test]
fn test_wait_then_move() {
    let registry = registry(9, 20);
    let black = registry.join(0);
    let white = registry.join(0);
    let game = Arc::clone(&black.game);

    let waiter = {
        let game = Arc::clone(&game);
        let id = white.id;
        thread::spawn(move || game.wait(id))
    };
    thread::sleep(Duration::from_millis(50));
    let action = parse_action(black.color, "[1,1]").unwrap();
    assert_eq!(game.act(black.id, action), Ok(0));
    assert_eq!(waiter.join().unwrap(), Ok(true));

    let waiter = {
        let game = Arc::clone(&game);
        let id = black.id;
        thread::spawn(move || game.wait(id))
    };
    thread::sleep(Duration::from_millis(50));
    let action = parse_action(white.color, "[2,2]").unwrap();
    assert_eq!(game.act(white.id, action), Ok(0));
    assert_eq!(waiter.join().unwrap(), Ok(true));

    let snap = game.snapshot();
    assert_eq!(snap.board[1][1], Color::Black);
    assert_eq!(snap.board[2][2], Color::White);
}

#[test]
fn test_wait_times_out_when_not_your_turn() {
    let registry = registry(5, 10);
    let black = registry.join(0);
    let white = registry.join(0);
    assert_eq!(
        white.game.wait_timeout(white.id, Duration::from_millis(20)),
        Ok(false)
    );
    assert_eq!(
        black.game.wait_timeout(black.id, Duration::from_millis(20)),
        Ok(true)
    );
}

#[test]
fn test_out_of_turn_action_is_rejected() {
    let registry = registry(5, 10);
    let _black = registry.join(0);
    let white = registry.join(0);
    assert_eq!(
        white.game.act(white.id, Action::Pass(Color::White)),
        Err(MatchError::Move(MoveError::WrongPlayer))
    );
    assert_eq!(white.game.state().active_player(), Color::Black);
}

#[test]
fn test_bots_finish_a_match() {
    let registry = registry(5, 8);
    let black = registry.join(0);
    let white = registry.join(0);

    let handles: Vec<_> = [(black.id, 3u64), (white.id, 4u64)]
        .into_iter()
        .map(|(id, seed)| {
            let game = Arc::clone(&black.game);
            thread::spawn(move || RandomBot::with_seed(seed).play_match(&game, id))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    let state = black.game.state();
    assert!(state.is_over());
    assert!(state.ledger(Color::Black).remaining <= 8);
    assert!(state.ledger(Color::White).remaining <= 8);
    let stones = state.board().count(Color::Black) + state.board().count(Color::White);
    assert!(stones <= 16);
}
