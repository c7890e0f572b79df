//! Territory scoring.
//!
//! Every maximal empty region is flood-filled once. A region whose border
//! touches stones of a single color is that color's territory; a region
//! touching both colors (or no stones at all) is neutral.
//!
//! A board score is stones on the board plus territory. Prisoners are not
//! visible on a board and are added by [`crate::game::GameState::score`].

use std::collections::VecDeque;

use serde::Serialize;

use crate::board::{Board, Color, Position};

/// Points per color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
            Color::None => 0,
        }
    }

    fn add(&mut self, color: Color, points: usize) {
        match color {
            Color::Black => self.black += points,
            Color::White => self.white += points,
            Color::None => {}
        }
    }

    /// The color with more points, or `None` on a tie.
    pub fn leader(&self) -> Color {
        use std::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => Color::Black,
            Ordering::Less => Color::White,
            Ordering::Equal => Color::None,
        }
    }
}

/// Per-cell state during one scoring pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mark {
    Unexplored,
    /// Part of the region currently being walked
    Explored,
    /// Already attributed (or found neutral); never revisited
    Resolved,
}

/// Border seen so far while walking a region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Border {
    Nothing,
    Only(Color),
    Mixed,
}

impl Border {
    fn touch(self, color: Color) -> Border {
        match self {
            Border::Nothing => Border::Only(color),
            Border::Only(c) if c == color => self,
            _ => Border::Mixed,
        }
    }
}

/// Empty points attributed to each color.
pub fn territory(board: &Board) -> Score {
    let size = board.size();
    let idx = |p: Position| p.x as usize * size + p.y as usize;
    let mut marks = vec![Mark::Unexplored; size * size];
    let mut score = Score::default();
    let mut region = Vec::new();
    let mut frontier = VecDeque::new();

    for x in 0..size as i32 {
        for y in 0..size as i32 {
            let start = Position::new(x, y);
            if board.get(start) != Color::None || marks[idx(start)] == Mark::Resolved {
                continue;
            }

            region.clear();
            let mut border = Border::Nothing;
            marks[idx(start)] = Mark::Explored;
            frontier.push_back(start);

            while let Some(p) = frontier.pop_front() {
                region.push(p);
                for n in p.adjacent() {
                    if !board.contains(n) {
                        continue;
                    }
                    match board.get(n) {
                        Color::None => {
                            if marks[idx(n)] == Mark::Unexplored {
                                marks[idx(n)] = Mark::Explored;
                                frontier.push_back(n);
                            }
                        }
                        stone => border = border.touch(stone),
                    }
                }
            }

            if let Border::Only(owner) = border {
                score.add(owner, region.len());
            }
            for &p in &region {
                marks[idx(p)] = Mark::Resolved;
            }
        }
    }
    score
}

/// Stones on the board plus territory.
pub fn score(board: &Board) -> Score {
    let mut total = territory(board);
    total.add(Color::Black, board.count(Color::Black));
    total.add(Color::White, board.count(Color::White));
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_two_by_two_black_owns_everything() {
        let s = score(&board(". X / X ."));
        assert_eq!(s, Score { black: 4, white: 0 });
        assert_eq!(s.leader(), Color::Black);
    }

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(score(&Board::new(5)), Score::default());
    }

    #[test]
    fn test_shared_region_is_dame() {
        let b = board(
            "X . O
             X . O
             X . O",
        );
        assert_eq!(territory(&b), Score::default());
        assert_eq!(score(&b), Score { black: 3, white: 3 });
    }

    #[test]
    fn test_separate_regions_each_resolved() {
        // Left column is black territory, right column white, middle wall split
        let b = board(
            ". X O .
             . X O .
             . X O .
             . X O .",
        );
        assert_eq!(territory(&b), Score { black: 4, white: 4 });
    }

    #[test]
    fn test_neutral_region_does_not_spoil_neighbour() {
        // The top-left region is shared; the bottom-right region is white's alone
        let b = board(
            ". X . .
             O X . .
             . . O O
             . . O .",
        );
        let t = territory(&b);
        assert_eq!(t.white, 1);
        assert_eq!(t.black, 0);
    }

    #[test]
    fn test_score_get() {
        let s = Score { black: 3, white: 7 };
        assert_eq!(s.get(Color::Black), 3);
        assert_eq!(s.get(Color::White), 7);
        assert_eq!(s.get(Color::None), 0);
        assert_eq!(s.leader(), Color::White);
    }
}
