//! Board representation and group analysis.
//!
//! The board is a square grid stored as one flat `Vec` of `size * size`
//! cells, addressed as `x * size + y` (`x` is the row, `y` the column).
//! Copying is an explicit `clone()`; a copy never shares storage with its
//! source.
//!
//! Group analysis works by breadth-first flood fill over same-colored
//! stones. A group is *bounded* when the fill exhausts without touching an
//! empty point; bounded opponent groups are captured, and a bounded group
//! for the mover's own stone is self-capture unless something was captured
//! first.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{EMPTY, STONE_BLACK, STONE_WHITE};
use crate::error::{BoardParseError, MoveError};

/// Color of an intersection. `None` is an empty point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    None,
    Black,
    White,
}

impl Color {
    /// The other player. `None` has no opponent and maps to itself.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::None => Color::None,
        }
    }

    /// Canonical name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::None => "None",
        }
    }

    /// Case-insensitive lookup; anything unrecognised is `None`.
    pub fn parse(s: &str) -> Color {
        if s.eq_ignore_ascii_case("black") {
            Color::Black
        } else if s.eq_ignore_ascii_case("white") {
            Color::White
        } else {
            Color::None
        }
    }

    fn symbol(self) -> char {
        match self {
            Color::Black => STONE_BLACK,
            Color::White => STONE_WHITE,
            Color::None => EMPTY,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Color::parse(&s))
    }
}

/// A zero-based board coordinate. `x` selects the row, `y` the column.
///
/// Coordinates are signed so that anything a client sends can be
/// represented and then rejected as out of bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors. Some may lie off the board.
    pub fn adjacent(self) -> [Position; 4] {
        [
            Position::new(self.x, self.y + 1),
            Position::new(self.x + 1, self.y),
            Position::new(self.x, self.y - 1),
            Position::new(self.x - 1, self.y),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

/// A stone placement by one player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Color,
    pub position: Position,
}

impl Move {
    pub fn new(player: Color, x: i32, y: i32) -> Self {
        Self {
            player,
            position: Position::new(x, y),
        }
    }
}

/// Set of points reached by a flood fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    size: usize,
    marked: Vec<bool>,
    len: usize,
}

impl Mask {
    fn new(size: usize) -> Self {
        Self {
            size,
            marked: vec![false; size * size],
            len: 0,
        }
    }

    fn mark(&mut self, i: usize) {
        if !self.marked[i] {
            self.marked[i] = true;
            self.len += 1;
        }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0
            && p.y >= 0
            && (p.x as usize) < self.size
            && (p.y as usize) < self.size
            && self.marked[p.x as usize * self.size + p.y as usize]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marked points in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.marked
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(i, _)| Position::new((i / size) as i32, (i % size) as i32))
    }
}

/// Square grid of intersections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Color>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Color::None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, p: Position) -> usize {
        p.x as usize * self.size + p.y as usize
    }

    /// Whether `p` lies within `[0, size) x [0, size)`.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.size && (p.y as usize) < self.size
    }

    /// Color at `p`. The caller guarantees `p` is on the board.
    pub fn get(&self, p: Position) -> Color {
        self.cells[self.idx(p)]
    }

    /// Overwrite the color at `p`. The caller guarantees `p` is on the board.
    pub fn set(&mut self, p: Position, color: Color) {
        let i = self.idx(p);
        self.cells[i] = color;
    }

    /// One row of the board.
    pub fn row(&self, x: usize) -> &[Color] {
        &self.cells[x * self.size..(x + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks() rejects a zero chunk size
        self.cells.chunks(self.size.max(1))
    }

    /// Number of intersections holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    fn on_board_neighbors(&self, p: Position) -> impl Iterator<Item = Position> + '_ {
        p.adjacent().into_iter().filter(|&n| self.contains(n))
    }

    /// Flood-fill the group at `start`.
    ///
    /// Returns the group's points if it has no liberty, or `None` as soon as
    /// any empty neighbor is found. An empty `start` is never bounded.
    pub fn bounded_mask(&self, start: Position) -> Option<Mask> {
        let color = self.get(start);
        if color == Color::None {
            return None;
        }
        let mut mask = Mask::new(self.size);
        mask.mark(self.idx(start));
        let mut frontier = VecDeque::with_capacity(64);
        frontier.push_back(start);

        while let Some(p) = frontier.pop_front() {
            for n in self.on_board_neighbors(p) {
                if mask.contains(n) {
                    continue;
                }
                match self.get(n) {
                    Color::None => return None,
                    c if c == color => {
                        mask.mark(self.idx(n));
                        frontier.push_back(n);
                    }
                    _ => {} // opponent stones neither extend nor free the group
                }
            }
        }
        Some(mask)
    }

    /// Remove the group at `start` if it is bounded, returning how many
    /// stones were taken off.
    pub fn clear_bounded(&mut self, start: Position) -> usize {
        let Some(mask) = self.bounded_mask(start) else {
            return 0;
        };
        debug_assert!(!mask.is_empty(), "bounded group with an empty mask");
        for p in mask.positions() {
            self.set(p, Color::None);
        }
        mask.len()
    }

    /// Place a stone, resolve captures, and reject self-capture.
    ///
    /// Returns the number of opponent stones captured. On error the board is
    /// left exactly as it was.
    pub fn apply(&mut self, m: Move) -> Result<usize, MoveError> {
        let p = m.position;
        if !self.contains(p) {
            return Err(MoveError::OutOfBounds);
        }
        if self.get(p) != Color::None {
            return Err(MoveError::SpotNotEmpty);
        }
        self.set(p, m.player);

        let opponent = m.player.opponent();
        let mut captured = 0;
        for n in p.adjacent() {
            if self.contains(n) && self.get(n) == opponent {
                captured += self.clear_bounded(n);
            }
        }

        if captured == 0 && self.bounded_mask(p).is_some() {
            self.set(p, Color::None);
            return Err(MoveError::SelfCapture);
        }
        Ok(captured)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row {
                write!(f, "{} ", c.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Reads rows of `X`, `O` and `.` separated by newlines or `/`.
/// Spaces inside a row are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Color>> = Vec::new();
        for line in s.split(['\n', '/']) {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                row.push(match ch {
                    STONE_BLACK => Color::Black,
                    STONE_WHITE => Color::White,
                    EMPTY => Color::None,
                    other => return Err(BoardParseError::BadCell(other)),
                });
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        let size = rows.len();
        let mut board = Board::new(size);
        for (x, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardParseError::NotSquare {
                    row: x,
                    len: row.len(),
                    size,
                });
            }
            board.cells[x * size..(x + 1) * size].copy_from_slice(row);
        }
        Ok(board)
    }
}
