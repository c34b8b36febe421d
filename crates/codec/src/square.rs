//! Board coordinates and their algebraic notation.

use std::fmt;

use crate::constants::BOARD_SIZE;
use crate::error::MoveError;

/// A board coordinate as a (file, rank) pair, `a1` being (0, 0).
///
/// Coordinates are signed: lenient decoding may hand back squares outside
/// `[0, 8)` when an action runs off the board edge, and callers are
/// expected to check `is_on_board` before trusting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    pub fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Builds the square for an origin index in `[0, 64)`.
    pub fn from_index(index: u16) -> Self {
        Self {
            file: (index / BOARD_SIZE as u16) as i8,
            rank: (index % BOARD_SIZE as u16) as i8,
        }
    }

    /// The origin index, `file * 8 + rank`. Only meaningful on the board.
    pub fn index(self) -> u16 {
        self.file as u16 * BOARD_SIZE as u16 + self.rank as u16
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    /// Translates by a (file, rank) delta without bounds checking.
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            file: self.file + dx,
            rank: self.rank + dy,
        }
    }

    /// Parses algebraic notation: exactly two characters in `[a-h][1-8]`.
    pub fn from_algebraic(text: &str) -> Result<Self, MoveError> {
        let mut chars = text.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => (letter, digit),
            _ => {
                return Err(MoveError::MalformedNotation(format!(
                    "square '{}' must be two characters",
                    text
                )));
            }
        };
        let file = match letter {
            'a'..='h' => (letter as u8 - b'a') as i8,
            _ => {
                return Err(MoveError::MalformedNotation(format!(
                    "file '{}' must be a to h",
                    letter
                )));
            }
        };
        let rank = match digit {
            '1'..='8' => (digit as u8 - b'1') as i8,
            _ => {
                return Err(MoveError::MalformedNotation(format!(
                    "rank '{}' must be 1 to 8",
                    digit
                )));
            }
        };
        Ok(Self { file, rank })
    }

    /// Formats as algebraic notation. Defined for on-board squares.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}", self.to_algebraic())
        } else {
            // Lenient decode can leave the board; keep those printable.
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}
