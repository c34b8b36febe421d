//! The error type shared by every fallible codec operation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move's delta fits none of the three move-type classes, or the
    /// promotion combination has no slot in the 73-wide move-type band.
    #[error("move does not fit the action space: {0}")]
    InvalidMove(String),

    #[error("action {0} is outside the action space")]
    OutOfRange(u16),

    #[error("malformed notation: {0}")]
    MalformedNotation(String),

    /// Strict decoding only: the destination square left the board.
    #[error("action {action} leaves the board at file {file}, rank {rank}")]
    OutOfBoard { action: u16, file: i8, rank: i8 },
}
