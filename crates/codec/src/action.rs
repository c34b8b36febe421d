//! The bidirectional mapping between moves and flat action indices.
//!
//! Each origin square owns a band of 73 move-type values: 56 slides
//! (8 directions, up to 7 steps each), 8 knight jumps, and 9 promotion
//! codes. An action index is `origin * 73 + move_type`.

use crate::constants::{
    ACTION_SPACE_LEN, DIRECTION_OFFSETS, KNIGHT_BASE, KNIGHT_OFFSETS, MAX_SLIDE_STEPS, MOVE_TYPES,
    PROMOTION_BASE, Promotion,
};
use crate::error::MoveError;
use crate::r#move::Move;
use crate::square::Square;

/// A flat index into the 4672-wide action space.
pub type ActionId = u16;

/// Encodes a move as `origin * 73 + move_type`.
///
/// Classification runs in priority order: promotion if a promotion piece
/// is present, then knight jump, then slide. A delta that fits none of
/// them, or a promotion combination without a slot in the 73-wide band,
/// fails with `InvalidMove`.
pub fn encode(mv: Move) -> Result<ActionId, MoveError> {
    if !mv.from.is_on_board() || !mv.to.is_on_board() || mv.from == mv.to {
        return Err(MoveError::InvalidMove(mv.to_uci()));
    }

    let dx = mv.to.file - mv.from.file;
    let dy = mv.to.rank - mv.from.rank;

    let move_type = match mv.promotion {
        Some(piece) => promotion_move_type(mv, piece, dx)?,
        None => plain_move_type(mv, dx, dy)?,
    };
    Ok(mv.from.index() * MOVE_TYPES + move_type)
}

fn promotion_move_type(mv: Move, piece: Promotion, dx: i8) -> Result<u16, MoveError> {
    // Relative capture direction. The rank delta is not inspected: the
    // scheme is side-to-move-relative and callers only construct forward
    // promotion shapes.
    let promo_move: u16 = match dx {
        -1 => 0,
        0 => 1,
        1 => 2,
        _ => return Err(MoveError::InvalidMove(mv.to_uci())),
    };
    let move_type = PROMOTION_BASE + piece as u16 * 4 + promo_move;
    // The 4-wide piece stride overflows the band for most knight and all
    // rook promotions; those combinations have no action index.
    if move_type >= MOVE_TYPES {
        return Err(MoveError::InvalidMove(mv.to_uci()));
    }
    Ok(move_type)
}

fn plain_move_type(mv: Move, dx: i8, dy: i8) -> Result<u16, MoveError> {
    if let Some(k) = knight_index(dx, dy) {
        return Ok(KNIGHT_BASE + k);
    }

    let direction: u16 = match (dx.signum(), dy.signum()) {
        (0, 1) => 0,
        (1, 1) => 1,
        (1, 0) => 2,
        (1, -1) => 3,
        (0, -1) => 4,
        (-1, -1) => 5,
        (-1, 0) => 6,
        (-1, 1) => 7,
        // (0, 0) cannot occur: from == to is rejected up front.
        _ => return Err(MoveError::InvalidMove(mv.to_uci())),
    };
    // A slide must be straight or diagonal; a (2, 3)-style delta matches
    // no unit direction.
    if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
        return Err(MoveError::InvalidMove(mv.to_uci()));
    }
    let num_steps = dx.abs().max(dy.abs()) as u16;
    Ok(direction * MAX_SLIDE_STEPS + (num_steps - 1))
}

fn knight_index(dx: i8, dy: i8) -> Option<u16> {
    match (dx, dy) {
        (1, 2) => Some(0),
        (2, 1) => Some(1),
        (2, -1) => Some(2),
        (1, -2) => Some(3),
        (-1, -2) => Some(4),
        (-2, -1) => Some(5),
        (-2, 1) => Some(6),
        (-1, 2) => Some(7),
        _ => None,
    }
}

/// Decodes an action index. The destination square may lie off the board;
/// use `decode_strict` to reject those.
pub fn decode(action: ActionId) -> Result<Move, MoveError> {
    if action >= ACTION_SPACE_LEN {
        return Err(MoveError::OutOfRange(action));
    }
    let from = Square::from_index(action / MOVE_TYPES);
    let move_type = action % MOVE_TYPES;

    if move_type >= PROMOTION_BASE {
        return decode_promotion(action, from, move_type - PROMOTION_BASE);
    }
    if move_type >= KNIGHT_BASE {
        let (dx, dy) = KNIGHT_OFFSETS[(move_type - KNIGHT_BASE) as usize];
        return Ok(Move::new(from, from.offset(dx, dy)));
    }
    let (ux, uy) = DIRECTION_OFFSETS[(move_type / MAX_SLIDE_STEPS) as usize];
    let steps = (move_type % MAX_SLIDE_STEPS + 1) as i8;
    Ok(Move::new(from, from.offset(ux * steps, uy * steps)))
}

fn decode_promotion(action: ActionId, from: Square, promo: u16) -> Result<Move, MoveError> {
    // promo is at most 8 here, so the 4-wide stride never reaches Rook.
    let piece = match promo / 4 {
        0 => Promotion::Queen,
        1 => Promotion::Bishop,
        _ => Promotion::Knight,
    };
    let dx = match promo % 4 {
        0 => -1,
        1 => 0,
        2 => 1,
        // move_types 67 and 71: slots no move encodes to.
        _ => {
            return Err(MoveError::InvalidMove(format!(
                "action {} hits an unused promotion slot",
                action
            )));
        }
    };
    Ok(Move::promoting(from, from.offset(dx, 1), piece))
}

/// Decodes an action index and requires the destination to stay on the
/// board, failing with `OutOfBoard` otherwise.
pub fn decode_strict(action: ActionId) -> Result<Move, MoveError> {
    let mv = decode(action)?;
    if !mv.to.is_on_board() {
        return Err(MoveError::OutOfBoard {
            action,
            file: mv.to.file,
            rank: mv.to.rank,
        });
    }
    Ok(mv)
}
