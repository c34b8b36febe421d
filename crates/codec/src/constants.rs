//! Constants describing the fixed action-space layout.

// --- Action-Space Dimensions ---
pub const BOARD_SIZE: i8 = 8;
pub const SQUARE_COUNT: u16 = 64;
/// Move-type values owned by each origin square.
pub const MOVE_TYPES: u16 = 73;
/// Total size of the discrete action space: 64 origins x 73 move types.
pub const ACTION_SPACE_LEN: u16 = SQUARE_COUNT * MOVE_TYPES;

/// Longest slide on an 8x8 board.
pub const MAX_SLIDE_STEPS: u16 = 7;
/// First move-type value of the knight band; everything below is a slide.
pub const KNIGHT_BASE: u16 = 8 * MAX_SLIDE_STEPS;
/// First move-type value of the promotion band.
pub const PROMOTION_BASE: u16 = KNIGHT_BASE + 8;

/// Unit direction vectors as (file, rank) deltas, clockwise from North.
pub const DIRECTION_OFFSETS: [(i8, i8); 8] = [
    (0, 1),   // N
    (1, 1),   // NE
    (1, 0),   // E
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (-1, 1),  // NW
];

/// Knight jump deltas as (file, rank), clockwise starting at (1, 2).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Pieces a pawn may promote to.
///
/// The discriminants feed the promotion band of the action space directly,
/// so the order Queen, Bishop, Knight, Rook is wire contract: any policy
/// trained against this numbering breaks if it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Promotion {
    Queen = 0,
    Bishop = 1,
    Knight = 2,
    Rook = 3,
}

impl Promotion {
    pub fn to_char(self) -> char {
        match self {
            Promotion::Queen => 'Q',
            Promotion::Bishop => 'B',
            Promotion::Knight => 'N',
            Promotion::Rook => 'R',
        }
    }

    /// Promotion letters in UCI strings are uppercase and case-sensitive.
    pub fn from_char(c: char) -> Option<Promotion> {
        match c {
            'Q' => Some(Promotion::Queen),
            'B' => Some(Promotion::Bishop),
            'N' => Some(Promotion::Knight),
            'R' => Some(Promotion::Rook),
            _ => None,
        }
    }
}
