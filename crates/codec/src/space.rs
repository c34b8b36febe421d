//! The action space as a whole: enumeration, lookup and masking.

use std::ops::Range;

use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::{self, ActionId};
use crate::constants::ACTION_SPACE_LEN;
use crate::error::MoveError;
use crate::r#move::Move;

/// Every action index, for iterating the space end to end.
pub const ACTION_SPACE: Range<ActionId> = 0..ACTION_SPACE_LEN;

// The space is small enough to decode once up front. `None` marks indices
// no on-board move occupies: slides and jumps that leave the board from
// their origin, and the two unused promotion slots per origin.
static ACTION_TABLE: Lazy<Vec<Option<Move>>> = Lazy::new(|| {
    ACTION_SPACE
        .map(|id| action::decode_strict(id).ok())
        .collect()
});

/// The fully decoded action space, indexed by action id.
pub fn action_table() -> &'static [Option<Move>] {
    &ACTION_TABLE
}

/// A boolean mask over the action space, the shape a policy's output is
/// filtered with before sampling.
#[derive(Clone)]
pub struct ActionMask {
    bits: [bool; ACTION_SPACE_LEN as usize],
}

impl ActionMask {
    pub fn new() -> Self {
        Self {
            bits: [false; ACTION_SPACE_LEN as usize],
        }
    }

    /// Encodes each move and sets its bit. The first move that does not
    /// fit the action space aborts the build.
    pub fn from_moves(moves: &[Move]) -> Result<Self, MoveError> {
        let mut mask = Self::new();
        for mv in moves {
            mask.set(action::encode(*mv)?);
        }
        Ok(mask)
    }

    pub fn set(&mut self, action: ActionId) {
        if (action as usize) < self.bits.len() {
            self.bits[action as usize] = true;
        }
    }

    pub fn is_set(&self, action: ActionId) -> bool {
        (action as usize) < self.bits.len() && self.bits[action as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// The set action ids, in ascending order.
    pub fn actions(&self) -> Vec<ActionId> {
        ACTION_SPACE.filter(|&id| self.bits[id as usize]).collect()
    }

    /// Uniformly samples one set index, or `None` on an empty mask.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<ActionId> {
        self.actions().choose(rng).copied()
    }
}

impl Default for ActionMask {
    fn default() -> Self {
        Self::new()
    }
}
