//! Check, checkmate and stalemate reporting for the side to move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Position};

/// Game status from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckStatus {
    /// The side the status describes
    pub side: Color,
    pub in_check: bool,
    /// In check with no walk move for any figure
    pub checkmate: bool,
    /// Not in check with no walk move for any figure
    pub stalemate: bool,
}

impl Position {
    /// Check status of the side to move.
    #[must_use]
    pub fn check_status(&self) -> CheckStatus {
        let side = self.side_to_move;
        let in_check = self.checks.is_check();
        let stuck = self.figures_of(side).all(|fig| fig.walk_moves().is_empty());
        CheckStatus {
            side,
            in_check,
            checkmate: in_check && stuck,
            stalemate: !in_check && stuck,
        }
    }

    /// Returns true if the side to move is checkmated
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.check_status().checkmate
    }

    /// Returns true if the side to move has no move and is not in check
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.check_status().stalemate
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.checkmate {
            write!(f, "{} is checkmated", self.side)
        } else if self.stalemate {
            write!(f, "{} is stalemated", self.side)
        } else if self.in_check {
            write!(f, "{} is in check", self.side)
        } else {
            write!(f, "{} to move", self.side)
        }
    }
}
