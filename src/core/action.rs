//! Move records for history tracking.
//!
//! Every successful move is recorded with the roll that produced it and any
//! capture it caused. The history feeds the presentation layer (last-move
//! highlight, move log) and makes finished matches easy to inspect in tests.

use serde::{Deserialize, Serialize};

use super::occupancy::CellOccupants;
use super::piece::{PieceId, Position};
use super::player::PlayerId;

/// A completed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The piece that moved.
    pub piece: PieceId,

    /// Dice value used.
    pub dice: u8,

    pub from: Position,
    pub to: Position,

    /// Opponent pieces sent back to base.
    pub captured: CellOccupants,

    /// Turn counter when the move was made.
    pub turn: u32,
}

impl MoveRecord {
    /// Whether this move sent any opponent back to base.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record_capture_flag() {
        let record = MoveRecord {
            player: PlayerId::new(0),
            piece: PieceId::new(PlayerId::new(0), 0),
            dice: 3,
            from: Position::OnTrack(4),
            to: Position::OnTrack(7),
            captured: CellOccupants::from_slice(&[PieceId::new(PlayerId::new(1), 2)]),
            turn: 5,
        };
        assert!(record.is_capture());

        let quiet = MoveRecord { captured: CellOccupants::new(), ..record };
        assert!(!quiet.is_capture());
    }
}
