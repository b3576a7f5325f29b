//! Engine errors.
//!
//! Two families share one enum: setup errors reject a malformed player
//! configuration, and illegal-move errors reject an action that does not fit
//! the current turn. Neither family mutates game state.

use thiserror::Error;

use super::piece::PieceId;
use super::player::PlayerId;

/// Errors returned by setup and turn operations.
#[derive(Error, Debug)]
pub enum GameError {
    // === Setup ===
    #[error("a game needs 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("player {seat} has an empty name")]
    EmptyPlayerName { seat: u8 },

    #[error("player {seat} has an invalid color {color:?} (expected #RRGGBB)")]
    InvalidColor { seat: u8, color: String },

    #[error("color {0} is used by more than one player")]
    DuplicateColor(String),

    #[error("AI player {seat} has no difficulty")]
    MissingDifficulty { seat: u8 },

    #[error("failed to parse game config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("inconsistent game state: {0}")]
    InvalidSnapshot(String),

    // === Turn ===
    #[error("no game in progress")]
    GameNotInProgress,

    #[error("roll the dice before moving")]
    DiceNotRolled,

    #[error("dice already rolled a {0}, move a piece first")]
    AlreadyRolled(u8),

    #[error("dice value must be between 1 and 6, got {0}")]
    InvalidDiceValue(u8),

    #[error("unknown piece {0}")]
    UnknownPiece(PieceId),

    #[error("invalid piece label {0:?}")]
    InvalidPieceLabel(String),

    #[error("piece {piece} belongs to {owner}, not the current player")]
    NotCurrentPlayersPiece { piece: PieceId, owner: PlayerId },

    #[error("piece {0} cannot move with this roll")]
    PieceCannotMove(PieceId),

    #[error("{0} is not an AI player")]
    NotAiTurn(PlayerId),

    #[error("{0}'s strategy did not pick a move")]
    NoMoveChosen(PlayerId),
}

impl GameError {
    /// Whether this error rejects a turn action rather than a setup.
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        !self.is_setup_error()
    }

    /// Whether this error rejects a game configuration.
    #[must_use]
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            GameError::InvalidPlayerCount(_)
                | GameError::EmptyPlayerName { .. }
                | GameError::InvalidColor { .. }
                | GameError::DuplicateColor(_)
                | GameError::MissingDifficulty { .. }
                | GameError::Config(_)
                | GameError::InvalidSnapshot(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(GameError::InvalidPlayerCount(5).is_setup_error());
        assert!(!GameError::InvalidPlayerCount(5).is_illegal_move());
        assert!(GameError::DiceNotRolled.is_illegal_move());
        assert!(GameError::PieceCannotMove(PieceId(0)).is_illegal_move());
    }

    #[test]
    fn test_messages_name_the_piece() {
        let err = GameError::PieceCannotMove(PieceId::new(PlayerId::new(1), 2));
        assert_eq!(err.to_string(), "piece 2-3 cannot move with this roll");

        let err = GameError::NotCurrentPlayersPiece {
            piece: PieceId::new(PlayerId::new(0), 0),
            owner: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "piece 1-1 belongs to Player 1, not the current player");
    }
}
