//! Events emitted by a session as turns resolve.
//!
//! The engine resolves every action synchronously; events are how the
//! presentation layer learns what happened, in order, so it can animate and
//! notify. Drain them with [`GameSession::drain_events`](super::GameSession::drain_events).

use serde::{Deserialize, Serialize};

use crate::core::{PieceId, PlayerId, Position};

/// Why a player keeps the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraTurnReason {
    RolledSix,
    Captured,
}

/// Something that happened in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        players: usize,
    },
    AiThinking {
        player: PlayerId,
    },
    DiceRolled {
        player: PlayerId,
        value: u8,
        movable: Vec<PieceId>,
    },
    /// The roll left no legal move.
    TurnPassed {
        player: PlayerId,
        dice: u8,
    },
    AiDecided {
        player: PlayerId,
        piece: PieceId,
    },
    PieceMoved {
        player: PlayerId,
        piece: PieceId,
        from: Position,
        to: Position,
    },
    PieceCaptured {
        piece: PieceId,
        by: PieceId,
    },
    ExtraTurn {
        player: PlayerId,
        reason: ExtraTurnReason,
    },
    TurnAdvanced {
        next: PlayerId,
        turn_count: u32,
    },
    GameWon {
        player: PlayerId,
    },
    GameReset,
}

impl GameEvent {
    /// One-line description for notifications.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            GameEvent::GameStarted { players } => {
                format!("Game started with {players} players. Roll the dice to begin.")
            }
            GameEvent::AiThinking { player } => format!("{player} is thinking..."),
            GameEvent::DiceRolled { player, value, movable } if movable.is_empty() => {
                format!("{player} rolled {value}.")
            }
            GameEvent::DiceRolled { player, value, .. } => {
                format!("{player} rolled {value}! Pick a highlighted piece to move.")
            }
            GameEvent::TurnPassed { player, dice } => {
                format!("No available moves for {player} with a {dice}. Turn passes.")
            }
            GameEvent::AiDecided { player, piece } => format!("{player} moves piece {piece}."),
            GameEvent::PieceMoved { piece, from, to, .. } => {
                format!("Piece {piece} moved from {from} to {to}.")
            }
            GameEvent::PieceCaptured { piece, by } => {
                format!("Piece {by} captured {}'s piece {piece}!", piece.owner())
            }
            GameEvent::ExtraTurn { player, reason } => match reason {
                ExtraTurnReason::RolledSix => format!("{player} rolled a 6 and goes again."),
                ExtraTurnReason::Captured => format!("{player} captured and goes again."),
            },
            GameEvent::TurnAdvanced { next, .. } => format!("{next}'s turn."),
            GameEvent::GameWon { player } => format!("{player} wins the game!"),
            GameEvent::GameReset => "Game reset.".to_string(),
        }
    }
}
