//! Player identification and seat data.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are 0-based internally and shown 1-based
//! (`Player 1` .. `Player 4`) to match what people see on the board.
//!
//! ## Player
//!
//! Seat data fixed at setup: name, color, controller and the seat's four
//! piece ids.

use serde::{Deserialize, Serialize};

use super::piece::{PieceId, PIECES_PER_PLAYER};

/// Seat identifier.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat number as shown to people (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_ludo::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// AI difficulty tier. Human seats use `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    None,
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::None => "none",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Display color as `#RRGGBB`.
    pub color: String,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    pub difficulty: Difficulty,
    /// This seat's pieces in board order.
    pub pieces: [PieceId; PIECES_PER_PLAYER],
}

impl Player {
    /// Create a player with the seat's four pieces.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        color: impl Into<String>,
        is_ai: bool,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            is_ai,
            difficulty,
            pieces: PieceId::for_player(id),
        }
    }

    /// Whether a piece belongs to this player.
    #[must_use]
    pub fn owns(&self, piece: PieceId) -> bool {
        piece.owner() == self.id
    }
}
