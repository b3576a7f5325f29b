//! Core engine types: players, pieces, state, move records, RNG, configuration and pacing.
//!
//! This module holds the game state store. The rules engine in `crate::rules`
//! is the only code that mutates it during play.

pub mod player;
pub mod piece;
pub mod rng;
pub mod pacing;
pub mod config;
pub mod error;
pub mod action;
pub mod occupancy;
pub mod state;

pub use player::{Difficulty, Player, PlayerId};
pub use piece::{Piece, PieceId, Position, HOME_PROGRESS, PIECES_PER_PLAYER};
pub use rng::{GameRng, DIE_FACES};
pub use pacing::Pacing;
pub use config::{validate_players, GameConfig, PlayerConfig, DEFAULT_COLORS, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{GameError, Result};
pub use action::MoveRecord;
pub use occupancy::{CellOccupants, TrackOccupancy};
pub use state::{GameState, GameStatus, TurnPhase};
