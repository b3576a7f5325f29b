//! # rust-ludo
//!
//! A four-player Ludo rules engine with computer opponents.
//!
//! ## Design Principles
//!
//! 1. **Owned Sessions**: A [`GameSession`] owns one match. There is no
//!    global game; run as many sessions side by side as you like.
//!
//! 2. **Synchronous Core**: Every roll and move resolves immediately. The
//!    session reports what happened as [`GameEvent`]s, and [`Pacing`] tells a
//!    front end how long to animate each one.
//!
//! 3. **Typed Positions**: A piece is in its base, on the shared track, in
//!    its home column, or home. Illegal combinations cannot be written down.
//!
//! ## Modules
//!
//! - `board`: Track layout, entry and safe cells, grid coordinates
//! - `core`: Players, pieces, state, move records, RNG, configuration, errors
//! - `rules`: Movement, capture, win and turn rules
//! - `ai`: Move strategies per difficulty tier
//! - `session`: Turn orchestration, events and pacing

pub mod board;
pub mod core;
pub mod rules;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GameConfig, GameError, GameRng, GameState, GameStatus, MoveRecord, Piece,
    PieceId, Player, PlayerConfig, PlayerId, Position, Result, TurnPhase,
};

pub use crate::rules::MoveCandidate;

pub use crate::ai::{strategy_for, MoveStrategy};

pub use crate::session::{
    AiTurn, GameBuilder, GameEvent, GameSession, MoveOutcome, Pacing, RollOutcome,
};
