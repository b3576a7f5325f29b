//! Match sessions: turn sequencing, events and presentation pacing.

pub mod events;
pub mod game;
pub mod pacing;

pub use events::{ExtraTurnReason, GameEvent};
pub use game::{AiTurn, GameBuilder, GameSession, MoveOutcome, RollOutcome};
pub use crate::core::Pacing;
pub use pacing::ScheduledEvent;
