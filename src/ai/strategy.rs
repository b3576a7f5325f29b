//! Move selection strategies, one per difficulty tier.
//!
//! Strategies are trait-based so tiers can be added without touching the
//! session:
//! - `RandomStrategy` (easy): any legal move
//! - `GreedyStrategy` (medium): capture, else push the leading piece
//! - `AggressiveStrategy` (hard): capture, else reach the home column, else
//!   push the leading piece already on the board

use crate::core::{Difficulty, GameRng, PieceId, Position};
use crate::rules::MoveCandidate;

/// Policy for picking one of the current player's legal moves.
pub trait MoveStrategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Pick a piece to move.
    ///
    /// Returns `None` only when `candidates` is empty.
    fn choose(&self, candidates: &[MoveCandidate], rng: &mut GameRng) -> Option<PieceId>;
}

/// Uniform random choice among legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&self, candidates: &[MoveCandidate], rng: &mut GameRng) -> Option<PieceId> {
        rng.choose(candidates).map(|c| c.piece)
    }
}

/// Capture when possible, otherwise move the furthest piece.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl MoveStrategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&self, candidates: &[MoveCandidate], _rng: &mut GameRng) -> Option<PieceId> {
        first_capture(candidates)
            .or_else(|| most_advanced(candidates.iter()))
            .map(|c| c.piece)
    }
}

/// Capture, then enter the home column, then advance the leader, then
/// anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AggressiveStrategy;

impl MoveStrategy for AggressiveStrategy {
    fn name(&self) -> &'static str {
        "aggressive"
    }

    fn choose(&self, candidates: &[MoveCandidate], _rng: &mut GameRng) -> Option<PieceId> {
        first_capture(candidates)
            .or_else(|| {
                candidates
                    .iter()
                    .find(|c| matches!(c.destination, Position::InColumn(_)))
            })
            .or_else(|| most_advanced(candidates.iter().filter(|c| !c.from.is_in_base())))
            .or_else(|| candidates.first())
            .map(|c| c.piece)
    }
}

fn first_capture(candidates: &[MoveCandidate]) -> Option<&MoveCandidate> {
    candidates.iter().find(|c| !c.captures.is_empty())
}

/// Highest progress; ties go to the earliest candidate.
fn most_advanced<'a>(candidates: impl Iterator<Item = &'a MoveCandidate>) -> Option<&'a MoveCandidate> {
    candidates.fold(None::<&'a MoveCandidate>, |best, c| match best {
        Some(b) if b.progress >= c.progress => Some(b),
        _ => Some(c),
    })
}

static EASY: RandomStrategy = RandomStrategy;
static MEDIUM: GreedyStrategy = GreedyStrategy;
static HARD: AggressiveStrategy = AggressiveStrategy;

/// Strategy for a difficulty tier. Human seats have none.
#[must_use]
pub fn strategy_for(difficulty: Difficulty) -> Option<&'static dyn MoveStrategy> {
    match difficulty {
        Difficulty::None => None,
        Difficulty::Easy => Some(&EASY),
        Difficulty::Medium => Some(&MEDIUM),
        Difficulty::Hard => Some(&HARD),
    }
}
