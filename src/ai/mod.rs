//! AI opponents.
//!
//! Each difficulty tier maps to a [`MoveStrategy`]. The session rolls for
//! the AI, builds the legal [`MoveCandidate`](crate::rules::MoveCandidate)
//! list and asks the seat's strategy to pick one.

pub mod strategy;

pub use strategy::{strategy_for, AggressiveStrategy, GreedyStrategy, MoveStrategy, RandomStrategy};
