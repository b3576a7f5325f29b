//! Ludo rules over [`GameState`](crate::core::GameState).
//!
//! Pure functions for legality and capture, plus the few mutating
//! operations (`apply_move`, `update_movable_pieces`, `advance_turn`) the
//! session sequences into turns. Nothing here is random or asynchronous.

pub mod engine;

pub use engine::{
    advance_turn, apply_move, check_win_condition, clear_movable_pieces,
    distance_to_home_column, grants_extra_turn, legal_destination, move_candidates,
    resolve_capture, update_movable_pieces, MoveCandidate,
};
pub(crate) use engine::{declare_winner, grant_extra_turn, record_roll};
