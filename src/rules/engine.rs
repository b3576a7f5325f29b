//! Movement, capture, win and turn rules.
//!
//! ## Route
//!
//! A piece leaves base onto its seat's entry cell on a 6, runs clockwise
//! around the shared track, turns into its own 5-slot home column one step
//! after its home entry cell, and finishes by landing exactly on home.
//! Overshooting home is not a legal move.
//!
//! ## Capture
//!
//! Landing on an unsafe track cell sends every opponent piece on it back to
//! base. A mover never ends up sharing an unsafe cell with an opponent. On a
//! safe cell pieces of any seat coexist.
//!
//! ## Turns
//!
//! A move made with a 6, or a move that captures, earns another roll. Any
//! other move, or a roll that leaves no legal move, passes the turn.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{self, COLUMN_LEN, TRACK_LEN};
use crate::core::{
    CellOccupants, GameError, GameState, GameStatus, Piece, PieceId, PlayerId, Position, Result,
    DIE_FACES,
};

/// A legal move for the current player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCandidate {
    pub piece: PieceId,
    pub from: Position,
    pub destination: Position,
    /// Opponent pieces this move would send back to base.
    pub captures: CellOccupants,
    /// Progress of the piece before moving.
    pub progress: u8,
}

/// Cells left until a piece on `track_index` steps into `player`'s column.
///
/// Counts forward around the ring to one step past the home entry cell, so a
/// piece on its own entry cell is 52 away and a piece on its home entry is 1
/// away.
#[must_use]
pub fn distance_to_home_column(track_index: u8, player: PlayerId) -> u8 {
    let home_entry = board::home_entry(player);
    if track_index <= home_entry {
        home_entry - track_index + 1
    } else {
        TRACK_LEN - track_index + home_entry + 1
    }
}

/// Where `piece` would land with `dice`, or `None` if it cannot move.
#[must_use]
pub fn legal_destination(piece: &Piece, dice: u8) -> Option<Position> {
    if !(1..=DIE_FACES).contains(&dice) {
        return None;
    }

    match piece.position {
        Position::InBase => {
            (dice == DIE_FACES).then(|| Position::OnTrack(board::entry_offset(piece.owner)))
        }
        Position::InColumn(slot) => column_destination(slot + dice),
        Position::OnTrack(index) => {
            let distance = distance_to_home_column(index, piece.owner);
            if distance <= dice {
                column_destination(dice - distance)
            } else {
                Some(Position::OnTrack((index + dice) % TRACK_LEN))
            }
        }
        Position::Home => None,
    }
}

fn column_destination(slot: u8) -> Option<Position> {
    match slot.cmp(&COLUMN_LEN) {
        std::cmp::Ordering::Less => Some(Position::InColumn(slot)),
        std::cmp::Ordering::Equal => Some(Position::Home),
        std::cmp::Ordering::Greater => None,
    }
}

/// Flag the current player's pieces that can move with `dice`.
///
/// Returns the movable pieces in board order.
pub fn update_movable_pieces(state: &mut GameState, dice: u8) -> Vec<PieceId> {
    let Some(pieces) = state.current_player().map(|p| p.pieces) else {
        return Vec::new();
    };

    let mut movable = Vec::new();
    for id in pieces {
        if let Some(piece) = state.pieces.get_mut(&id) {
            piece.can_move = legal_destination(piece, dice).is_some();
            if piece.can_move {
                movable.push(id);
            }
        }
    }
    movable
}

/// Clear every piece's `can_move` flag.
pub fn clear_movable_pieces(state: &mut GameState) {
    for piece in state.pieces.values_mut() {
        piece.can_move = false;
    }
}

/// The pieces `mover` would capture by landing on `destination`.
///
/// Only unsafe track cells capture, and they capture every piece there that
/// belongs to another seat.
#[must_use]
pub fn resolve_capture(state: &GameState, mover: PlayerId, destination: Position) -> CellOccupants {
    match destination.track_index() {
        Some(index) if !board::is_safe_cell(index) => state
            .occupants(index)
            .iter()
            .copied()
            .filter(|id| id.owner() != mover)
            .collect(),
        _ => CellOccupants::new(),
    }
}

/// Move a piece to `destination`, resolving any capture.
///
/// Returns the captured pieces, which are back in base with no progress.
/// Legality is the caller's job; see [`legal_destination`].
pub fn apply_move(state: &mut GameState, id: PieceId, destination: Position) -> Result<CellOccupants> {
    let (owner, from) = state
        .piece(id)
        .map(|p| (p.owner, p.position))
        .ok_or(GameError::UnknownPiece(id))?;

    let captured = resolve_capture(state, owner, destination);

    if let Some(old) = from.track_index() {
        state.board.remove(old, id);
    }
    for &victim in &captured {
        send_to_base(state, victim);
    }
    if let Some(new) = destination.track_index() {
        state.board.add(new, id);
    }
    if let Some(piece) = state.pieces.get_mut(&id) {
        piece.position = destination;
    }

    debug!(piece = %id, %from, to = %destination, captured = captured.len(), "piece moved");
    Ok(captured)
}

fn send_to_base(state: &mut GameState, id: PieceId) {
    if let Some(piece) = state.pieces.get_mut(&id) {
        if let Some(index) = piece.position.track_index() {
            state.board.remove(index, id);
        }
        piece.position = Position::InBase;
        piece.can_move = false;
    }
}

/// The first player with all four pieces home.
#[must_use]
pub fn check_win_condition(state: &GameState) -> Option<PlayerId> {
    state
        .players()
        .iter()
        .find(|player| {
            player
                .pieces
                .iter()
                .all(|id| state.piece(*id).is_some_and(Piece::is_home))
        })
        .map(|player| player.id)
}

/// Whether a move earns the same player another roll.
#[must_use]
pub fn grants_extra_turn(dice: u8, captured: bool) -> bool {
    dice == DIE_FACES || captured
}

/// Hand the turn to the next seat and clear the roll.
pub fn advance_turn(state: &mut GameState) {
    if state.players.is_empty() {
        return;
    }
    state.current_player_index = (state.current_player_index + 1) % state.players.len();
    state.turn_count += 1;
    state.dice_value = 0;
}

/// Store a roll for the current player and flag the pieces it can move.
pub(crate) fn record_roll(state: &mut GameState, dice: u8) -> Vec<PieceId> {
    state.dice_value = dice;
    update_movable_pieces(state, dice)
}

/// Keep the turn with the current player, awaiting a fresh roll.
pub(crate) fn grant_extra_turn(state: &mut GameState) {
    state.dice_value = 0;
}

/// Finish the game for `winner`.
pub(crate) fn declare_winner(state: &mut GameState, winner: PlayerId) {
    state.status = GameStatus::Finished;
    state.winner = Some(winner);
    state.dice_value = 0;
}

/// Legal moves for the current player with the pending roll.
///
/// Built from the `can_move` flags set by [`update_movable_pieces`], in
/// board order.
#[must_use]
pub fn move_candidates(state: &GameState) -> Vec<MoveCandidate> {
    let dice = state.dice_value();
    let Some(player) = state.current_player_id() else {
        return Vec::new();
    };

    state
        .pieces_of(player)
        .filter(|piece| piece.can_move)
        .filter_map(|piece| {
            let destination = legal_destination(piece, dice)?;
            Some(MoveCandidate {
                piece: piece.id,
                from: piece.position,
                destination,
                captures: resolve_capture(state, player, destination),
                progress: piece.progress(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PIECES_PER_PLAYER};

    fn p(n: u8) -> PlayerId {
        PlayerId::new(n)
    }

    fn piece_at(owner: PlayerId, position: Position) -> Piece {
        Piece {
            position,
            ..Piece::new(PieceId::new(owner, 0))
        }
    }

    fn state(players: usize) -> GameState {
        GameState::from_configs(&GameConfig::defaults(players).players).unwrap()
    }

    #[test]
    fn test_distance_to_home_column() {
        assert_eq!(distance_to_home_column(50, p(0)), 2);
        assert_eq!(distance_to_home_column(51, p(0)), 1);
        assert_eq!(distance_to_home_column(0, p(0)), 52);
        assert_eq!(distance_to_home_column(13, p(1)), 52);
        assert_eq!(distance_to_home_column(12, p(1)), 1);
        assert_eq!(distance_to_home_column(50, p(1)), 15);
    }

    #[test]
    fn test_base_needs_six() {
        for owner in PlayerId::all(4) {
            let piece = piece_at(owner, Position::InBase);
            for dice in 1..6 {
                assert_eq!(legal_destination(&piece, dice), None);
            }
            assert_eq!(
                legal_destination(&piece, 6),
                Some(Position::OnTrack(board::entry_offset(owner)))
            );
        }
    }

    #[test]
    fn test_track_wraps_around() {
        let piece = piece_at(p(1), Position::OnTrack(50));
        assert_eq!(legal_destination(&piece, 4), Some(Position::OnTrack(2)));
    }

    #[test]
    fn test_entering_home_column() {
        let piece = piece_at(p(0), Position::OnTrack(50));
        assert_eq!(legal_destination(&piece, 1), Some(Position::OnTrack(51)));
        assert_eq!(legal_destination(&piece, 2), Some(Position::InColumn(0)));
        assert_eq!(legal_destination(&piece, 3), Some(Position::InColumn(1)));

        let piece = piece_at(p(0), Position::OnTrack(51));
        assert_eq!(legal_destination(&piece, 6), Some(Position::Home));
    }

    #[test]
    fn test_column_overshoot_is_illegal() {
        let piece = piece_at(p(2), Position::InColumn(3));
        assert_eq!(legal_destination(&piece, 1), Some(Position::InColumn(4)));
        assert_eq!(legal_destination(&piece, 2), Some(Position::Home));
        assert_eq!(legal_destination(&piece, 3), None);
    }

    #[test]
    fn test_home_and_bad_dice_never_move() {
        let piece = piece_at(p(0), Position::Home);
        assert_eq!(legal_destination(&piece, 1), None);

        let piece = piece_at(p(0), Position::OnTrack(4));
        assert_eq!(legal_destination(&piece, 0), None);
        assert_eq!(legal_destination(&piece, 7), None);
    }

    #[test]
    fn test_update_and_clear_movable() {
        let mut state = state(2);
        let first = PieceId::new(p(0), 0);
        state.place_piece(first, Position::OnTrack(10)).unwrap();

        let movable = update_movable_pieces(&mut state, 3);
        assert_eq!(movable, vec![first]);
        assert!(state.piece(first).unwrap().can_move);

        let movable = update_movable_pieces(&mut state, 6);
        assert_eq!(movable.len(), PIECES_PER_PLAYER);

        clear_movable_pieces(&mut state);
        assert!(state.all_pieces().all(|p| !p.can_move));
    }

    #[test]
    fn test_movable_only_for_current_player() {
        let mut state = state(2);
        update_movable_pieces(&mut state, 6);
        assert!(state.pieces_of(p(1)).all(|p| !p.can_move));
    }

    #[test]
    fn test_resolve_capture_rules() {
        let mut state = state(2);
        let victim = PieceId::new(p(1), 0);
        state.place_piece(victim, Position::OnTrack(20)).unwrap();

        assert_eq!(resolve_capture(&state, p(0), Position::OnTrack(20)).as_slice(), &[victim]);
        assert!(resolve_capture(&state, p(1), Position::OnTrack(20)).is_empty());
        assert!(resolve_capture(&state, p(0), Position::OnTrack(19)).is_empty());
        assert!(resolve_capture(&state, p(0), Position::InColumn(2)).is_empty());

        state.place_piece(victim, Position::OnTrack(21)).unwrap();
        assert!(resolve_capture(&state, p(0), Position::OnTrack(21)).is_empty());
    }

    #[test]
    fn test_stacks_on_unsafe_cells_are_captured() {
        let mut state = state(2);
        let first = PieceId::new(p(1), 0);
        let second = PieceId::new(p(1), 1);
        state.place_piece(first, Position::OnTrack(30)).unwrap();
        state.place_piece(second, Position::OnTrack(30)).unwrap();
        assert_eq!(
            resolve_capture(&state, p(0), Position::OnTrack(30)).as_slice(),
            &[first, second]
        );

        // A safe cell protects a stack too
        state.place_piece(first, Position::OnTrack(34)).unwrap();
        state.place_piece(second, Position::OnTrack(34)).unwrap();
        assert!(resolve_capture(&state, p(0), Position::OnTrack(34)).is_empty());
    }

    #[test]
    fn test_apply_move_clears_whole_stack() {
        let mut state = state(3);
        let hunter = PieceId::new(p(0), 0);
        let friend = PieceId::new(p(0), 1);
        let victims = [PieceId::new(p(1), 0), PieceId::new(p(1), 1), PieceId::new(p(2), 3)];
        state.place_piece(hunter, Position::OnTrack(28)).unwrap();
        state.place_piece(friend, Position::OnTrack(30)).unwrap();
        for victim in victims {
            state.place_piece(victim, Position::OnTrack(30)).unwrap();
        }

        let captured = apply_move(&mut state, hunter, Position::OnTrack(30)).unwrap();

        assert_eq!(captured.as_slice(), &victims);
        for victim in victims {
            assert_eq!(state.piece(victim).unwrap().position, Position::InBase);
        }
        assert_eq!(state.occupants(30), &[friend, hunter]);
    }

    #[test]
    fn test_apply_move_captures() {
        let mut state = state(2);
        let hunter = PieceId::new(p(0), 0);
        let victim = PieceId::new(p(1), 2);
        state.place_piece(hunter, Position::OnTrack(15)).unwrap();
        state.place_piece(victim, Position::OnTrack(18)).unwrap();

        let captured = apply_move(&mut state, hunter, Position::OnTrack(18)).unwrap();

        assert_eq!(captured.as_slice(), &[victim]);
        assert_eq!(state.piece(victim).unwrap().position, Position::InBase);
        assert_eq!(state.piece(hunter).unwrap().position, Position::OnTrack(18));
        assert_eq!(state.occupants(18), &[hunter]);
        assert!(state.occupants(15).is_empty());
    }

    #[test]
    fn test_apply_move_into_column_leaves_track() {
        let mut state = state(2);
        let id = PieceId::new(p(0), 1);
        state.place_piece(id, Position::OnTrack(50)).unwrap();

        assert!(apply_move(&mut state, id, Position::InColumn(1)).unwrap().is_empty());
        assert!(state.occupants(50).is_empty());
        assert_eq!(state.board().occupied().count(), 0);
    }

    #[test]
    fn test_apply_move_unknown_piece() {
        let mut state = state(2);
        let ghost = PieceId::new(p(3), 0);
        assert!(matches!(
            apply_move(&mut state, ghost, Position::OnTrack(1)),
            Err(GameError::UnknownPiece(_))
        ));
    }

    #[test]
    fn test_check_win_condition() {
        let mut state = state(3);
        assert_eq!(check_win_condition(&state), None);

        for id in PieceId::for_player(p(1)) {
            state.place_piece(id, Position::Home).unwrap();
        }
        state.place_piece(PieceId::new(p(0), 0), Position::OnTrack(5)).unwrap();

        assert_eq!(check_win_condition(&state), Some(p(1)));
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = state(3);
        state.dice_value = 4;

        advance_turn(&mut state);
        assert_eq!(state.current_player_index(), 1);
        assert_eq!(state.turn_count(), 1);
        assert_eq!(state.dice_value(), 0);

        advance_turn(&mut state);
        advance_turn(&mut state);
        assert_eq!(state.current_player_index(), 0);
        assert_eq!(state.turn_count(), 3);
    }

    #[test]
    fn test_extra_turn_rule() {
        assert!(grants_extra_turn(6, false));
        assert!(grants_extra_turn(2, true));
        assert!(!grants_extra_turn(5, false));
    }

    #[test]
    fn test_move_candidates_report_captures() {
        let mut state = state(2);
        let hunter = PieceId::new(p(0), 0);
        let victim = PieceId::new(p(1), 0);
        state.place_piece(hunter, Position::OnTrack(2)).unwrap();
        state.place_piece(victim, Position::OnTrack(5)).unwrap();
        state.dice_value = 3;
        update_movable_pieces(&mut state, 3);

        let candidates = move_candidates(&state);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].piece, hunter);
        assert_eq!(candidates[0].destination, Position::OnTrack(5));
        assert_eq!(candidates[0].captures.as_slice(), &[victim]);
        assert_eq!(candidates[0].progress, 3);
    }
}
