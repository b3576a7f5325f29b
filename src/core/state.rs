//! Game state: the single source of truth for one match.
//!
//! ## GameState
//!
//! - Seats and their pieces (pieces keyed by id for O(1) lookup)
//! - Whose turn it is, the pending dice value, the turn counter
//! - Status and winner
//! - Outer-track occupancy
//! - Move history
//!
//! Fields are only mutated by the rules engine; everything else reads through
//! accessors. Cloning is cheap (the history is an `im` vector), which is how
//! sessions take snapshots.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::{validate_players, PlayerConfig, MAX_PLAYERS, MIN_PLAYERS};
use super::error::{GameError, Result};
use super::occupancy::TrackOccupancy;
use super::piece::{Piece, PieceId, Position, PIECES_PER_PLAYER};
use super::player::{Player, PlayerId};
use super::rng::DIE_FACES;
use crate::board::{COLUMN_LEN, TRACK_LEN};

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// No players seated yet.
    #[default]
    Setup,
    Playing,
    Finished,
}

/// What the current player has to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    Setup,
    AwaitingRoll,
    AwaitingMove,
    Finished,
}

/// Complete state of one match.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) pieces: FxHashMap<PieceId, Piece>,
    pub(crate) current_player_index: usize,
    /// 0 until the current player rolls.
    pub(crate) dice_value: u8,
    pub(crate) turn_count: u32,
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) board: TrackOccupancy,
    pub(crate) last_move: Option<MoveRecord>,
    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Empty state in `Setup` status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat players from validated configs with every piece in base.
    ///
    /// The first seat starts; status is `Playing`.
    pub fn from_configs(configs: &[PlayerConfig]) -> Result<Self> {
        validate_players(configs)?;

        let players: Vec<Player> = PlayerId::all(configs.len())
            .zip(configs)
            .map(|(id, config)| {
                Player::new(
                    id,
                    config.name.trim(),
                    config.color.clone(),
                    config.is_ai,
                    config.effective_difficulty(),
                )
            })
            .collect();

        let pieces = players
            .iter()
            .flat_map(|player| player.pieces)
            .map(|id| (id, Piece::new(id)))
            .collect();

        Ok(Self {
            players,
            pieces,
            status: GameStatus::Playing,
            ..Self::default()
        })
    }

    /// Check a restored state and rebuild track occupancy from the piece
    /// positions.
    ///
    /// Snapshots come back through serde, so seat ids, piece ownership,
    /// positions and the turn fields are checked before play resumes.
    pub fn restore(mut self) -> Result<Self> {
        self.validate()?;
        let on_track: Vec<_> = self
            .all_pieces()
            .filter_map(|p| p.position.track_index().map(|index| (index, p.id)))
            .collect();
        self.board = TrackOccupancy::new();
        for (index, id) in on_track {
            self.board.add(index, id);
        }
        Ok(self)
    }

    /// Check that seats, pieces and turn fields agree with each other.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(GameError::InvalidSnapshot(reason));

        if self.status == GameStatus::Setup {
            if !self.players.is_empty() || !self.pieces.is_empty() {
                return invalid("setup state has seated players".to_string());
            }
            return Ok(());
        }

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len()) {
            return invalid(format!("{} players seated", self.players.len()));
        }
        if self.pieces.len() != self.players.len() * PIECES_PER_PLAYER {
            return invalid(format!("{} pieces for {} players", self.pieces.len(), self.players.len()));
        }
        for (seat, player) in PlayerId::all(self.players.len()).zip(&self.players) {
            if player.id != seat || player.pieces != PieceId::for_player(seat) {
                return invalid(format!("seat {} does not match its player or pieces", seat.number()));
            }
            for id in player.pieces {
                let Some(piece) = self.pieces.get(&id) else {
                    return invalid(format!("piece {id} is missing"));
                };
                if piece.id != id || piece.owner != seat {
                    return invalid(format!("piece {id} is filed under the wrong owner"));
                }
                let in_range = match piece.position {
                    Position::OnTrack(index) => index < TRACK_LEN,
                    Position::InColumn(slot) => slot < COLUMN_LEN,
                    Position::InBase | Position::Home => true,
                };
                if !in_range {
                    return invalid(format!("piece {id} is off the board at {}", piece.position));
                }
            }
        }

        if self.current_player_index >= self.players.len() {
            return invalid(format!("current player index {} out of range", self.current_player_index));
        }
        if self.dice_value > DIE_FACES {
            return invalid(format!("dice value {}", self.dice_value));
        }
        match (self.status, self.winner) {
            (GameStatus::Playing, None) => Ok(()),
            (GameStatus::Finished, Some(winner)) if winner.index() < self.players.len() => Ok(()),
            _ => invalid("winner does not match game status".to_string()),
        }
    }

    // === Players ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The player whose turn it is. `None` before setup.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player().map(|p| p.id)
    }

    // === Pieces ===

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// A player's pieces in board order.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = &Piece> {
        self.player(player)
            .into_iter()
            .flat_map(|p| p.pieces.iter())
            .filter_map(|id| self.pieces.get(id))
    }

    /// All pieces, ordered by seat then piece index.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.players
            .iter()
            .flat_map(|p| p.pieces.iter())
            .filter_map(|id| self.pieces.get(id))
    }

    /// Current player's pieces flagged as movable.
    #[must_use]
    pub fn movable_pieces(&self) -> Vec<PieceId> {
        self.current_player_id()
            .map(|player| {
                self.pieces_of(player)
                    .filter(|p| p.can_move)
                    .map(|p| p.id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Pieces on an outer-track cell.
    #[must_use]
    pub fn occupants(&self, track_index: u8) -> &[PieceId] {
        self.board.occupants(track_index)
    }

    #[must_use]
    pub fn board(&self) -> &TrackOccupancy {
        &self.board
    }

    /// Put a piece at an arbitrary position, keeping occupancy consistent.
    ///
    /// For setting up positions (puzzles, tutorials, tests). Does not check
    /// reachability, capture, or whose turn it is.
    pub fn place_piece(&mut self, id: PieceId, position: Position) -> Result<()> {
        let piece = self
            .pieces
            .get_mut(&id)
            .ok_or(GameError::UnknownPiece(id))?;

        if let Some(old) = piece.position.track_index() {
            self.board.remove(old, id);
        }
        piece.position = position;
        if let Some(new) = position.track_index() {
            self.board.add(new, id);
        }
        Ok(())
    }

    // === Turn ===

    /// Pending roll, 0 if the current player has not rolled.
    #[must_use]
    pub fn dice_value(&self) -> u8 {
        self.dice_value
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.status {
            GameStatus::Setup => TurnPhase::Setup,
            GameStatus::Finished => TurnPhase::Finished,
            GameStatus::Playing if self.dice_value == 0 => TurnPhase::AwaitingRoll,
            GameStatus::Playing => TurnPhase::AwaitingMove,
        }
    }

    // === History ===

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record.clone());
        self.last_move = Some(record);
    }
}
