//! Pieces and their positions.
//!
//! A piece is always in exactly one of four places, modelled by
//! [`Position`]: its seat's base, a cell on the shared track, a slot in its
//! own home column, or home (finished). Everything the UI shows about a piece
//! (`is_home`, `is_safe`, its grid coordinate) is derived from the position.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::PlayerId;
use crate::board::{self, Coordinate, COLUMN_LEN, HOME_COLUMN_BASE, TRACK_LEN};

/// Number of pieces each seat plays with.
pub const PIECES_PER_PLAYER: usize = 4;

/// Progress value of a finished piece.
///
/// Entry cell is 1, the last track cell before the column is 52, column
/// slots are 53..=57.
pub const HOME_PROGRESS: u8 = TRACK_LEN + COLUMN_LEN + 1;

/// Piece identifier, dense across the board: `seat * 4 + piece index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// The `index`-th piece (0-based) of `owner`.
    #[must_use]
    pub const fn new(owner: PlayerId, index: u8) -> Self {
        Self(owner.0 * PIECES_PER_PLAYER as u8 + index)
    }

    /// All four piece ids of a seat, in board order.
    #[must_use]
    pub const fn for_player(owner: PlayerId) -> [PieceId; PIECES_PER_PLAYER] {
        [
            Self::new(owner, 0),
            Self::new(owner, 1),
            Self::new(owner, 2),
            Self::new(owner, 3),
        ]
    }

    #[must_use]
    pub const fn owner(self) -> PlayerId {
        PlayerId(self.0 / PIECES_PER_PLAYER as u8)
    }

    /// Index of this piece within its seat (0-based).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 % PIECES_PER_PLAYER as u8
    }
}

/// Pieces are labelled `"<seat number>-<piece number>"`, e.g. `1-1`.
impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.owner().number(), self.index() + 1)
    }
}

impl std::str::FromStr for PieceId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidPieceLabel(s.to_string());
        let (seat, piece) = s.split_once('-').ok_or_else(invalid)?;
        let seat: u8 = seat.trim().parse().map_err(|_| invalid())?;
        let piece: u8 = piece.trim().parse().map_err(|_| invalid())?;

        if !(1..=board::SEAT_COUNT as u8).contains(&seat)
            || !(1..=PIECES_PER_PLAYER as u8).contains(&piece)
        {
            return Err(invalid());
        }
        Ok(PieceId::new(PlayerId::new(seat - 1), piece - 1))
    }
}

/// Where a piece is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Position {
    /// Waiting in the seat's base.
    #[default]
    InBase,
    /// On the shared track at an absolute index in `0..52`.
    OnTrack(u8),
    /// In the owner's home column at slot `0..5`.
    InColumn(u8),
    /// Finished.
    Home,
}

impl Position {
    #[must_use]
    pub const fn is_in_base(self) -> bool {
        matches!(self, Position::InBase)
    }

    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }

    /// Track index if the piece is on the shared track.
    #[must_use]
    pub const fn track_index(self) -> Option<u8> {
        match self {
            Position::OnTrack(index) => Some(index),
            _ => None,
        }
    }

    /// Column slot if the piece is in its home column.
    #[must_use]
    pub const fn column_slot(self) -> Option<u8> {
        match self {
            Position::InColumn(slot) => Some(slot),
            _ => None,
        }
    }

    /// Flat board index: `0..52` on the track, `52..72` in a home column.
    ///
    /// Base and home have no flat index.
    #[must_use]
    pub fn absolute_index(self, owner: PlayerId) -> Option<u8> {
        match self {
            Position::OnTrack(index) => Some(index),
            Position::InColumn(slot) => {
                Some(HOME_COLUMN_BASE + board::home_column_start(owner) + slot)
            }
            Position::InBase | Position::Home => None,
        }
    }

    /// Steps travelled from the base along `owner`'s route.
    ///
    /// 0 in base, 1 on the entry cell, [`HOME_PROGRESS`] when finished.
    #[must_use]
    pub fn progress(self, owner: PlayerId) -> u8 {
        match self {
            Position::InBase => 0,
            Position::OnTrack(index) => {
                let entry = board::entry_offset(owner);
                (index + TRACK_LEN - entry) % TRACK_LEN + 1
            }
            Position::InColumn(slot) => TRACK_LEN + 1 + slot,
            Position::Home => HOME_PROGRESS,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::InBase => f.write_str("base"),
            Position::OnTrack(index) => write!(f, "track {index}"),
            Position::InColumn(slot) => write!(f, "column {slot}"),
            Position::Home => f.write_str("home"),
        }
    }
}

/// A piece on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub id: PieceId,
    pub owner: PlayerId,
    pub position: Position,
    /// Set after a roll when this piece has a legal destination.
    pub can_move: bool,
}

impl Piece {
    /// A fresh piece waiting in base.
    #[must_use]
    pub fn new(id: PieceId) -> Self {
        Self {
            id,
            owner: id.owner(),
            position: Position::InBase,
            can_move: false,
        }
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.position.is_home()
    }

    /// Whether the piece sits on a safe track cell.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.position.track_index().is_some_and(board::is_safe_cell)
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.position.progress(self.owner)
    }

    /// Grid coordinate the renderer should draw this piece at.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.position {
            Position::InBase => board::home_base_coordinate(self.owner, self.id.index()),
            Position::OnTrack(index) => board::track_coordinate(index),
            Position::InColumn(slot) => board::home_column_coordinate(self.owner, slot),
            Position::Home => Some(board::home_coordinate()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_id_layout() {
        let id = PieceId::new(PlayerId::new(2), 3);
        assert_eq!(id.0, 11);
        assert_eq!(id.owner(), PlayerId::new(2));
        assert_eq!(id.index(), 3);
        assert_eq!(id.to_string(), "3-4");
    }

    #[test]
    fn test_piece_id_parse() {
        let id: PieceId = "1-1".parse().unwrap();
        assert_eq!(id, PieceId::new(PlayerId::new(0), 0));

        let id: PieceId = "4-2".parse().unwrap();
        assert_eq!(id, PieceId::new(PlayerId::new(3), 1));

        assert!("0-1".parse::<PieceId>().is_err());
        assert!("1-5".parse::<PieceId>().is_err());
        assert!("12".parse::<PieceId>().is_err());
        assert!("a-b".parse::<PieceId>().is_err());
    }

    #[test]
    fn test_absolute_index() {
        let p1 = PlayerId::new(1);
        assert_eq!(Position::OnTrack(7).absolute_index(p1), Some(7));
        assert_eq!(Position::InColumn(0).absolute_index(p1), Some(57));
        assert_eq!(Position::InColumn(4).absolute_index(PlayerId::new(3)), Some(71));
        assert_eq!(Position::InBase.absolute_index(p1), None);
        assert_eq!(Position::Home.absolute_index(p1), None);
    }

    #[test]
    fn test_progress_counts_from_entry() {
        let p0 = PlayerId::new(0);
        let p2 = PlayerId::new(2);

        assert_eq!(Position::InBase.progress(p0), 0);
        assert_eq!(Position::OnTrack(0).progress(p0), 1);
        assert_eq!(Position::OnTrack(51).progress(p0), 52);
        assert_eq!(Position::OnTrack(26).progress(p2), 1);
        assert_eq!(Position::OnTrack(0).progress(p2), 27);
        assert_eq!(Position::OnTrack(25).progress(p2), 52);
        assert_eq!(Position::InColumn(0).progress(p2), 53);
        assert_eq!(Position::Home.progress(p2), HOME_PROGRESS);
    }

    #[test]
    fn test_piece_flags_follow_position() {
        let mut piece = Piece::new(PieceId::new(PlayerId::new(0), 1));
        assert!(!piece.is_home());
        assert!(!piece.is_safe());

        piece.position = Position::OnTrack(8);
        assert!(piece.is_safe());

        piece.position = Position::OnTrack(9);
        assert!(!piece.is_safe());

        piece.position = Position::Home;
        assert!(piece.is_home());
        assert!(!piece.is_safe());
    }

    #[test]
    fn test_piece_coordinate() {
        let mut piece = Piece::new(PieceId::new(PlayerId::new(0), 1));
        assert_eq!(piece.coordinate(), Some(Coordinate::new(2, 3)));

        piece.position = Position::OnTrack(0);
        assert_eq!(piece.coordinate(), Some(Coordinate::new(6, 1)));

        piece.position = Position::InColumn(4);
        assert_eq!(piece.coordinate(), Some(Coordinate::new(7, 5)));

        piece.position = Position::Home;
        assert_eq!(piece.coordinate(), Some(Coordinate::new(7, 7)));
    }

    #[test]
    fn test_position_serde_shape() {
        let json = serde_json::to_string(&Position::OnTrack(12)).unwrap();
        assert_eq!(json, r#"{"kind":"on_track","index":12}"#);

        let json = serde_json::to_string(&Position::Home).unwrap();
        assert_eq!(json, r#"{"kind":"home"}"#);
    }
}
