//! Board lookup tables on a 15x15 grid.
//!
//! ## Track numbering
//!
//! Track cells are numbered clockwise starting from seat 0's entry cell at
//! row 6, column 1. Seats enter the track 13 cells apart, so seat `n` enters
//! at `13 * n`. A piece leaves the track one step after the cell just
//! before its own entry cell (its "home entry") and turns into its home
//! column.
//!
//! ## Safe cells
//!
//! Every seat's entry cell plus the four star cells eight steps past each
//! entry. Entry cells stay safe whether or not that seat is occupied.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Number of cells on the shared outer track.
pub const TRACK_LEN: u8 = 52;

/// Number of cells in each home column.
pub const COLUMN_LEN: u8 = 5;

/// First absolute index used by home columns in the flat numbering.
///
/// Seat `n`'s column occupies `52 + 5n ..= 52 + 5n + 4`.
pub const HOME_COLUMN_BASE: u8 = 52;

/// Number of seats on the board.
pub const SEAT_COUNT: usize = 4;

/// Board width and height in grid cells.
pub const GRID_SIZE: u8 = 15;

/// Distance between consecutive seats' entry cells.
const ENTRY_SPACING: u8 = TRACK_LEN / SEAT_COUNT as u8;

/// Merged safe-cell set: entry cells and star cells.
pub const SAFE_CELLS: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// A cell on the rendered grid (row-major, origin top-left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

const fn c(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col)
}

const TRACK: [Coordinate; TRACK_LEN as usize] = [
    // Seat 0 quarter
    c(6, 1), c(6, 2), c(6, 3), c(6, 4), c(6, 5),
    c(5, 6), c(4, 6), c(3, 6), c(2, 6), c(1, 6), c(0, 6),
    c(0, 7), c(0, 8),
    // Seat 1 quarter
    c(1, 8), c(2, 8), c(3, 8), c(4, 8), c(5, 8),
    c(6, 9), c(6, 10), c(6, 11), c(6, 12), c(6, 13), c(6, 14),
    c(7, 14), c(8, 14),
    // Seat 2 quarter
    c(8, 13), c(8, 12), c(8, 11), c(8, 10), c(8, 9),
    c(9, 8), c(10, 8), c(11, 8), c(12, 8), c(13, 8), c(14, 8),
    c(14, 7), c(14, 6),
    // Seat 3 quarter
    c(13, 6), c(12, 6), c(11, 6), c(10, 6), c(9, 6),
    c(8, 5), c(8, 4), c(8, 3), c(8, 2), c(8, 1), c(8, 0),
    c(7, 0), c(6, 0),
];

const HOME_COLUMNS: [[Coordinate; COLUMN_LEN as usize]; SEAT_COUNT] = [
    [c(7, 1), c(7, 2), c(7, 3), c(7, 4), c(7, 5)],
    [c(1, 7), c(2, 7), c(3, 7), c(4, 7), c(5, 7)],
    [c(7, 13), c(7, 12), c(7, 11), c(7, 10), c(7, 9)],
    [c(13, 7), c(12, 7), c(11, 7), c(10, 7), c(9, 7)],
];

const HOME_BASES: [[Coordinate; 4]; SEAT_COUNT] = [
    [c(2, 2), c(2, 3), c(3, 2), c(3, 3)],
    [c(2, 11), c(2, 12), c(3, 11), c(3, 12)],
    [c(11, 11), c(11, 12), c(12, 11), c(12, 12)],
    [c(11, 2), c(11, 3), c(12, 2), c(12, 3)],
];

const HOME: Coordinate = c(7, 7);

/// Grid coordinate of an outer-track cell.
///
/// Returns `None` for indices outside `0..52`.
#[must_use]
pub fn track_coordinate(index: u8) -> Option<Coordinate> {
    TRACK.get(index as usize).copied()
}

/// Grid coordinate of a slot in a seat's home column.
#[must_use]
pub fn home_column_coordinate(player: PlayerId, slot: u8) -> Option<Coordinate> {
    HOME_COLUMNS
        .get(player.index())
        .and_then(|column| column.get(slot as usize))
        .copied()
}

/// Grid coordinate of a piece's resting slot in its base.
#[must_use]
pub fn home_base_coordinate(player: PlayerId, piece_index: u8) -> Option<Coordinate> {
    HOME_BASES
        .get(player.index())
        .and_then(|base| base.get(piece_index as usize))
        .copied()
}

/// Centre of the board, where finished pieces are drawn.
#[must_use]
pub const fn home_coordinate() -> Coordinate {
    HOME
}

/// Track index a seat's pieces enter at when leaving base.
///
/// # Panics
///
/// Panics if `player` is not one of the four seats.
#[must_use]
pub fn entry_offset(player: PlayerId) -> u8 {
    assert!(player.index() < SEAT_COUNT, "{player} is not a board seat");
    player.0 * ENTRY_SPACING
}

/// Last track cell a seat's pieces visit before their home column.
#[must_use]
pub fn home_entry(player: PlayerId) -> u8 {
    (entry_offset(player) + TRACK_LEN - 1) % TRACK_LEN
}

/// Offset of a seat's column inside the flat `52..72` numbering.
#[must_use]
pub fn home_column_start(player: PlayerId) -> u8 {
    player.0 * COLUMN_LEN
}

/// Whether pieces on this track cell are immune to capture.
#[must_use]
pub fn is_safe_cell(index: u8) -> bool {
    SAFE_CELLS.contains(&index)
}
