//! Outer-track occupancy.
//!
//! Maps each of the 52 track cells to the pieces standing on it. Home
//! columns and bases are private to a seat and never tracked here.
//!
//! A cell normally holds at most one piece. It can hold more when a player
//! stacks their own pieces, or when pieces share a safe cell, so each cell
//! is a small inline vector rather than an `Option`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::PieceId;
use crate::board::TRACK_LEN;

/// Pieces on one track cell, in arrival order.
pub type CellOccupants = SmallVec<[PieceId; 2]>;

/// Occupancy of the shared outer track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackOccupancy {
    cells: Vec<CellOccupants>,
}

impl Default for TrackOccupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackOccupancy {
    /// An empty track.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![CellOccupants::new(); TRACK_LEN as usize],
        }
    }

    /// Pieces on a cell. Empty for indices off the track.
    #[must_use]
    pub fn occupants(&self, index: u8) -> &[PieceId] {
        self.cells.get(index as usize).map_or(&[], |cell| cell.as_slice())
    }

    #[must_use]
    pub fn is_empty(&self, index: u8) -> bool {
        self.occupants(index).is_empty()
    }

    pub(crate) fn add(&mut self, index: u8, piece: PieceId) {
        if let Some(cell) = self.cells.get_mut(index as usize) {
            if !cell.contains(&piece) {
                cell.push(piece);
            }
        }
    }

    pub(crate) fn remove(&mut self, index: u8, piece: PieceId) {
        if let Some(cell) = self.cells.get_mut(index as usize) {
            cell.retain(|p| *p != piece);
        }
    }

    /// Iterate over occupied cells as `(index, occupants)`.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, &[PieceId])> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(i, cell)| (i as u8, cell.as_slice()))
    }
}
