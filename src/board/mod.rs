//! Static board topology.
//!
//! The board is fixed: a 52-cell shared outer track, one 5-cell home column
//! per seat, and a 4-slot base per seat. Everything here is a lookup table or
//! a pure function over one; the rules engine treats track indices as opaque
//! integers and only the renderer cares about coordinates.

pub mod topology;

pub use topology::{
    entry_offset, home_base_coordinate, home_column_coordinate, home_column_start,
    home_coordinate, home_entry, is_safe_cell, track_coordinate, Coordinate,
    COLUMN_LEN, GRID_SIZE, HOME_COLUMN_BASE, SAFE_CELLS, SEAT_COUNT, TRACK_LEN,
};
