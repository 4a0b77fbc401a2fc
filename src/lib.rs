//! Welcome to `mallocsim`!
//!
//! `mallocsim` replays a static batch of process allocation requests
//! against a fixed list of free memory regions under one or more of the
//! classic contiguous-allocation policies: First-Fit, Best-Fit and
//! Worst-Fit. Each run produces a deterministic placement log.

pub mod engine;
pub mod parse;
pub mod policy;
pub mod utils;
mod memory;

pub use crate::utils::*;
pub use crate::{
    engine::{run, simulate},
    parse::{read_regions, read_requests, ParseError},
    policy::Policy,
};

/// One process's allocation demand. A [`Request`] is immutable: it is
/// constructed from parsed input and consumed exactly once by the
/// engine, which either places it inside a [`Region`] or reports it
/// unallocated.
///
/// The `id` is externally assigned. The engine does not require it to
/// be unique, but the log format only makes sense when it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub id:     Address,
    pub size:   Address,
}

/// A contiguous free memory range `[start, end]`, sub-allocated with a
/// bump cursor.
///
/// The bounds never change after construction. Every successful
/// placement records where it started ([`last_placement_start`]) and
/// advances the cursor by the request's size, so the pair
/// `(last_placement_start, cursor)` always delimits the most recent
/// placement.
///
/// > ***ATTENTION:*** [`place`] does *not* check that the request fits.
/// > Callers must consult [`available_space`] first; violating this
/// > pushes the cursor past `end` and corrupts the region's invariant.
///
/// [`place`]: Region::place
/// [`available_space`]: Region::available_space
/// [`last_placement_start`]: Region::last_placement_start
#[derive(Clone, Debug)]
pub struct Region {
    start:                  Address,
    end:                    Address,
    cursor:                 Address,
    last_placement_start:   Address,
    placed:                 Vec<Request>,
}
