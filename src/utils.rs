pub use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    time::Instant,
};
pub use thiserror::Error;
pub use itertools::Itertools;

/// The unit for measuring addresses and sizes. The original coursework
/// inputs are small decimal integers, but nothing in the simulation
/// depends on that, so we use the machine word everywhere.
pub type Address = usize;
