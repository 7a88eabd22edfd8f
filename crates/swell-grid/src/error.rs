//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors from [`StaggeredGrid::new`](crate::StaggeredGrid::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// One or both extents are zero.
    EmptyGrid,
    /// An extent exceeds the maximum representable dimension.
    DimensionTooLarge {
        /// Which axis ("nx" or "ny").
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid extents must be nonzero"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}
