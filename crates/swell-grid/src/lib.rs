//! Staggered periodic grid geometry for Swell simulations.
//!
//! This crate defines [`StaggeredGrid`] — the pure index arithmetic of
//! an Arakawa-style staggered grid on a 2D torus. It knows nothing
//! about field values: every operator maps a position `(i, j)` to the
//! position (or flat rank) of one of its logical neighbors, with both
//! axes wrapping periodically.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod staggered;

pub use error::GridError;
pub use staggered::StaggeredGrid;
