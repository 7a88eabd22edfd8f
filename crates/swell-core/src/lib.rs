//! Core types for the Swell shallow water solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the field identifiers and their staggering, the solver parameters,
//! and the error types shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod params;

pub use error::{KernelError, ParamError, StepError};
pub use field::{Centering, Field, FieldSet, FieldSetIter};
pub use id::TickId;
pub use params::SolverParams;
