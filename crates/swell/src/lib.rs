//! Swell integrates the 2D shallow water equations forward in time on
//! a staggered, periodic grid with an explicit forward-Euler scheme.
//! It is built for performance studies of stencil-based PDE solvers
//! rather than for physical accuracy in any particular domain.
//!
//! The workspace splits along the natural seams of the problem:
//!
//! - [`core`]: field identifiers, solver parameters, shared errors;
//! - [`grid`]: the staggered torus geometry and its neighbor operators;
//! - [`state`]: the field store owning the nine `f32` buffers;
//! - [`kernels`]: the flux, tendency, and update passes and the
//!   pipeline validator;
//! - [`engine`]: run configuration, initial conditions, and the
//!   time-stepping driver.
//!
//! # Quickstart
//!
//! ```
//! use swell::prelude::*;
//!
//! let mut config = RunConfig::new(32, 32, 100);
//! config.init = InitialCondition::GaussianHump {
//!     depth: 1.0,
//!     amplitude: 0.1,
//!     width: 4.0,
//! };
//!
//! let mut sim = Simulation::new(config)?;
//! let report = sim.run()?;
//! assert_eq!(report.steps, 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use swell_core as core;
pub use swell_engine as engine;
pub use swell_grid as grid;
pub use swell_kernels as kernels;
pub use swell_state as state;

/// The types most runs need, in one import.
pub mod prelude {
    pub use swell_core::{Centering, Field, FieldSet, SolverParams, TickId};
    pub use swell_engine::{
        InitialCondition, RunConfig, RunReport, RunState, Simulation, StepMetrics,
    };
    pub use swell_grid::StaggeredGrid;
    pub use swell_kernels::{shallow_water_pipeline, validate_pipeline, Kernel};
    pub use swell_state::FieldStore;
}
