//! Time-stepping driver for the Swell shallow water solver.
//!
//! [`RunConfig`] describes a run (grid extents, step count, physical
//! constants, initial condition); [`Simulation`] owns the fields and
//! drives the kernel pipeline through the configured number of
//! forward-Euler steps, reporting wall time and a throughput estimate
//! on completion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod init;
pub mod metrics;
pub mod sim;

pub use config::{ConfigError, RunConfig};
pub use init::InitialCondition;
pub use metrics::StepMetrics;
pub use sim::{throughput_gflops, RunReport, RunState, Simulation, FLOPS_PER_CELL_STEP};
