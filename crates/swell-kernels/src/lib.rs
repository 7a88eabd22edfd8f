//! The numerical kernels of the Swell shallow water scheme.
//!
//! Each kernel is one full pass over the grid: the flux computation,
//! the three tendency computations, and the three forward-Euler
//! updates. [`shallow_water_pipeline`] assembles them in the canonical
//! step order, and [`validate_pipeline`] checks a kernel list for
//! structural errors before a run starts.
//!
//! # Step order
//!
//! ```text
//! flux → u_tendency → update_u → v_tendency → update_v
//!      → h_tendency → update_h
//! ```
//!
//! The order is load-bearing. The V tendency runs after the U update,
//! so it reads the new U; the H tendency reads the fluxes from the
//! start of the step. This mixed-time-level splitting matches the
//! reference scheme and is pinned by regression tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod flux;
pub mod h_tendency;
pub mod kernel;
pub mod pipeline;
pub mod u_tendency;
pub mod update;
pub mod v_tendency;

pub use flux::FluxKernel;
pub use h_tendency::HTendencyKernel;
pub use kernel::Kernel;
pub use pipeline::{validate_pipeline, PipelineError, WriteConflict, WritePlan};
pub use u_tendency::UTendencyKernel;
pub use update::UpdateKernel;
pub use v_tendency::VTendencyKernel;

/// The seven kernels of one shallow water step, in canonical order.
pub fn shallow_water_pipeline() -> Vec<Box<dyn Kernel>> {
    vec![
        Box::new(FluxKernel),
        Box::new(UTendencyKernel),
        Box::new(UpdateKernel::u()),
        Box::new(VTendencyKernel),
        Box::new(UpdateKernel::v()),
        Box::new(HTendencyKernel),
        Box::new(UpdateKernel::h()),
    ]
}
