//! Benchmark profiles for the Swell shallow water solver.
//!
//! Provides pre-built [`RunConfig`] profiles shared by the criterion
//! benches:
//!
//! - [`reference_profile`]: 256×256 grid, the standard stencil
//!   performance case;
//! - [`stress_profile`]: 1024×1024 grid for memory-bound behavior.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swell_engine::{InitialCondition, RunConfig};

/// 256×256 grid with a centered Gaussian hump.
///
/// Small enough to stay cache-resident on most machines, large enough
/// that per-step overhead is negligible against the stencil work.
pub fn reference_profile(steps: u64) -> RunConfig {
    let mut config = RunConfig::new(256, 256, steps);
    config.init = InitialCondition::GaussianHump {
        depth: 1.0,
        amplitude: 0.1,
        width: 16.0,
    };
    config
}

/// 1024×1024 grid, exceeding typical L2 capacity per field.
pub fn stress_profile(steps: u64) -> RunConfig {
    let mut config = RunConfig::new(1024, 1024, steps);
    config.init = InitialCondition::GaussianHump {
        depth: 1.0,
        amplitude: 0.1,
        width: 64.0,
    };
    config
}
