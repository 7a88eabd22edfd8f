//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the input for constructing a [`Simulation`];
//! [`validate()`](RunConfig::validate) checks structural invariants at
//! startup, before any field memory is allocated.
//!
//! [`Simulation`]: crate::Simulation

use std::error::Error;
use std::fmt;

use swell_core::{ParamError, SolverParams};
use swell_grid::{GridError, StaggeredGrid};
use swell_kernels::PipelineError;

use crate::init::InitialCondition;

/// Errors detected while constructing or validating a run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid extents are invalid.
    Grid(GridError),
    /// A solver parameter failed validation.
    Param(ParamError),
    /// Kernel pipeline validation failed.
    Pipeline(PipelineError),
    /// The run would perform zero steps.
    ZeroSteps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Param(e) => write!(f, "parameter: {e}"),
            Self::Pipeline(e) => write!(f, "pipeline: {e}"),
            Self::ZeroSteps => write!(f, "step count must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Param(e) => Some(e),
            Self::Pipeline(e) => Some(e),
            Self::ZeroSteps => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

impl From<PipelineError> for ConfigError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

/// Complete configuration for one simulation run.
///
/// Grid extents, step count, the physical constants, and the initial
/// condition are fixed before the run starts; the driver treats them
/// as read-only.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Grid extent in the i (x) direction.
    pub nx: u32,
    /// Grid extent in the j (y) direction.
    pub ny: u32,
    /// Number of forward-Euler steps to take.
    pub steps: u64,
    /// Physical and numerical constants.
    pub params: SolverParams,
    /// How the fields are populated before the first step.
    pub init: InitialCondition,
}

impl RunConfig {
    /// Configuration with default parameters and a flat resting fluid.
    pub fn new(nx: u32, ny: u32, steps: u64) -> Self {
        Self {
            nx,
            ny,
            steps,
            params: SolverParams::default(),
            init: InitialCondition::Rest { depth: 1.0 },
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Constructing the grid performs the extent checks.
        StaggeredGrid::new(self.nx, self.ny)?;
        self.params.validate()?;
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(RunConfig::new(16, 16, 100).validate().is_ok());
    }

    #[test]
    fn zero_extent_rejected() {
        let result = RunConfig::new(0, 16, 100).validate();
        assert!(matches!(result, Err(ConfigError::Grid(GridError::EmptyGrid))));
    }

    #[test]
    fn zero_steps_rejected() {
        let result = RunConfig::new(16, 16, 0).validate();
        assert!(matches!(result, Err(ConfigError::ZeroSteps)));
    }

    #[test]
    fn bad_dt_rejected() {
        let mut config = RunConfig::new(16, 16, 100);
        config.params.dt = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Param(_))));
    }

    #[test]
    fn config_error_sources_chain() {
        use std::error::Error;
        let err = ConfigError::Grid(GridError::EmptyGrid);
        assert!(err.source().is_some());
    }
}
