//! Error types shared across the Swell workspace.

use std::error::Error;
use std::fmt;

use crate::field::Field;

/// A solver parameter failed validation.
///
/// Produced by [`SolverParams::validate`](crate::params::SolverParams::validate)
/// before any field memory is allocated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamError {
    /// Name of the offending parameter.
    pub name: &'static str,
    /// The rejected value.
    pub value: f32,
    /// What the parameter must satisfy.
    pub requirement: &'static str,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parameter {} must be {}, got {}",
            self.name, self.requirement, self.value
        )
    }
}

impl Error for ParamError {}

/// Errors from an individual kernel's `apply()`.
///
/// The kernels themselves are total over floating-point values; the
/// only failure is structural — a field buffer whose length does not
/// match the grid it is being traversed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// A field buffer's length disagrees with the grid extent.
    ShapeMismatch {
        /// The offending field.
        field: Field,
        /// Cell count the grid expects.
        expected: usize,
        /// Length the buffer actually has.
        actual: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "field {field} has {actual} elements, grid expects {expected}"
            ),
        }
    }
}

impl Error for KernelError {}

/// Errors from the time-stepping driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A kernel returned an error during execution.
    KernelFailed {
        /// Name of the failing kernel.
        name: String,
        /// The underlying kernel error.
        reason: KernelError,
    },
    /// `step()` or `run()` was called outside the Running state.
    NotRunning {
        /// The state the driver was actually in.
        state: &'static str,
    },
    /// `start()` was called after the driver had already left Idle.
    AlreadyStarted {
        /// The state the driver was actually in.
        state: &'static str,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KernelFailed { name, reason } => {
                write!(f, "kernel '{name}' failed: {reason}")
            }
            Self::NotRunning { state } => {
                write!(f, "driver is not running (state: {state})")
            }
            Self::AlreadyStarted { state } => {
                write!(f, "driver was already started (state: {state})")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::KernelFailed { reason, .. } => Some(reason),
            Self::NotRunning { .. } | Self::AlreadyStarted { .. } => None,
        }
    }
}
