//! Physical and numerical parameters of the solver.

use crate::error::ParamError;

/// Scalar constants of the shallow water scheme, immutable for a run.
///
/// Spacing and the timestep feed the finite-difference quotients;
/// `gravity` scales the pressure-gradient terms and `coriolis` the
/// rotation terms. There is no stability check: an explicit scheme
/// with a too-large `dt` diverges to NaN/Inf silently, which is an
/// accepted outcome for performance studies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverParams {
    /// Grid spacing in the x (i) direction.
    pub dx: f32,
    /// Grid spacing in the y (j) direction.
    pub dy: f32,
    /// Timestep.
    pub dt: f32,
    /// Gravitational acceleration.
    pub gravity: f32,
    /// Coriolis parameter.
    pub coriolis: f32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            dx: 1.0,
            dy: 1.0,
            dt: 0.001,
            gravity: 9.8,
            coriolis: 0.1,
        }
    }
}

impl SolverParams {
    /// Validate the parameters.
    ///
    /// Spacings and the timestep must be finite and strictly positive
    /// (they appear as divisors and integration weights); gravity and
    /// the Coriolis parameter only need to be finite.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [("dx", self.dx), ("dy", self.dy), ("dt", self.dt)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParamError {
                    name,
                    value,
                    requirement: "finite and positive",
                });
            }
        }
        for (name, value) in [("gravity", self.gravity), ("coriolis", self.coriolis)] {
            if !value.is_finite() {
                return Err(ParamError {
                    name,
                    value,
                    requirement: "finite",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SolverParams::default().validate().is_ok());
    }

    #[test]
    fn nan_dt_rejected() {
        let params = SolverParams {
            dt: f32::NAN,
            ..SolverParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError { name: "dt", .. })
        ));
    }

    #[test]
    fn zero_dx_rejected() {
        let params = SolverParams {
            dx: 0.0,
            ..SolverParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError { name: "dx", .. })
        ));
    }

    #[test]
    fn negative_dt_rejected() {
        let params = SolverParams {
            dt: -0.001,
            ..SolverParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn infinite_gravity_rejected() {
        let params = SolverParams {
            gravity: f32::INFINITY,
            ..SolverParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError { name: "gravity", .. })
        ));
    }

    #[test]
    fn negative_coriolis_allowed() {
        // Southern-hemisphere sign is legitimate.
        let params = SolverParams {
            coriolis: -0.1,
            ..SolverParams::default()
        };
        assert!(params.validate().is_ok());
    }
}
