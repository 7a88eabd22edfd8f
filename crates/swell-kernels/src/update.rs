//! Forward-Euler update kernels.

use swell_core::{Field, FieldSet, KernelError, SolverParams};
use swell_grid::StaggeredGrid;
use swell_state::FieldStore;

use crate::kernel::Kernel;

/// Advances a prognostic field in place by its tendency.
///
/// `state ← state + sign · tendency · dt`, where the sign is `+1` for
/// the velocities and `−1` for the height. The height tendency is the
/// flux divergence, so mass leaving a cell lowers its surface.
pub struct UpdateKernel {
    name: &'static str,
    state: Field,
    tendency: Field,
    sign: f32,
}

impl UpdateKernel {
    /// `U ← U + UT·dt`.
    pub fn u() -> Self {
        Self {
            name: "update_u",
            state: Field::U,
            tendency: Field::Ut,
            sign: 1.0,
        }
    }

    /// `V ← V + VT·dt`.
    pub fn v() -> Self {
        Self {
            name: "update_v",
            state: Field::V,
            tendency: Field::Vt,
            sign: 1.0,
        }
    }

    /// `H ← H − HT·dt`.
    pub fn h() -> Self {
        Self {
            name: "update_h",
            state: Field::H,
            tendency: Field::Ht,
            sign: -1.0,
        }
    }
}

impl Kernel for UpdateKernel {
    fn name(&self) -> &str {
        self.name
    }

    fn reads(&self) -> FieldSet {
        [self.state, self.tendency].into_iter().collect()
    }

    fn writes(&self) -> FieldSet {
        [self.state].into_iter().collect()
    }

    fn apply(
        &self,
        grid: &StaggeredGrid,
        params: &SolverParams,
        store: &mut FieldStore,
    ) -> Result<(), KernelError> {
        self.check_shapes(grid, store)?;

        let mut state = store.take(self.state);
        {
            let tendency = store.field(self.tendency);
            let step = self.sign * params.dt;
            for (value, &t) in state.iter_mut().zip(tendency) {
                *value += t * step;
            }
        }
        store.put(self.state, state);

        Ok(())
    }
}
