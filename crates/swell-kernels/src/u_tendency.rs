//! Tendency of the x velocity component.

use swell_core::{Field, FieldSet, KernelError, SolverParams};
use swell_grid::StaggeredGrid;
use swell_state::FieldStore;

use crate::kernel::Kernel;

/// Computes UT, the explicit time derivative of U, at every x-edge.
///
/// Four terms: nonlinear self-advection, transverse advection against
/// the interpolated V, the pressure gradient over height plus
/// bathymetry, and Coriolis rotation:
///
/// ```text
/// UT = f·vbar − U·∂U/∂x − vbar·∂U/∂y − g·∂(H+B)/∂x
/// ```
///
/// `vbar` is the mean of V at the four corner y-edges. Reads whatever
/// U, V, H, B currently hold, so it must run before the U update of
/// the same step.
pub struct UTendencyKernel;

impl Kernel for UTendencyKernel {
    fn name(&self) -> &str {
        "u_tendency"
    }

    fn reads(&self) -> FieldSet {
        [Field::U, Field::V, Field::H, Field::B]
            .into_iter()
            .collect()
    }

    fn writes(&self) -> FieldSet {
        [Field::Ut].into_iter().collect()
    }

    fn apply(
        &self,
        grid: &StaggeredGrid,
        params: &SolverParams,
        store: &mut FieldStore,
    ) -> Result<(), KernelError> {
        self.check_shapes(grid, store)?;

        let mut ut = store.take(Field::Ut);
        {
            let u = store.field(Field::U);
            let v = store.field(Field::V);
            let h = store.field(Field::H);
            let b = store.field(Field::B);

            for (i, j, r) in grid.positions() {
                let udux =
                    u[r] * (u[grid.edge_east(i, j)] - u[grid.edge_west(i, j)]) / (2.0 * params.dx);

                let [ne, nw, se, sw] = grid.x_edge_corners(i, j);
                let vbar = 0.25 * (v[ne] + v[nw] + v[se] + v[sw]);

                let vduy =
                    vbar * (u[grid.vnorth(i, j)] - u[grid.vsouth(i, j)]) / (2.0 * params.dy);

                let east = grid.east_cell(i, j);
                let west = grid.west_cell(i, j);
                let gdhbx =
                    params.gravity * ((h[east] + b[east]) - (h[west] + b[west])) / params.dx;

                ut[r] = params.coriolis * vbar - udux - vduy - gdhbx;
            }
        }
        store.put(Field::Ut, ut);

        Ok(())
    }
}
