//! Tendency of the y velocity component.

use swell_core::{Field, FieldSet, KernelError, SolverParams};
use swell_grid::StaggeredGrid;
use swell_state::FieldStore;

use crate::kernel::Kernel;

/// Computes VT, the explicit time derivative of V, at every y-edge.
///
/// Mirror image of [`UTendencyKernel`](crate::UTendencyKernel):
///
/// ```text
/// VT = −V·∂V/∂y − ubar·∂V/∂x − g·∂(H+B)/∂y − f·ubar
/// ```
///
/// `ubar` is the mean of U at the four corner x-edges. In the standard
/// step order this kernel sees U as already advanced by the U update
/// of the same step; the height gradient still uses the start-of-step
/// H. That asymmetry is inherited from the reference scheme and pinned
/// by a regression test rather than corrected.
pub struct VTendencyKernel;

impl Kernel for VTendencyKernel {
    fn name(&self) -> &str {
        "v_tendency"
    }

    fn reads(&self) -> FieldSet {
        [Field::U, Field::V, Field::H, Field::B]
            .into_iter()
            .collect()
    }

    fn writes(&self) -> FieldSet {
        [Field::Vt].into_iter().collect()
    }

    fn apply(
        &self,
        grid: &StaggeredGrid,
        params: &SolverParams,
        store: &mut FieldStore,
    ) -> Result<(), KernelError> {
        self.check_shapes(grid, store)?;

        let mut vt = store.take(Field::Vt);
        {
            let u = store.field(Field::U);
            let v = store.field(Field::V);
            let h = store.field(Field::H);
            let b = store.field(Field::B);

            for (i, j, r) in grid.positions() {
                let vdvy = v[r] * (v[grid.edge_north(i, j)] - v[grid.edge_south(i, j)])
                    / (2.0 * params.dy);

                let [en, es, wn, ws] = grid.y_edge_corners(i, j);
                let ubar = 0.25 * (u[en] + u[es] + u[wn] + u[ws]);

                let udvx =
                    ubar * (v[grid.heast(i, j)] - v[grid.hwest(i, j)]) / (2.0 * params.dx);

                let north = grid.north_cell(i, j);
                let south = grid.south_cell(i, j);
                let gdhby =
                    params.gravity * ((h[north] + b[north]) - (h[south] + b[south])) / params.dy;

                vt[r] = -vdvy - udvx - gdhby - params.coriolis * ubar;
            }
        }
        store.put(Field::Vt, vt);

        Ok(())
    }
}
