//! Mass flux computation.

use swell_core::{Field, FieldSet, KernelError, SolverParams};
use swell_grid::StaggeredGrid;
use swell_state::FieldStore;

use crate::kernel::Kernel;

/// Computes the edge-centered mass fluxes F and G.
///
/// For every x-edge, `F = U · (H_east + H_west) / 2`; for every
/// y-edge, `G = V · (H_north + H_south) / 2`. Both outputs are fully
/// overwritten each call.
pub struct FluxKernel;

impl Kernel for FluxKernel {
    fn name(&self) -> &str {
        "flux"
    }

    fn reads(&self) -> FieldSet {
        [Field::U, Field::V, Field::H].into_iter().collect()
    }

    fn writes(&self) -> FieldSet {
        [Field::F, Field::G].into_iter().collect()
    }

    fn apply(
        &self,
        grid: &StaggeredGrid,
        _params: &SolverParams,
        store: &mut FieldStore,
    ) -> Result<(), KernelError> {
        self.check_shapes(grid, store)?;

        let mut f = store.take(Field::F);
        {
            let u = store.field(Field::U);
            let h = store.field(Field::H);
            for (i, j, r) in grid.positions() {
                f[r] = u[r] * 0.5 * (h[grid.east_cell(i, j)] + h[grid.west_cell(i, j)]);
            }
        }
        store.put(Field::F, f);

        let mut g = store.take(Field::G);
        {
            let v = store.field(Field::V);
            let h = store.field(Field::H);
            for (i, j, r) in grid.positions() {
                g[r] = v[r] * 0.5 * (h[grid.north_cell(i, j)] + h[grid.south_cell(i, j)]);
            }
        }
        store.put(Field::G, g);

        Ok(())
    }
}
