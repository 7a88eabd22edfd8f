//! Tendency of the surface height.

use swell_core::{Field, FieldSet, KernelError, SolverParams};
use swell_grid::StaggeredGrid;
use swell_state::FieldStore;

use crate::kernel::Kernel;

/// Computes HT, the divergence of the mass flux, at every cell.
///
/// ```text
/// HT = (F_east − F_west) / dx + (G_north − G_south) / dy
/// ```
///
/// Reads the F and G computed at the start of the step, before U and V
/// were advanced, so the height sees fluxes from the previous time
/// level.
pub struct HTendencyKernel;

impl Kernel for HTendencyKernel {
    fn name(&self) -> &str {
        "h_tendency"
    }

    fn reads(&self) -> FieldSet {
        [Field::F, Field::G].into_iter().collect()
    }

    fn writes(&self) -> FieldSet {
        [Field::Ht].into_iter().collect()
    }

    fn apply(
        &self,
        grid: &StaggeredGrid,
        params: &SolverParams,
        store: &mut FieldStore,
    ) -> Result<(), KernelError> {
        self.check_shapes(grid, store)?;

        let mut ht = store.take(Field::Ht);
        {
            let f = store.field(Field::F);
            let g = store.field(Field::G);
            for (i, j, r) in grid.positions() {
                ht[r] = (f[grid.east_edge(i, j)] - f[grid.west_edge(i, j)]) / params.dx
                    + (g[grid.north_edge(i, j)] - g[grid.south_edge(i, j)]) / params.dy;
            }
        }
        store.put(Field::Ht, ht);

        Ok(())
    }
}
