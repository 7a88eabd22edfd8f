//! The [`Kernel`] trait.

use swell_core::{FieldSet, KernelError, SolverParams};
use swell_grid::StaggeredGrid;
use swell_state::FieldStore;

/// A single pass over the grid, reading some fields and writing others.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: same inputs produce identical
///   outputs.
/// - `&self` — kernels are stateless; all mutable state lives in the
///   [`FieldStore`].
/// - `reads()` and `writes()` are called once at pipeline validation,
///   not per step.
/// - Every position is visited exactly once per call; there is no
///   partial-failure state. Arithmetic is total over floating-point
///   values, so NaN/Inf propagate silently rather than erroring.
///
/// # Object safety
///
/// The trait is object-safe; the driver stores kernels as
/// `Vec<Box<dyn Kernel>>`.
pub trait Kernel: Send + 'static {
    /// Human-readable name for error reporting and metrics.
    fn name(&self) -> &str;

    /// Fields this kernel reads.
    fn reads(&self) -> FieldSet;

    /// Fields this kernel writes.
    ///
    /// In-place updates declare the field in both sets.
    fn writes(&self) -> FieldSet;

    /// Execute the kernel over every grid position.
    fn apply(
        &self,
        grid: &StaggeredGrid,
        params: &SolverParams,
        store: &mut FieldStore,
    ) -> Result<(), KernelError>;

    /// Check every declared field's buffer against the grid extent.
    ///
    /// Kernels call this at the top of `apply()` so that indexing
    /// below it cannot go out of bounds.
    fn check_shapes(&self, grid: &StaggeredGrid, store: &FieldStore) -> Result<(), KernelError> {
        let expected = grid.cell_count();
        for field in self.reads().union(self.writes()) {
            store.ensure_shape(field, expected)?;
        }
        Ok(())
    }
}
