//! Per-step performance metrics.

/// Timing data collected during a single step.
///
/// All durations are in microseconds. The driver populates these
/// fields after each `step()`; consumers read them from the most
/// recent step via [`Simulation::last_metrics`].
///
/// [`Simulation::last_metrics`]: crate::Simulation::last_metrics
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Per-kernel execution times: `(name, microseconds)`.
    pub kernel_us: Vec<(String, u64)>,
}
