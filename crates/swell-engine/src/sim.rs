//! The time-stepping driver.

use std::time::Instant;

use swell_core::{SolverParams, StepError, TickId};
use swell_grid::StaggeredGrid;
use swell_kernels::{shallow_water_pipeline, validate_pipeline, Kernel};
use swell_state::FieldStore;

use crate::config::{ConfigError, RunConfig};
use crate::metrics::StepMetrics;

/// Assumed floating-point operations per grid point per step, used by
/// the throughput estimate.
pub const FLOPS_PER_CELL_STEP: u64 = 60;

/// Normalized throughput estimate in GFLOP/s.
///
/// `60 · nx · ny · steps / elapsed_seconds / 1e9`, the conventional
/// figure for comparing stencil implementations of this scheme.
pub fn throughput_gflops(nx: u32, ny: u32, steps: u64, elapsed_seconds: f64) -> f64 {
    FLOPS_PER_CELL_STEP as f64 * f64::from(nx) * f64::from(ny) * steps as f64
        / elapsed_seconds
        / 1e9
}

/// Lifecycle of a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Constructed, fields initialized, not yet started.
    Idle,
    /// Started and ready to take the next step.
    Running,
    /// Inside a step; kernels are executing.
    Stepping,
    /// All configured steps completed.
    Done,
}

impl RunState {
    /// Lowercase name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stepping => "stepping",
            Self::Done => "done",
        }
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Steps taken.
    pub steps: u64,
    /// Wall-clock seconds for the whole step loop.
    pub elapsed_seconds: f64,
    /// Throughput estimate, see [`throughput_gflops`].
    pub throughput_gflops: f64,
}

/// A shallow water simulation: grid, fields, kernels, and the step
/// loop that drives them.
///
/// Each step invokes the kernels in pipeline order with a full barrier
/// between them; within a kernel every position is independent. There
/// is no stability check: a step that produces NaN/Inf is not detected
/// and simply propagates to completion.
///
/// # Examples
///
/// ```
/// use swell_engine::{RunConfig, Simulation};
///
/// let mut sim = Simulation::new(RunConfig::new(16, 16, 10))?;
/// let report = sim.run()?;
/// assert_eq!(report.steps, 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Simulation {
    grid: StaggeredGrid,
    params: SolverParams,
    steps: u64,
    store: FieldStore,
    kernels: Vec<Box<dyn Kernel>>,
    state: RunState,
    tick: TickId,
    metrics: StepMetrics,
}

impl Simulation {
    /// Build a simulation with the standard shallow water pipeline.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        Self::with_pipeline(config, shallow_water_pipeline())
    }

    /// Build a simulation with a caller-supplied kernel pipeline.
    ///
    /// Exists for instrumentation: tests wrap the standard kernels to
    /// record call order, benchmarks substitute subsets.
    pub fn with_pipeline(
        config: RunConfig,
        kernels: Vec<Box<dyn Kernel>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_pipeline(&kernels)?;
        let grid = StaggeredGrid::new(config.nx, config.ny)?;
        let mut store = FieldStore::new(grid.cell_count());
        config.init.apply(&grid, &mut store);
        Ok(Self {
            grid,
            params: config.params,
            steps: config.steps,
            store,
            kernels,
            state: RunState::Idle,
            tick: TickId(0),
            metrics: StepMetrics::default(),
        })
    }

    /// Transition from Idle to Running.
    pub fn start(&mut self) -> Result<(), StepError> {
        match self.state {
            RunState::Idle => {
                self.state = RunState::Running;
                Ok(())
            }
            other => Err(StepError::AlreadyStarted {
                state: other.name(),
            }),
        }
    }

    /// Take one step: all kernels, in order, each over the full grid.
    ///
    /// Transitions to Done after the configured number of steps.
    pub fn step(&mut self) -> Result<(), StepError> {
        if self.state != RunState::Running {
            return Err(StepError::NotRunning {
                state: self.state.name(),
            });
        }
        self.state = RunState::Stepping;

        let step_start = Instant::now();
        let mut kernel_us = Vec::with_capacity(self.kernels.len());
        for kernel in &self.kernels {
            let kernel_start = Instant::now();
            if let Err(reason) = kernel.apply(&self.grid, &self.params, &mut self.store) {
                self.state = RunState::Running;
                return Err(StepError::KernelFailed {
                    name: kernel.name().to_string(),
                    reason,
                });
            }
            kernel_us.push((
                kernel.name().to_string(),
                kernel_start.elapsed().as_micros() as u64,
            ));
        }
        self.metrics = StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            kernel_us,
        };

        self.tick = TickId(self.tick.0 + 1);
        self.state = if self.tick.0 >= self.steps {
            RunState::Done
        } else {
            RunState::Running
        };
        Ok(())
    }

    /// Run to completion and report elapsed time and throughput.
    ///
    /// Starts the driver if it is still Idle.
    pub fn run(&mut self) -> Result<RunReport, StepError> {
        if self.state == RunState::Idle {
            self.start()?;
        }
        if self.state != RunState::Running {
            return Err(StepError::NotRunning {
                state: self.state.name(),
            });
        }

        let loop_start = Instant::now();
        while self.state == RunState::Running {
            self.step()?;
        }
        let elapsed_seconds = loop_start.elapsed().as_secs_f64();

        Ok(RunReport {
            steps: self.tick.0,
            elapsed_seconds,
            throughput_gflops: throughput_gflops(
                self.grid.nx(),
                self.grid.ny(),
                self.tick.0,
                elapsed_seconds,
            ),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of completed steps.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The grid geometry.
    pub fn grid(&self) -> &StaggeredGrid {
        &self.grid
    }

    /// The solver parameters.
    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Read access to the fields.
    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    /// Write access to the fields, for custom initialization before
    /// the run starts.
    pub fn store_mut(&mut self) -> &mut FieldStore {
        &mut self.store
    }

    /// Timing of the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swell_core::Field;

    #[test]
    fn throughput_formula() {
        let value = throughput_gflops(100, 100, 1000, 2.0);
        let expected = 60.0 * 100.0 * 100.0 * 1000.0 / 2.0 / 1e9;
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn lifecycle_transitions() {
        let mut sim = Simulation::new(RunConfig::new(4, 4, 2)).unwrap();
        assert_eq!(sim.state(), RunState::Idle);

        assert!(matches!(
            sim.step(),
            Err(StepError::NotRunning { state: "idle" })
        ));

        sim.start().unwrap();
        assert_eq!(sim.state(), RunState::Running);

        sim.step().unwrap();
        assert_eq!(sim.state(), RunState::Running);
        assert_eq!(sim.tick(), TickId(1));

        sim.step().unwrap();
        assert_eq!(sim.state(), RunState::Done);
        assert_eq!(sim.tick(), TickId(2));

        assert!(matches!(
            sim.step(),
            Err(StepError::NotRunning { state: "done" })
        ));
    }

    #[test]
    fn double_start_rejected() {
        let mut sim = Simulation::new(RunConfig::new(4, 4, 2)).unwrap();
        sim.start().unwrap();
        assert!(matches!(
            sim.start(),
            Err(StepError::AlreadyStarted { state: "running" })
        ));
    }

    #[test]
    fn run_completes_all_steps() {
        let mut sim = Simulation::new(RunConfig::new(8, 8, 25)).unwrap();
        let report = sim.run().unwrap();
        assert_eq!(report.steps, 25);
        assert_eq!(sim.state(), RunState::Done);
        assert!(report.elapsed_seconds >= 0.0);
        assert!(report.throughput_gflops > 0.0);

        // A finished run cannot be rerun.
        assert!(matches!(
            sim.run(),
            Err(StepError::NotRunning { state: "done" })
        ));
    }

    #[test]
    fn metrics_record_every_kernel() {
        let mut sim = Simulation::new(RunConfig::new(8, 8, 1)).unwrap();
        sim.run().unwrap();
        let metrics = sim.last_metrics();
        let names: Vec<&str> = metrics.kernel_us.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            [
                "flux",
                "u_tendency",
                "update_u",
                "v_tendency",
                "update_v",
                "h_tendency",
                "update_h",
            ]
        );
    }

    #[test]
    fn rest_run_leaves_height_unchanged() {
        let mut config = RunConfig::new(8, 8, 10);
        config.init = crate::InitialCondition::Rest { depth: 3.0 };
        let mut sim = Simulation::new(config).unwrap();
        sim.run().unwrap();
        assert!(sim.store().field(Field::H).iter().all(|&h| h == 3.0));
    }
}
