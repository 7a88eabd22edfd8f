//! Initial conditions.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use swell_core::Field;
use swell_grid::StaggeredGrid;
use swell_state::FieldStore;

/// How the fields are populated before the first step.
///
/// All variants leave the velocities, tendencies, fluxes, and
/// bathymetry at zero and set only the surface height; a run that
/// needs nonzero bathymetry or velocities writes them through
/// [`Simulation::store_mut`](crate::Simulation::store_mut) before
/// starting.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialCondition {
    /// Flat surface at a uniform depth. A fixed point of the scheme.
    Rest {
        /// Uniform surface height.
        depth: f32,
    },
    /// A Gaussian bump centered on the domain, the classic dam-break
    /// style disturbance that radiates gravity waves.
    GaussianHump {
        /// Background surface height.
        depth: f32,
        /// Peak height of the bump above the background.
        amplitude: f32,
        /// Standard deviation of the bump, in grid cells.
        width: f32,
    },
    /// Uniform random perturbations around a mean depth, seeded for
    /// reproducibility.
    Noise {
        /// Mean surface height.
        depth: f32,
        /// Half-width of the perturbation interval.
        amplitude: f32,
        /// RNG seed.
        seed: u64,
    },
}

impl InitialCondition {
    /// Populate the height field of a zeroed store.
    pub fn apply(&self, grid: &StaggeredGrid, store: &mut FieldStore) {
        match *self {
            Self::Rest { depth } => {
                store.fill(Field::H, depth);
            }
            Self::GaussianHump {
                depth,
                amplitude,
                width,
            } => {
                let ci = (grid.nx() / 2) as f32;
                let cj = (grid.ny() / 2) as f32;
                let h = store.field_mut(Field::H);
                for (i, j, r) in grid.positions() {
                    let di = torus_distance(i as f32 - ci, grid.nx() as f32);
                    let dj = torus_distance(j as f32 - cj, grid.ny() as f32);
                    let r2 = di * di + dj * dj;
                    h[r] = depth + amplitude * (-r2 / (2.0 * width * width)).exp();
                }
            }
            Self::Noise {
                depth,
                amplitude,
                seed,
            } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for h in store.field_mut(Field::H) {
                    *h = depth + amplitude * (2.0 * rng.gen::<f32>() - 1.0);
                }
            }
        }
    }
}

/// Shortest signed distance along one periodic axis.
fn torus_distance(d: f32, extent: f32) -> f32 {
    let d = d.abs() % extent;
    d.min(extent - d)
}
