//! Criterion benchmarks for the numerical kernels and the full step.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swell_bench::reference_profile;
use swell_core::SolverParams;
use swell_engine::Simulation;
use swell_grid::StaggeredGrid;
use swell_kernels::{
    shallow_water_pipeline, FluxKernel, HTendencyKernel, Kernel, UTendencyKernel, VTendencyKernel,
};
use swell_state::FieldStore;

fn reference_store() -> FieldStore {
    let mut sim = Simulation::new(reference_profile(1)).unwrap();
    // One real step so every field holds representative values.
    sim.run().unwrap();
    sim.store().clone()
}

fn bench_single_kernels(c: &mut Criterion) {
    let grid = StaggeredGrid::new(256, 256).unwrap();
    let params = SolverParams::default();
    let store = reference_store();

    let kernels: [(&str, Box<dyn Kernel>); 4] = [
        ("flux_256", Box::new(FluxKernel)),
        ("u_tendency_256", Box::new(UTendencyKernel)),
        ("v_tendency_256", Box::new(VTendencyKernel)),
        ("h_tendency_256", Box::new(HTendencyKernel)),
    ];

    for (name, kernel) in kernels {
        c.bench_function(name, |b| {
            let mut scratch = store.clone();
            b.iter(|| {
                kernel.apply(&grid, &params, &mut scratch).unwrap();
                black_box(&scratch);
            });
        });
    }
}

fn bench_full_step(c: &mut Criterion) {
    let grid = StaggeredGrid::new(256, 256).unwrap();
    let params = SolverParams::default();
    let store = reference_store();
    let pipeline = shallow_water_pipeline();

    c.bench_function("full_step_256", |b| {
        let mut scratch = store.clone();
        b.iter(|| {
            for kernel in &pipeline {
                kernel.apply(&grid, &params, &mut scratch).unwrap();
            }
            black_box(&scratch);
        });
    });
}

criterion_group!(benches, bench_single_kernels, bench_full_step);
criterion_main!(benches);
