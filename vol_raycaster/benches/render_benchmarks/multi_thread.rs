use crate::common::{render_config, BenchOptions, RenderMode, DEFAULT_CAMERA_POSITIONS};
use criterion::Criterion;

pub fn render_slicer_multi(c: &mut Criterion) {
    let config = render_config(RenderMode::Slicer, true);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_mip_multi(c: &mut Criterion) {
    let config = render_config(RenderMode::Mip, true);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_iso_multi(c: &mut Criterion) {
    let config = render_config(RenderMode::Iso, true);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_composite_multi(c: &mut Criterion) {
    let config = render_config(RenderMode::Composite, true);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_tf2d_multi(c: &mut Criterion) {
    let config = render_config(RenderMode::Tf2d, true);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_mida_multi(c: &mut Criterion) {
    let config = render_config(RenderMode::Mida, true);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_combined_multi(c: &mut Criterion) {
    let config = render_config(RenderMode::Combined, true);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}
