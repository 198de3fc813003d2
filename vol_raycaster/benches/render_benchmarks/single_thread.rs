use crate::common::{render_config, BenchOptions, RenderMode, DEFAULT_CAMERA_POSITIONS};
use criterion::Criterion;

pub fn render_slicer_single(c: &mut Criterion) {
    let config = render_config(RenderMode::Slicer, false);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_mip_single(c: &mut Criterion) {
    let config = render_config(RenderMode::Mip, false);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_iso_single(c: &mut Criterion) {
    let config = render_config(RenderMode::Iso, false);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_composite_single(c: &mut Criterion) {
    let config = render_config(RenderMode::Composite, false);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_tf2d_single(c: &mut Criterion) {
    let config = render_config(RenderMode::Tf2d, false);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_mida_single(c: &mut Criterion) {
    let config = render_config(RenderMode::Mida, false);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_combined_single(c: &mut Criterion) {
    let config = render_config(RenderMode::Combined, false);
    let bench_options = BenchOptions::new(config, &DEFAULT_CAMERA_POSITIONS);

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}
