pub use criterion::Criterion;
pub use nalgebra::{point, vector, Point3, Vector2, Vector3};
pub use vol_raycaster::{
    camera::PerspectiveCamera,
    render::{RenderConfig, RenderMode, Renderer},
    test_helpers::{sphere_volume, with_gradient},
    volumetric::{GradientVolume, LinearVolume},
};

pub const WIDTH: u16 = 512;
pub const HEIGHT: u16 = 512;
pub const RESOLUTION: Vector2<u16> = vector![WIDTH, HEIGHT];

/// Side of the generated volume
pub const VOLUME_SIDE: usize = 128;

pub const DEFAULT_CAMERA_POSITIONS: [(Point3<f32>, Vector3<f32>); 3] = [
    (point![300.0, 300.0, 300.0], vector![-1.0, -1.0, -1.0]),
    (point![64.0, 64.0, -200.0], vector![0.0, 0.0, 1.0]),
    (point![-100.0, 300.0, 64.0], vector![0.5, -1.0, 0.0]),
];

pub fn get_volume() -> (LinearVolume, GradientVolume) {
    with_gradient(sphere_volume(VOLUME_SIDE))
}

/// Infinite iterator over camera positions
pub fn camera_positions(
    positions: &[(Point3<f32>, Vector3<f32>)],
) -> impl Iterator<Item = (Point3<f32>, Vector3<f32>)> + '_ {
    positions.iter().copied().cycle()
}

pub struct BenchOptions {
    pub render_config: RenderConfig,
    pub bench_name: String,
    pub camera_positions: &'static [(Point3<f32>, Vector3<f32>)],
}

impl BenchOptions {
    pub fn new(
        render_config: RenderConfig,
        camera_positions: &'static [(Point3<f32>, Vector3<f32>)],
    ) -> BenchOptions {
        let thread = if render_config.multi_thread { "MT" } else { "ST" };
        let bench_name = format!(
            "Render {thread} | {:?} | {WIDTH}x{HEIGHT}",
            render_config.render_mode
        );
        BenchOptions {
            render_config,
            bench_name,
            camera_positions,
        }
    }

    /// Benchmark rendering of one frame, camera moves between iterations
    pub fn get_benchmark(self) -> impl FnOnce(&mut Criterion) {
        move |c: &mut Criterion| {
            let BenchOptions {
                render_config,
                bench_name,
                camera_positions: positions,
            } = self;

            let (volume, gradient) = get_volume();
            let mut renderer = Renderer::new(volume, gradient, render_config);
            let (pos, dir) = positions[0];
            let mut camera = PerspectiveCamera::new(pos, dir);
            let mut positions = camera_positions(positions);

            c.bench_function(&bench_name, |b| {
                b.iter_batched(
                    || positions.next(),
                    |position| {
                        if let Some((pos, dir)) = position {
                            camera.set_pos(pos);
                            camera.set_direction(dir);
                        }
                        renderer.render(&camera);
                    },
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }
}

pub fn render_config(mode: RenderMode, multi_thread: bool) -> RenderConfig {
    RenderConfig::builder()
        .resolution(RESOLUTION)
        .render_mode(mode)
        .multi_thread(multi_thread)
        .build_unchecked()
}
