//! Local illumination of samples.

use nalgebra::{vector, Vector3};

use crate::volumetric::GradientSample;

use super::PhongParams;

/// Reflect incident vector `i` around normal `n`
fn reflect(i: &Vector3<f32>, n: &Vector3<f32>) -> Vector3<f32> {
    i - 2.0 * n.dot(i) * n
}

/// Zero out vectors with NaN or infinite components
fn finite_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    if v.iter().all(|c| c.is_finite()) {
        v
    } else {
        Vector3::zeros()
    }
}

/// Phong illumination of material `color`.
///
/// Gradient direction acts as surface normal, its sign is ignored.
/// `light` and `view` must be normalized. Result is not clamped,
/// components can exceed 1.
pub fn phong(
    color: &Vector3<f32>,
    gradient: &GradientSample,
    light: &Vector3<f32>,
    view: &Vector3<f32>,
    params: &PhongParams,
) -> Vector3<f32> {
    let ambient = params.ka * color;

    let cos_theta = gradient.direction.normalize().dot(light);
    // zero gradient yields NaN
    let diffuse = finite_or_zero(params.kd * color * cos_theta.abs());

    let cos_phi = reflect(light, &gradient.direction).normalize().dot(view);
    let specular = finite_or_zero(
        params.ks * vector![1.0, 1.0, 1.0] * cos_phi.abs().powf(params.alpha),
    );

    ambient + diffuse + specular
}

/// Hermite interpolation between `edge0` and `edge1`, like GLSL `smoothstep`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
