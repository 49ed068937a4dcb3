use crate::{
    constants::SPECULAR_EXPONENT,
    vector::{Vector, dot_product, normalize_vector, scale_vector, subtract_vectors},
};

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    /// Also serves as the surface-to-light direction; the light is treated as
    /// infinitely far away, so every surface sees the same direction.
    pub position: Vector,
    pub color: Vector,
}

#[derive(Clone, Copy, Debug)]
pub struct LightingConfig {
    pub ambient_light: Vector,
    pub point_light: PointLight,
}

#[derive(Clone, Copy, Debug)]
pub struct ReflectionConstants {
    pub ambient: Vector,
    pub diffuse: Vector,
    pub specular: Vector,
}

/// Clamps one color channel into the drawable 0..=255 range.
pub fn restrict(n: f32) -> f32 {
    n.clamp(0.0, 255.0)
}

/// Phong reflection model: ambient + diffuse + specular per channel.
///
/// The diffuse cosine is not clamped at zero, so a surface facing away from
/// the light subtracts from the ambient term before the final restrict.
pub fn calc_light(
    view: &Vector,
    normal: &Vector,
    config: &LightingConfig,
    constants: &ReflectionConstants,
) -> (usize, usize, usize) {
    let v = normalize_vector(view);
    let n = normalize_vector(normal);
    let l = normalize_vector(&config.point_light.position);

    let cos_theta = dot_product(&l, &n);

    // reflection of the light direction about the normal: r = 2(n.l)n - l
    let r = subtract_vectors(&scale_vector(&n, 2.0 * cos_theta), &l);
    let cos_alpha = f32::max(dot_product(&r, &v), 0.0).powi(SPECULAR_EXPONENT);

    let mut color = [0.0; 3];
    for (channel, value) in color.iter_mut().enumerate() {
        let ambient = config.ambient_light[channel] * constants.ambient[channel];
        let diffuse = config.point_light.color[channel] * constants.diffuse[channel] * cos_theta;
        let specular = config.point_light.color[channel] * constants.specular[channel] * cos_alpha;
        *value = restrict(ambient + diffuse + specular);
    }

    (color[0] as usize, color[1] as usize, color[2] as usize)
}
