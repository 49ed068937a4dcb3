use crate::{
    render::lighting::{LightingConfig, PointLight, ReflectionConstants},
    vector::Vector,
};

/* CONFIG */
pub const DEFAULT_SCRIPT: &str = "scripts/demo.txt";
pub const DEFAULT_PICTURE_DIMENSIONS: (usize, usize) = (500, 500);
pub const DEFAULT_BACKGROUND_COLOR: (usize, usize, usize) = BLACK;
pub const DEFAULT_FOREGROUND_COLOR: (usize, usize, usize) = CYAN;

// Sampling density for circles, curves, and surface tessellation.
// Every generated mesh depends on this value, so the geometry tests pin it.
pub const PARAMETRIC_STEPS: usize = 20;

pub const ENABLE_BACK_FACE_CULLING: bool = true;
pub const SPECULAR_EXPONENT: i32 = 8;

// The viewer sits on the +z axis looking down -z, so culling and specular
// math only ever need the z component of a vector.
pub const VIEW_VECTOR: Vector = [0.0, 0.0, 1.0];

pub const DEFAULT_LIGHTING_CONFIG: LightingConfig = LightingConfig {
    ambient_light: [50.0, 50.0, 50.0],
    point_light: PointLight {
        position: [0.5, 0.75, 1.0],
        color: [0.0, 255.0, 255.0],
    },
};

pub const DEFAULT_REFLECTION_CONSTANTS: ReflectionConstants = ReflectionConstants {
    ambient: [0.1, 0.1, 0.1],
    diffuse: [0.5, 0.5, 0.5],
    specular: [0.5, 0.5, 0.5],
};

/* COLORS */
pub const WHITE: (usize, usize, usize) = (255, 255, 255);
pub const BLACK: (usize, usize, usize) = (0, 0, 0);
pub const CYAN: (usize, usize, usize) = (0, 255, 255);

/* CUBIC CURVE BASES */
// Arranged so that coefficients = geometry (row vector) * basis.
pub const HERMITE: [[f32; 4]; 4] = [
    [2.0, -3.0, 0.0, 1.0],
    [-2.0, 3.0, 0.0, 0.0],
    [1.0, -2.0, 1.0, 0.0],
    [1.0, -1.0, 0.0, 0.0],
];
pub const BEZIER: [[f32; 4]; 4] = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];

// Triangles of an axis-aligned box as indices into its 8 corners,
// wound counterclockwise as seen from outside.
pub const BOX_TRIANGLES: [(usize, usize, usize); 12] = [
    (0, 2, 1),
    (0, 3, 2),
    (4, 1, 5),
    (4, 0, 1),
    (7, 0, 4),
    (7, 3, 0),
    (6, 3, 7),
    (6, 2, 3),
    (5, 2, 6),
    (5, 1, 2),
    (7, 5, 6),
    (7, 4, 5),
];
