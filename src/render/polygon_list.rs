//! Polygon-producing generators and the shaded-triangle submission path.
//!
//! Polygon matrices hold vertex triples wound counterclockwise as seen from
//! outside the solid, so the cross product of the first two edges faces out.

use std::f32::consts::PI;

use crate::{
    constants::{BOX_TRIANGLES, ENABLE_BACK_FACE_CULLING, PARAMETRIC_STEPS, VIEW_VECTOR},
    matrix::Matrix,
    picture::Picture,
    vector::{Vector, cross_product, subtract_vectors},
};
use super::{LightingConfig, ReflectionConstants, calc_light, scan_line};

#[allow(clippy::too_many_arguments)]
pub fn add_polygon(m: &mut Matrix, x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) {
    m.add_col(x0, y0, z0);
    m.add_col(x1, y1, z1);
    m.add_col(x2, y2, z2);
}

fn add_triangle(m: &mut Matrix, a: Vector, b: Vector, c: Vector) {
    add_polygon(m, a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2]);
}

/// Draws every front-facing triangle as a z-buffered flat fill, one Phong
/// color per triangle.
pub fn render_polygons(
    m: &Matrix,
    picture: &mut Picture,
    lighting_config: &LightingConfig,
    reflection_constants: &ReflectionConstants,
) {
    for polygon in m.points().chunks_exact(3) {
        let a = subtract_vectors(
            &[polygon[1][0], polygon[1][1], polygon[1][2]],
            &[polygon[0][0], polygon[0][1], polygon[0][2]],
        );
        let b = subtract_vectors(
            &[polygon[2][0], polygon[2][1], polygon[2][2]],
            &[polygon[0][0], polygon[0][1], polygon[0][2]],
        );
        let normal = cross_product(&a, &b);

        // facing the viewer means a positive z component, since the view
        // vector is <0, 0, 1>
        if ENABLE_BACK_FACE_CULLING && normal[2] <= 0.0 {
            continue;
        }

        let color = calc_light(&VIEW_VECTOR, &normal, lighting_config, reflection_constants);
        scan_line::flat(picture, polygon, &color);
    }
}

/// Axis-aligned box from its front-top-left corner and extents:
/// 8 corners, 12 triangles.
pub fn add_box(m: &mut Matrix, x: f32, y: f32, z: f32, w: f32, h: f32, d: f32) {
    let vertices: [Vector; 8] = [
        [x, y, z],
        [x + w, y, z],
        [x + w, y - h, z],
        [x, y - h, z],
        [x, y, z - d],
        [x + w, y, z - d],
        [x + w, y - h, z - d],
        [x, y - h, z - d],
    ];

    for (a, b, c) in BOX_TRIANGLES {
        add_triangle(m, vertices[a], vertices[b], vertices[c]);
    }
}

/// Sphere from center and radius, tessellated by latitude/longitude with the
/// pole caps emitted as single triangles.
pub fn add_sphere(m: &mut Matrix, cx: f32, cy: f32, cz: f32, r: f32) {
    let points = generate_sphere_points(cx, cy, cz, r);
    let get = |longitude: usize, latitude: usize| points[longitude * (PARAMETRIC_STEPS + 1) + latitude];

    for longitude in 0..PARAMETRIC_STEPS {
        for latitude in 0..PARAMETRIC_STEPS {
            let p0 = get(longitude, latitude);
            let p1 = get(longitude, latitude + 1);
            let p2 = get(longitude + 1, latitude + 1);
            let p3 = get(longitude + 1, latitude);

            // at the south pole p1 == p2, at the north pole p0 == p3;
            // skipping those keeps zero-area caps out of the mesh
            if latitude < PARAMETRIC_STEPS - 1 {
                add_triangle(m, p0, p1, p2);
            }
            if latitude > 0 {
                add_triangle(m, p0, p2, p3);
            }
        }
    }
}

// poles sit on the x axis through the center: the semicircle parameter cir
// sweeps 0..pi while rot revolves it around the axis
fn generate_sphere_points(cx: f32, cy: f32, cz: f32, r: f32) -> Vec<Vector> {
    let x = |cir: f32| r * (PI * cir).cos() + cx;
    let y = |rot: f32, cir: f32| r * (PI * cir).sin() * (2.0 * PI * rot).cos() + cy;
    let z = |rot: f32, cir: f32| r * (PI * cir).sin() * (2.0 * PI * rot).sin() + cz;

    let mut points = Vec::with_capacity((PARAMETRIC_STEPS + 1) * (PARAMETRIC_STEPS + 1));
    for i in 0..=PARAMETRIC_STEPS {
        let rot = i as f32 / PARAMETRIC_STEPS as f32;
        for j in 0..=PARAMETRIC_STEPS {
            let cir = j as f32 / PARAMETRIC_STEPS as f32;
            points.push([x(cir), y(rot, cir), z(rot, cir)]);
        }
    }
    points
}

/// Torus from center, tube radius r1, and ring radius r2 (center of tube to
/// center of torus).
pub fn add_torus(m: &mut Matrix, cx: f32, cy: f32, cz: f32, r1: f32, r2: f32) {
    let points = generate_torus_points(cx, cy, cz, r1, r2);
    let get = |ring: usize, segment: usize| points[ring * (PARAMETRIC_STEPS + 1) + segment];

    for ring in 0..PARAMETRIC_STEPS {
        for segment in 0..PARAMETRIC_STEPS {
            let p0 = get(ring, segment);
            let p1 = get(ring, segment + 1);
            let p0_next = get(ring + 1, segment);
            let p1_next = get(ring + 1, segment + 1);

            add_triangle(m, p0, p1_next, p1);
            add_triangle(m, p0, p0_next, p1_next);
        }
    }
}

fn generate_torus_points(cx: f32, cy: f32, cz: f32, r1: f32, r2: f32) -> Vec<Vector> {
    let x = |rot: f32, cir: f32| (2.0 * PI * rot).cos() * (r1 * (2.0 * PI * cir).cos() + r2) + cx;
    let y = |cir: f32| r1 * (2.0 * PI * cir).sin() + cy;
    let z = |rot: f32, cir: f32| -(2.0 * PI * rot).sin() * (r1 * (2.0 * PI * cir).cos() + r2) + cz;

    let mut points = Vec::with_capacity((PARAMETRIC_STEPS + 1) * (PARAMETRIC_STEPS + 1));
    for i in 0..=PARAMETRIC_STEPS {
        let rot = i as f32 / PARAMETRIC_STEPS as f32;
        for j in 0..=PARAMETRIC_STEPS {
            let cir = j as f32 / PARAMETRIC_STEPS as f32;
            points.push([x(rot, cir), y(cir), z(rot, cir)]);
        }
    }
    points
}
