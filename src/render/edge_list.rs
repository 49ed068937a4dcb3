//! Edge-producing generators: shapes drawn as disconnected line segments.
//!
//! Each generator appends column pairs to a `Matrix` in the local frame; the
//! interpreter applies the coordinate stack before the edges hit the picture.

use std::f32::consts::PI;

use crate::{
    constants::{BEZIER, HERMITE, PARAMETRIC_STEPS},
    matrix::Matrix,
    picture::Picture,
};

pub fn add_edge(m: &mut Matrix, x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) {
    m.add_col(x0, y0, z0);
    m.add_col(x1, y1, z1);
}

/// Closed polyline approximating a circle in the z = cz plane,
/// PARAMETRIC_STEPS segments.
pub fn add_circle(m: &mut Matrix, cx: f32, cy: f32, cz: f32, r: f32) {
    let point = |t: f32| (r * (2.0 * PI * t).cos() + cx, r * (2.0 * PI * t).sin() + cy);

    let mut previous = point(0.0);
    for i in 1..=PARAMETRIC_STEPS {
        let current = point(i as f32 / PARAMETRIC_STEPS as f32);
        add_edge(m, previous.0, previous.1, cz, current.0, current.1, cz);
        previous = current;
    }
}

// coefficients = geometry (row vector) * basis, cubic first
fn curve_coefficients(geometry: [f32; 4], basis: &[[f32; 4]; 4]) -> [f32; 4] {
    let mut coefficients = [0.0; 4];
    for (g, row) in geometry.iter().zip(basis) {
        for (coefficient, value) in coefficients.iter_mut().zip(row) {
            *coefficient += g * value;
        }
    }
    coefficients
}

fn add_parametric_curve(m: &mut Matrix, x_coefficients: [f32; 4], y_coefficients: [f32; 4]) {
    let eval = |c: &[f32; 4], t: f32| ((c[0] * t + c[1]) * t + c[2]) * t + c[3];

    let mut previous = (eval(&x_coefficients, 0.0), eval(&y_coefficients, 0.0));
    for i in 1..=PARAMETRIC_STEPS {
        let t = i as f32 / PARAMETRIC_STEPS as f32;
        let current = (eval(&x_coefficients, t), eval(&y_coefficients, t));
        add_edge(m, previous.0, previous.1, 0.0, current.0, current.1, 0.0);
        previous = current;
    }
}

/// Hermite curve from two endpoints and two tangents, sampled at
/// PARAMETRIC_STEPS points in the z = 0 plane.
#[allow(clippy::too_many_arguments)]
pub fn add_hermite_curve(m: &mut Matrix, x0: f32, y0: f32, x1: f32, y1: f32, rx0: f32, ry0: f32, rx1: f32, ry1: f32) {
    add_parametric_curve(
        m,
        curve_coefficients([x0, x1, rx0, rx1], &HERMITE),
        curve_coefficients([y0, y1, ry0, ry1], &HERMITE),
    );
}

/// Cubic Bezier curve from four control points, sampled at PARAMETRIC_STEPS
/// points in the z = 0 plane.
#[allow(clippy::too_many_arguments)]
pub fn add_bezier_curve(m: &mut Matrix, x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
    add_parametric_curve(
        m,
        curve_coefficients([x0, x1, x2, x3], &BEZIER),
        curve_coefficients([y0, y1, y2, y3], &BEZIER),
    );
}

pub fn render_edges(m: &Matrix, picture: &mut Picture, color: &(usize, usize, usize)) {
    for edge in m.points().chunks_exact(2) {
        picture.draw_line(
            edge[0][0] as isize, edge[0][1] as isize, edge[0][2],
            edge[1][0] as isize, edge[1][1] as isize, edge[1][2],
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
    }

    #[test]
    fn circle_is_a_closed_even_edge_set() {
        let mut m = Matrix::new();
        add_circle(&mut m, 10.0, 20.0, 5.0, 30.0);

        assert_eq!(m.cols(), 2 * PARAMETRIC_STEPS);
        // consecutive segments share endpoints and the last closes the loop
        let points = m.points();
        for pair in points.chunks_exact(2).collect::<Vec<_>>().windows(2) {
            assert_eq!(pair[0][1], pair[1][0]);
        }
        assert_close(points[points.len() - 1][0], points[0][0]);
        assert_close(points[points.len() - 1][1], points[0][1]);
        // every sample keeps the circle's z
        assert!(points.iter().all(|p| p[2] == 5.0));
    }

    #[test]
    fn zero_radius_circle_is_degenerate_but_well_formed() {
        let mut m = Matrix::new();
        add_circle(&mut m, 3.0, 4.0, 0.0, 0.0);

        assert_eq!(m.cols(), 2 * PARAMETRIC_STEPS);
        assert!(m.points().iter().all(|p| p[0] == 3.0 && p[1] == 4.0));
    }

    #[test]
    fn hermite_interpolates_its_endpoints() {
        let mut m = Matrix::new();
        add_hermite_curve(&mut m, 10.0, 20.0, 300.0, 400.0, 1.0, 0.0, 0.0, 1.0);

        let points = m.points();
        assert_close(points[0][0], 10.0);
        assert_close(points[0][1], 20.0);
        assert_close(points[points.len() - 1][0], 300.0);
        assert_close(points[points.len() - 1][1], 400.0);
    }

    #[test]
    fn bezier_interpolates_first_and_last_control_points() {
        let mut m = Matrix::new();
        add_bezier_curve(&mut m, 0.0, 0.0, 50.0, 100.0, 150.0, 100.0, 200.0, 0.0);

        let points = m.points();
        assert_close(points[0][0], 0.0);
        assert_close(points[0][1], 0.0);
        assert_close(points[points.len() - 1][0], 200.0);
        assert_close(points[points.len() - 1][1], 0.0);
        assert_eq!(m.cols(), 2 * PARAMETRIC_STEPS);
    }

    #[test]
    fn bezier_midpoint_matches_de_casteljau() {
        let mut m = Matrix::new();
        add_bezier_curve(&mut m, 0.0, 0.0, 0.0, 8.0, 8.0, 8.0, 8.0, 0.0);

        // at t = 0.5 the cubic evaluates to (4, 6) for this control polygon
        let midpoint = m.points()[PARAMETRIC_STEPS - 1];
        assert_close(midpoint[0], 4.0);
        assert_close(midpoint[1], 6.0);
    }
}
