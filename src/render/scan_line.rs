//! Scanline triangle fill.
//!
//! Vertices are sorted by y, then horizontal spans walk from the bottom
//! vertex to the top. One pair of interpolants follows the long bottom-to-top
//! edge; the other follows bottom-to-middle and switches to middle-to-top at
//! the middle vertex. z interpolates along with x for the z-buffer.

use crate::{matrix::Point, picture::Picture};

pub fn flat(picture: &mut Picture, polygon: &[Point], color: &(usize, usize, usize)) {
    let mut vertices = [polygon[0], polygon[1], polygon[2]];
    vertices.sort_by(|a, b| a[1].total_cmp(&b[1]));
    let [bottom, middle, top] = vertices;

    let y_bottom = bottom[1] as isize;
    let y_middle = middle[1] as isize;
    let y_top = top[1] as isize;

    let long_span = y_top - y_bottom;
    let (dx0, dz0) = if long_span > 0 {
        ((top[0] - bottom[0]) / long_span as f32, (top[2] - bottom[2]) / long_span as f32)
    } else {
        (0.0, 0.0)
    };

    let lower_span = y_middle - y_bottom;
    let (mut dx1, mut dz1) = if lower_span > 0 {
        ((middle[0] - bottom[0]) / lower_span as f32, (middle[2] - bottom[2]) / lower_span as f32)
    } else {
        (0.0, 0.0)
    };

    let (mut x0, mut z0) = (bottom[0], bottom[2]);
    let (mut x1, mut z1) = (bottom[0], bottom[2]);
    let mut passed_middle = false;

    for y in y_bottom..=y_top {
        if !passed_middle && y >= y_middle {
            passed_middle = true;
            let upper_span = y_top - y_middle;
            if upper_span > 0 {
                dx1 = (top[0] - middle[0]) / upper_span as f32;
                dz1 = (top[2] - middle[2]) / upper_span as f32;
            }
            x1 = middle[0];
            z1 = middle[2];
        }

        picture.draw_scanline(x0 as isize, z0, x1 as isize, z1, y, color);

        x0 += dx0;
        z0 += dz0;
        x1 += dx1;
        z1 += dz1;
    }
}
