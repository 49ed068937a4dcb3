//! Homogeneous-coordinate geometry matrices and 4x4 transforms.
//!
//! A `Matrix` is a growable list of 4-row columns, each column one point.
//! Edge matrices are consumed in column pairs, polygon matrices in triples.
//! `Transform` is a separate fixed 4x4 type so a transform can only ever be
//! premultiplied onto geometry; dimension mismatches are unrepresentable.

pub type Point = [f32; 4];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    points: Vec<Point>,
}

impl Matrix {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Appends one homogeneous column with w = 1.
    pub fn add_col(&mut self, x: f32, y: f32, z: f32) {
        self.points.push([x, y, z, 1.0]);
    }

    pub fn cols(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Row-major 4x4 homogeneous transform. Points are columns, so applying a
/// transform is the premultiplication `transform x geometry`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform([[f32; 4]; 4]);

impl Transform {
    pub fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self(m)
    }

    pub fn translation(dx: f32, dy: f32, dz: f32) -> Self {
        let mut transform = Self::identity();
        transform.0[0][3] = dx;
        transform.0[1][3] = dy;
        transform.0[2][3] = dz;
        transform
    }

    pub fn dilation(sx: f32, sy: f32, sz: f32) -> Self {
        let mut transform = Self::identity();
        transform.0[0][0] = sx;
        transform.0[1][1] = sy;
        transform.0[2][2] = sz;
        transform
    }

    /// Rotation about a principal axis, right-hand rule, angle in degrees.
    pub fn rotation(axis: Axis, degrees: f32) -> Self {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();

        let mut transform = Self::identity();
        match axis {
            Axis::X => {
                transform.0[1][1] = cos;
                transform.0[1][2] = -sin;
                transform.0[2][1] = sin;
                transform.0[2][2] = cos;
            }
            Axis::Y => {
                transform.0[0][0] = cos;
                transform.0[0][2] = sin;
                transform.0[2][0] = -sin;
                transform.0[2][2] = cos;
            }
            Axis::Z => {
                transform.0[0][0] = cos;
                transform.0[0][1] = -sin;
                transform.0[1][0] = sin;
                transform.0[1][1] = cos;
            }
        }
        transform
    }

    /// Matrix product `self x other`.
    pub fn compose(&self, other: &Transform) -> Transform {
        let mut result = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[i][j] += self.0[i][k] * other.0[k][j];
                }
            }
        }
        Transform(result)
    }

    /// Premultiplies every column of `m` in place.
    pub fn apply(&self, m: &mut Matrix) {
        for point in &mut m.points {
            let p = *point;
            for (i, row) in self.0.iter().enumerate() {
                point[i] = row[0] * p[0] + row[1] * p[1] + row[2] * p[2] + row[3] * p[3];
            }
        }
    }
}
