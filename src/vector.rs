pub type Vector = [f32; 3];

pub fn dot_product(a: &Vector, b: &Vector) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross_product(a: &Vector, b: &Vector) -> Vector {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

// Undefined on the zero vector (divides by a zero magnitude); callers
// guarantee non-degenerate input.
pub fn normalize_vector(v: &Vector) -> Vector {
    let magnitude = dot_product(v, v).sqrt();
    [v[0] / magnitude, v[1] / magnitude, v[2] / magnitude]
}

pub fn add_vectors(a: &Vector, b: &Vector) -> Vector {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn subtract_vectors(a: &Vector, b: &Vector) -> Vector {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale_vector(v: &Vector, s: f32) -> Vector {
    [v[0] * s, v[1] * s, v[2] * s]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_perpendicular_vectors_is_zero() {
        assert_eq!(dot_product(&[1.0, 0.0, 0.0], &[0.0, 3.0, 0.0]), 0.0);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(cross_product(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let n = normalize_vector(&[3.0, 0.0, 4.0]);
        assert!((dot_product(&n, &n).sqrt() - 1.0).abs() < 1e-6);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[2] - 0.8).abs() < 1e-6);
    }
}
