//! Floating-point primitives routed through `libm`.
//!
//! The series sum thousands of sines of large arguments. Going through `libm`
//! instead of the platform intrinsics keeps results identical across targets.

/// Remainder with the sign of `x`, like C `fmod` and Rust's `%` on floats.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

#[inline]
pub fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    libm::sincos(x)
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Euclidean norm of a 3-vector.
#[inline]
pub fn norm3(v: [f64; 3]) -> f64 {
    libm::sqrt(v[0] * v[0] + v[1] * v[1] + v[2] * v[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PI, TWOPI};

    #[test]
    fn test_fmod_keeps_sign_of_dividend() {
        assert_eq!(fmod(-1.0, 360.0), -1.0);
        assert_eq!(fmod(361.0, 360.0), 1.0);
        assert_eq!(fmod(-7.0, TWOPI), -7.0 % TWOPI);
    }

    #[test]
    fn test_fmod_matches_rem_operator() {
        for x in [0.0, 1.5, -1.5, 8399.7, -8399.7, 1.0e6, -3.0e7] {
            assert_eq!(fmod(x, TWOPI).to_bits(), (x % TWOPI).to_bits(), "x = {}", x);
        }
    }

    #[test]
    fn test_sincos_agrees_with_separate_calls() {
        let (s, c) = sincos(0.75);
        assert_eq!(s, sin(0.75));
        assert_eq!(c, libm::cos(0.75));
    }

    #[test]
    fn test_sin_of_half_pi_is_one() {
        assert_eq!(sin(PI / 2.0), 1.0);
    }

    #[test]
    fn test_norm3_of_unit_axes() {
        assert_eq!(norm3([3.0, 4.0, 0.0]), 5.0);
        assert_eq!(norm3([0.0, 0.0, -2.0]), 2.0);
    }
}
