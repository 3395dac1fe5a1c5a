//! Julian Date to Julian centuries from J2000.0.

use elp_core::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Powers of T, the time in Julian centuries (TDB) since J2000.0.
///
/// Higher powers are built by repeated multiplication so every consumer sees
/// the same rounded values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePowers {
    pub t: f64,
    pub t2: f64,
    pub t3: f64,
    pub t4: f64,
}

impl TimePowers {
    pub fn from_centuries(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self { t, t2, t3, t4 }
    }

    /// Any finite Julian Date is accepted. The theory is validated for roughly
    /// the years 1000 to 3000 and extrapolates silently outside that window.
    pub fn from_julian_date(jd: f64) -> Self {
        Self::from_centuries(centuries_since_j2000(jd))
    }

    /// `c0 + c1 T + c2 T^2 + c3 T^3 + c4 T^4`.
    #[inline]
    pub fn polynomial(&self, c: &[f64; 5]) -> f64 {
        c[0] + c[1] * self.t + c[2] * self.t2 + c[3] * self.t3 + c[4] * self.t4
    }
}

#[inline]
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_is_time_zero() {
        let time = TimePowers::from_julian_date(J2000_JD);
        assert_eq!(time.t, 0.0);
        assert_eq!(time.t2, 0.0);
        assert_eq!(time.t4, 0.0);
    }

    #[test]
    fn test_one_century_after_j2000() {
        let time = TimePowers::from_julian_date(J2000_JD + DAYS_PER_JULIAN_CENTURY);
        assert_eq!(time.t, 1.0);
        assert_eq!(time.t3, 1.0);
    }

    #[test]
    fn test_powers_are_repeated_products() {
        let time = TimePowers::from_centuries(-1.37);
        assert_eq!(time.t2, -1.37 * -1.37);
        assert_eq!(time.t3, time.t2 * -1.37);
        assert_eq!(time.t4, time.t3 * -1.37);
    }

    #[test]
    fn test_polynomial_at_two_centuries() {
        let time = TimePowers::from_centuries(2.0);
        let value = time.polynomial(&[1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(value, 31.0);
    }
}
