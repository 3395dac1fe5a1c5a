//! Conversion of the series totals to rectangular J2000 ecliptic coordinates.
//!
//! The summed series give longitude and latitude in arcseconds and distance
//! in kilometers, referred to the mean ecliptic and equinox of date. Adding
//! the mean lunar longitude W1 and rescaling the distance yields spherical
//! coordinates of date; a Laskar-style P/Q precession rotation then brings
//! the rectangular vector to the inertial mean dynamical ecliptic and equinox
//! of J2000.

use elp_core::constants::ARCSEC_PER_RAD;
use elp_core::math::{sincos, sqrt};

use crate::time::TimePowers;

/// Mean longitude of the Moon W1, radians.
#[allow(clippy::excessive_precision)]
pub const MEAN_LONGITUDE: [f64; 5] = [
    3.810344430588308,
    8399.684731773914,
    -0.000028547283984772807,
    3.201709550047375e-8,
    -1.5363745554361197e-10,
];

/// Semi-major axis used to fit the distance series, km.
#[allow(clippy::excessive_precision)]
pub const A0: f64 = 384747.9806448954;

/// Semi-major axis of the theory, km.
#[allow(clippy::excessive_precision)]
pub const ATH: f64 = 384747.9806743165;

/// P and Q are `T * (c0 + c1 T + c2 T^2 + c3 T^3 + c4 T^4)`.
pub const PRECESSION_P: [f64; 5] = [
    0.10180391e-4,
    0.47020439e-6,
    -0.5417367e-9,
    -0.2507948e-11,
    0.463486e-14,
];

pub const PRECESSION_Q: [f64; 5] = [
    -0.113469002e-3,
    0.12372674e-6,
    0.1265417e-8,
    -0.1371808e-11,
    -0.320334e-14,
];

/// Spherical coordinates referred to the mean ecliptic of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Radians, not reduced.
    pub longitude: f64,
    /// Radians.
    pub latitude: f64,
    /// Kilometers.
    pub distance: f64,
}

/// Turns series totals (arcsec, arcsec, km) into geocentric spherical
/// coordinates of date.
///
/// The mean longitude is added term by term after the series total, so the
/// sum rounds the same way as the published routine.
pub fn spherical_of_date(totals: [f64; 3], time: &TimePowers) -> Spherical {
    let w = &MEAN_LONGITUDE;
    Spherical {
        longitude: totals[0] / ARCSEC_PER_RAD
            + w[0]
            + w[1] * time.t
            + w[2] * time.t2
            + w[3] * time.t3
            + w[4] * time.t4,
        latitude: totals[1] / ARCSEC_PER_RAD,
        distance: totals[2] * A0 / ATH,
    }
}

pub fn rectangular(s: &Spherical) -> [f64; 3] {
    let (sin_lat, cos_lat) = sincos(s.latitude);
    let (sin_lon, cos_lon) = sincos(s.longitude);
    let projected = s.distance * cos_lat;
    [
        projected * cos_lon,
        projected * sin_lon,
        s.distance * sin_lat,
    ]
}

/// Precession quantities P and Q at `time`.
pub fn precession_pq(time: &TimePowers) -> (f64, f64) {
    let p = time.polynomial(&PRECESSION_P) * time.t;
    let q = time.polynomial(&PRECESSION_Q) * time.t;
    (p, q)
}

/// Rotates a rectangular vector of date to the J2000 ecliptic frame.
///
/// P^2 + Q^2 stays far below 1 over the validated window but passes it
/// about seventy millennia out. The radicand is clamped at zero there, which
/// keeps the result finite; the matrix is then no longer a rotation.
pub fn precess_to_j2000(v: [f64; 3], time: &TimePowers) -> [f64; 3] {
    let (p, q) = precession_pq(time);

    let ra = 2.0 * sqrt((1.0 - p * p - q * q).max(0.0));
    let pq = 2.0 * p * q;
    let p2 = 1.0 - 2.0 * p * p;
    let q2 = 1.0 - 2.0 * q * q;
    let p = p * ra;
    let q = q * ra;

    let [x1, x2, x3] = v;
    [
        p2 * x1 + pq * x2 + p * x3,
        pq * x1 + q2 * x2 - q * x3,
        -p * x1 + q * x2 + (p2 + q2 - 1.0) * x3,
    ]
}

/// Full conversion from series totals to a J2000 rectangular vector in km.
pub fn to_j2000(totals: [f64; 3], time: &TimePowers) -> [f64; 3] {
    let of_date = rectangular(&spherical_of_date(totals, time));
    precess_to_j2000(of_date, time)
}
