//! Mean arguments of the ELP2000-82B series.
//!
//! The Delaunay arguments D (mean elongation), l' (Sun mean anomaly),
//! l (Moon mean anomaly) and F (argument of latitude) drive every table. The
//! main problem uses their full quartic expressions; planetary and tidal
//! tables use the truncation to the first two coefficients. The tidal tables
//! also use Zeta, the mean longitude of the Moon referred to the J2000 equinox
//! plus the general precession in longitude. The planetary tables add the mean
//! longitudes of the eight planets.
//!
//! Nothing here is reduced to [0, 2pi): reduction happens right before the
//! sine of each term.

use crate::time::TimePowers;

/// Polynomial coefficients (radians, powers of Julian centuries) for
/// D, l', l, F, in that order.
#[allow(clippy::excessive_precision)]
pub const DELAUNAY: [[f64; 5]; 4] = [
    [
        5.198466741027443,
        7771.377146811758,
        -0.00002844935162118868,
        3.1973462269173895e-8,
        -1.5436467606527627e-10,
    ],
    [
        -0.04312518020812495,
        628.301955168488,
        -0.000002680534842854624,
        7.126761112310179e-10,
        7.272205216643039e-13,
    ],
    [
        2.3555558982657994,
        8328.691426955555,
        0.00015702775761561094,
        2.504111144298864e-7,
        -1.1863390776750345e-9,
    ],
    [
        1.627905233371468,
        8433.466158130539,
        -0.0000593921000043237,
        -4.949947684128362e-9,
        2.021673050226763e-11,
    ],
];

/// Zeta = ZETA[0] + ZETA[1] * T.
#[allow(clippy::excessive_precision)]
pub const ZETA: [f64; 2] = [3.810344430588308, 8399.709113522267];

/// Mean longitudes of Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus
/// and Neptune as `[constant, rate]`.
#[allow(clippy::excessive_precision)]
pub const PLANETS: [[f64; 2]; 8] = [
    [4.4026088424029615, 2608.7903141574106],
    [3.1761466969075944, 1021.3285546211089],
    [1.753470343150658, 628.3075849621554],
    [6.203480913399945, 334.06124314922965],
    [0.5995464973886735, 52.96909650947205],
    [0.8740167565184808, 21.329909543800007],
    [5.481293871604991, 7.4781598567143535],
    [5.311886286783467, 3.813303563758456],
];

pub const D: usize = 0;
pub const L_PRIME: usize = 1;
pub const L: usize = 2;
pub const F: usize = 3;

/// All angles needed by the accumulators for one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanArguments {
    /// D, l', l, F from the full quartic polynomials.
    pub delaunay: [f64; 4],
    /// D, l', l, F truncated to `c0 + c1 T`.
    pub delaunay_linear: [f64; 4],
    pub zeta: f64,
    pub planets: [f64; 8],
}

impl MeanArguments {
    pub fn evaluate(time: &TimePowers) -> Self {
        let t = time.t;
        let delaunay = DELAUNAY.map(|c| c[0] + (c[1] + (c[2] + (c[3] + c[4] * t) * t) * t) * t);
        let delaunay_linear = DELAUNAY.map(|c| c[0] + c[1] * t);
        let planets = PLANETS.map(|p| p[0] + p[1] * t);

        Self {
            delaunay,
            delaunay_linear,
            zeta: ZETA[0] + ZETA[1] * t,
            planets,
        }
    }
}
