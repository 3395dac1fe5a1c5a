//! Main problem: ELP1 (longitude), ELP2 (latitude), ELP3 (distance).
//!
//! Amplitudes are published for the original ELP2000 constants and are
//! corrected here for the fitted values of the Moon's mean motion (delnu),
//! eccentricity (dele), inclination (delg), the Earth-Moon barycenter mean
//! motion (delnp) and eccentricity (delep).

use elp_core::constants::{ARCSEC_PER_RAD, HALF_PI};

use super::Accumulator;
use crate::arguments::MeanArguments;
use crate::tables::{Axis, MainTerm};

const RAD: f64 = ARCSEC_PER_RAD;
#[allow(clippy::excessive_precision)]
const W12: f64 = 1732559343.73604 / RAD;
const AM: f64 = 0.074801329518;
const ALPHA: f64 = 0.002571881335;
const DTASM: f64 = 2.0 * ALPHA / (3.0 * AM);

const DELNU: f64 = 0.55604 / RAD / W12;
const DELE: f64 = 0.01789 / RAD;
const DELG: f64 = -0.08066 / RAD;
const DELNP: f64 = -0.06424 / RAD / W12;
const DELEP: f64 = -0.12879 / RAD;

/// Amplitude of `term` after the constant corrections.
///
/// The distance series additionally rescales the base amplitude by
/// `1 - 2 delnu / 3` since it depends on the semi-major axis.
pub fn corrected_amplitude(term: &MainTerm, axis: Axis) -> f64 {
    let c = &term.coeffs;
    let tgv = c[1] + DTASM * c[5];
    let mut a = c[0];
    if axis == Axis::Distance {
        a -= 2.0 * a * DELNU / 3.0;
    }
    a + tgv * (DELNP - AM * DELNU) + c[2] * DELG + c[3] * DELE + c[4] * DELEP
}

pub(super) fn accumulate(
    terms: &[MainTerm],
    axis: Axis,
    args: &MeanArguments,
    acc: &mut Accumulator,
) {
    let [d, lp, l, f] = args.delaunay;
    for term in terms {
        let x = corrected_amplitude(term, axis);
        let [i0, i1, i2, i3] = term.multipliers;
        let mut y = i0 as f64 * d + i1 as f64 * lp + i2 as f64 * l + i3 as f64 * f;
        // Distance is a cosine series.
        if axis == Axis::Distance {
            y += HALF_PI;
        }
        acc.add_sine(axis, x, y);
    }
}
