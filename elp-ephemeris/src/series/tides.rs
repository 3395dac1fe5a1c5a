//! Tidal, relativistic, solar-eccentricity and figure perturbations:
//! ELP4-9 and ELP22-36.

use elp_core::constants::PI;

use super::Accumulator;
use crate::arguments::MeanArguments;
use crate::tables::{Axis, SecularScaling, TidalTerm};
use crate::time::TimePowers;

pub(super) fn accumulate(
    terms: &[TidalTerm],
    scaling: SecularScaling,
    axis: Axis,
    args: &MeanArguments,
    time: &TimePowers,
    acc: &mut Accumulator,
) {
    let [d, lp, l, f] = args.delaunay_linear;

    for term in terms {
        let x = scaling.apply(term.amplitude, time);
        let m = term.multipliers.map(f64::from);

        // Summed left to right in record order.
        let y = term.phase * PI / 180.0
            + m[0] * d
            + m[1] * lp
            + m[2] * l
            + m[3] * f
            + f64::from(term.zeta) * args.zeta;

        acc.add_sine(axis, x, y);
    }
}
