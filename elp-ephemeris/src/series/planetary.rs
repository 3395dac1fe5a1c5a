//! Planetary perturbations: ELP10-21.

use elp_core::constants::PI;

use super::Accumulator;
use crate::arguments::MeanArguments;
use crate::tables::{Axis, PlanetaryLayout, PlanetaryTerm, SecularScaling};
use crate::time::TimePowers;

pub(super) fn accumulate(
    terms: &[PlanetaryTerm],
    layout: PlanetaryLayout,
    scaling: SecularScaling,
    axis: Axis,
    args: &MeanArguments,
    time: &TimePowers,
    acc: &mut Accumulator,
) {
    let [d, lp, l, f] = args.delaunay_linear;
    let [me, ve, em, ma, ju, sa, ur, ne] = args.planets;

    // Slots 8-11 of a record.
    let trailing = match layout {
        PlanetaryLayout::NeptuneDelaunay => [ne, d, l, f],
        PlanetaryLayout::Delaunay => [d, lp, l, f],
    };

    for term in terms {
        let x = scaling.apply(term.amplitude, time);
        let m = term.multipliers.map(f64::from);

        let mut y = term.phase * PI / 180.0
            + m[0] * me
            + m[1] * ve
            + m[2] * em
            + m[3] * ma
            + m[4] * ju
            + m[5] * sa
            + m[6] * ur;
        y += m[7] * trailing[0] + m[8] * trailing[1] + m[9] * trailing[2] + m[10] * trailing[3];

        acc.add_sine(axis, x, y);
    }
}
