//! Summation of the ELP2000-82B trigonometric series.
//!
//! Each of the three accumulators handles one term family and adds
//! `amplitude * sin(argument)` into the longitude, latitude or distance
//! total selected by the table. Tables are visited in number order and every
//! term is added exactly once, so the floating-point summation order is the
//! same on every call.

mod main_problem;
mod planetary;
mod tides;

pub use main_problem::corrected_amplitude;

use elp_core::constants::TWOPI;
use elp_core::math::{fmod, sin};

use crate::arguments::MeanArguments;
use crate::tables::{Axis, CoefficientTables, Table, Terms};
use crate::time::TimePowers;

/// Running longitude, latitude and distance totals for one evaluation.
///
/// Angular totals are in arcseconds, the distance total in kilometers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    totals: [f64; 3],
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces `argument` modulo 2pi and adds `amplitude * sin(argument)`.
    #[inline]
    pub fn add_sine(&mut self, axis: Axis, amplitude: f64, argument: f64) {
        let y = fmod(argument, TWOPI);
        self.totals[axis.index()] += amplitude * sin(y);
    }

    pub fn totals(&self) -> [f64; 3] {
        self.totals
    }
}

/// Adds every term of `table` into `acc`.
pub fn accumulate(
    table: &Table,
    args: &MeanArguments,
    time: &TimePowers,
    acc: &mut Accumulator,
) {
    let spec = table.spec();
    match table.terms() {
        Terms::Main(terms) => main_problem::accumulate(terms, spec.axis, args, acc),
        Terms::Planetary(terms) => {
            // `Table::new` only pairs planetary records with a planetary spec.
            if let Some(layout) = spec.layout {
                planetary::accumulate(terms, layout, spec.scaling, spec.axis, args, time, acc);
            }
        }
        Terms::Tidal(terms) => {
            tides::accumulate(terms, spec.scaling, spec.axis, args, time, acc)
        }
    }
}

/// Sums all 36 tables at one epoch.
pub fn sum_tables(tables: &CoefficientTables, time: &TimePowers) -> [f64; 3] {
    let args = MeanArguments::evaluate(time);
    let mut acc = Accumulator::new();
    for table in tables.iter() {
        accumulate(table, &args, time, &mut acc);
    }
    acc.totals()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{MainTerm, PlanetaryTerm, SecularScaling, TableSpec, TidalTerm};
    use elp_core::constants::HALF_PI;

    fn unit_tidal() -> TidalTerm {
        // Constant argument of 90 degrees: contributes exactly the amplitude.
        TidalTerm {
            zeta: 0,
            multipliers: [0, 0, 0, 0],
            phase: 90.0,
            amplitude: 1.0,
            period: None,
        }
    }

    fn unit_planetary() -> PlanetaryTerm {
        PlanetaryTerm {
            multipliers: [0; 11],
            phase: 90.0,
            amplitude: 1.0,
            period: None,
        }
    }

    fn unit_table(number: u8) -> Table {
        let spec = TableSpec::for_number(number).unwrap();
        let terms = match spec.family {
            crate::tables::TableFamily::MainProblem => Terms::Main(vec![MainTerm {
                multipliers: [0, 0, 0, 0],
                coeffs: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            }]),
            crate::tables::TableFamily::Planetary => Terms::Planetary(vec![unit_planetary()]),
            crate::tables::TableFamily::Tidal => Terms::Tidal(vec![unit_tidal()]),
        };
        Table::new(number, terms).unwrap()
    }

    #[test]
    fn test_add_sine_reduces_argument() {
        let mut acc = Accumulator::new();
        acc.add_sine(Axis::Latitude, 2.0, HALF_PI + 10.0 * TWOPI);
        let totals = acc.totals();
        assert_eq!(totals[0], 0.0);
        assert!((totals[1] - 2.0).abs() < 1e-12);
        assert_eq!(totals[2], 0.0);
    }

    #[test]
    fn test_empty_tables_sum_to_zero() {
        let totals = sum_tables(&CoefficientTables::empty(), &TimePowers::from_centuries(0.3));
        assert_eq!(totals, [0.0; 3]);
    }

    #[test]
    fn test_each_table_routes_to_its_axis() {
        let time = TimePowers::from_centuries(0.0);
        for spec in crate::tables::catalog().filter(|s| s.number > 3) {
            let tables = CoefficientTables::empty().with(unit_table(spec.number));
            let totals = sum_tables(&tables, &time);
            let scale = match spec.scaling {
                SecularScaling::None => 1.0,
                _ => 0.0,
            };
            for axis in 0..3 {
                let expected = if axis == spec.axis.index() { scale } else { 0.0 };
                assert!(
                    (totals[axis] - expected).abs() < 1e-12,
                    "ELP{} axis {}: {}",
                    spec.number,
                    axis,
                    totals[axis]
                );
            }
        }
    }

    #[test]
    fn test_secular_scaling_applies_only_to_documented_windows() {
        let t = 2.0;
        let time = TimePowers::from_centuries(t);
        for spec in crate::tables::catalog().filter(|s| s.number > 3) {
            let tables = CoefficientTables::empty().with(unit_table(spec.number));
            let total = sum_tables(&tables, &time)[spec.axis.index()];
            let expected = match spec.number {
                7..=9 | 13..=15 | 19..=21 | 25..=27 => t,
                34..=36 => t * t,
                _ => 1.0,
            };
            assert!(
                (total - expected).abs() < 1e-12,
                "ELP{}: got {}, expected {}",
                spec.number,
                total,
                expected
            );
        }
    }

    #[test]
    fn test_tables_contribute_additively() {
        let time = TimePowers::from_centuries(0.0);
        let mut all = CoefficientTables::empty();
        for n in [4, 10, 22, 31] {
            all.insert(unit_table(n));
        }
        let totals = sum_tables(&all, &time);
        assert!((totals[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_summation_is_deterministic() {
        let time = TimePowers::from_centuries(-0.73);
        let mut tables = CoefficientTables::empty();
        for n in 1..=36 {
            tables.insert(unit_table(n));
        }
        let a = sum_tables(&tables, &time);
        let b = sum_tables(&tables, &time);
        for i in 0..3 {
            assert_eq!(a[i].to_bits(), b[i].to_bits());
        }
    }
}
