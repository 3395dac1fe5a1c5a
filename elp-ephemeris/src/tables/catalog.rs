//! The fixed layout of the 36 ELP2000-82B tables.
//!
//! A table's number alone decides which term family it holds, which output
//! axis it feeds, how its amplitudes grow with time and, for planetary
//! tables, the order of the trailing argument multipliers.

use std::fmt;

use crate::time::TimePowers;

pub const TABLE_COUNT: u8 = 36;

/// Output component a table contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Longitude,
    Latitude,
    Distance,
}

impl Axis {
    pub fn index(&self) -> usize {
        match self {
            Axis::Longitude => 0,
            Axis::Latitude => 1,
            Axis::Distance => 2,
        }
    }

    /// Tables cycle longitude, latitude, distance starting from ELP1.
    pub fn for_table(number: u8) -> Self {
        match (number.saturating_sub(1)) % 3 {
            0 => Axis::Longitude,
            1 => Axis::Latitude,
            _ => Axis::Distance,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => write!(f, "Longitude"),
            Axis::Latitude => write!(f, "Latitude"),
            Axis::Distance => write!(f, "Distance"),
        }
    }
}

/// Kind of records a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableFamily {
    /// Solar perturbations of the main problem, ELP1-3.
    MainProblem,
    /// Planetary perturbations, ELP10-21.
    Planetary,
    /// Earth and Moon figures, tides, relativity and solar eccentricity,
    /// ELP4-9 and ELP22-36.
    Tidal,
}

impl fmt::Display for TableFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFamily::MainProblem => write!(f, "main problem"),
            TableFamily::Planetary => write!(f, "planetary"),
            TableFamily::Tidal => write!(f, "tidal"),
        }
    }
}

/// Power of T multiplying every amplitude of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecularScaling {
    None,
    Linear,
    Quadratic,
}

impl SecularScaling {
    #[inline]
    pub fn apply(&self, amplitude: f64, time: &TimePowers) -> f64 {
        match self {
            SecularScaling::None => amplitude,
            SecularScaling::Linear => amplitude * time.t,
            SecularScaling::Quadratic => amplitude * time.t2,
        }
    }

}

/// Meaning of multiplier slots 8-11 in a planetary record.
///
/// The two planetary tables of the theory were published with different
/// argument sets. Mixing them up still produces plausible-looking numbers,
/// so the layout is fixed by table number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanetaryLayout {
    /// ELP10-15: Neptune, D, l, F.
    NeptuneDelaunay,
    /// ELP16-21: D, l', l, F.
    Delaunay,
}

impl PlanetaryLayout {
    pub fn for_table(number: u8) -> Self {
        if number < 16 {
            PlanetaryLayout::NeptuneDelaunay
        } else {
            PlanetaryLayout::Delaunay
        }
    }
}

/// Static description of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub number: u8,
    pub family: TableFamily,
    pub axis: Axis,
    pub scaling: SecularScaling,
    /// Set for planetary tables only.
    pub layout: Option<PlanetaryLayout>,
    pub description: &'static str,
}

impl TableSpec {
    /// Returns `None` unless `1 <= number <= 36`.
    pub fn for_number(number: u8) -> Option<Self> {
        let (family, scaling, description) = match number {
            1..=3 => (
                TableFamily::MainProblem,
                SecularScaling::None,
                "Main problem",
            ),
            4..=6 => (
                TableFamily::Tidal,
                SecularScaling::None,
                "Earth figure perturbations",
            ),
            7..=9 => (
                TableFamily::Tidal,
                SecularScaling::Linear,
                "Earth figure perturbations (t)",
            ),
            10..=12 => (
                TableFamily::Planetary,
                SecularScaling::None,
                "Planetary perturbations, table 1",
            ),
            13..=15 => (
                TableFamily::Planetary,
                SecularScaling::Linear,
                "Planetary perturbations, table 1 (t)",
            ),
            16..=18 => (
                TableFamily::Planetary,
                SecularScaling::None,
                "Planetary perturbations, table 2",
            ),
            19..=21 => (
                TableFamily::Planetary,
                SecularScaling::Linear,
                "Planetary perturbations, table 2 (t)",
            ),
            22..=24 => (TableFamily::Tidal, SecularScaling::None, "Tidal effects"),
            25..=27 => (
                TableFamily::Tidal,
                SecularScaling::Linear,
                "Tidal effects (t)",
            ),
            28..=30 => (
                TableFamily::Tidal,
                SecularScaling::None,
                "Moon figure perturbations",
            ),
            31..=33 => (
                TableFamily::Tidal,
                SecularScaling::None,
                "Relativistic perturbations",
            ),
            34..=36 => (
                TableFamily::Tidal,
                SecularScaling::Quadratic,
                "Solar eccentricity perturbations (t^2)",
            ),
            _ => return None,
        };

        let layout = match family {
            TableFamily::Planetary => Some(PlanetaryLayout::for_table(number)),
            _ => None,
        };

        Some(Self {
            number,
            family,
            axis: Axis::for_table(number),
            scaling,
            layout,
            description,
        })
    }

    /// Name of the published data file, e.g. `ELP17`.
    pub fn file_name(&self) -> String {
        file_name(self.number)
    }
}

pub fn file_name(number: u8) -> String {
    format!("ELP{}", number)
}

/// All 36 descriptors in evaluation order.
pub fn catalog() -> impl Iterator<Item = TableSpec> {
    (1..=TABLE_COUNT).filter_map(TableSpec::for_number)
}
