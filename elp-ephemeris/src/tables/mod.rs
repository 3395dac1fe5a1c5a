//! Coefficient tables of the ELP2000-82B theory.
//!
//! The 36 published files `ELP1` .. `ELP36` are read once and kept as an
//! immutable [`CoefficientTables`] set. Parsing lives in [`parser`], the
//! per-table layout in [`catalog`], data directory lookup in [`source`] and
//! the compiled-in copy in [`embedded`].
//! The summation code only sees the typed records defined here, so it can be
//! exercised against hand-built tables.

pub mod catalog;
pub mod embedded;
pub mod parser;
pub mod source;

use elp_core::{ElpError, ElpResult};

pub use catalog::{
    catalog, file_name, Axis, PlanetaryLayout, SecularScaling, TableFamily, TableSpec,
    TABLE_COUNT,
};
pub use parser::parse_table;

/// Main-problem record: multipliers of D, l', l, F and the amplitude followed
/// by its sensitivities to the fitted lunar constants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MainTerm {
    pub multipliers: [i32; 4],
    pub coeffs: [f64; 6],
}

/// Planetary record: multipliers of Me, Ve, Earth, Ma, Ju, Sa, Ur followed by
/// four slots whose meaning depends on the [`PlanetaryLayout`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanetaryTerm {
    pub multipliers: [i32; 11],
    /// Degrees.
    pub phase: f64,
    pub amplitude: f64,
    /// Days. Informational only.
    pub period: Option<f64>,
}

/// Figure, tidal, relativistic or solar eccentricity record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TidalTerm {
    pub zeta: i32,
    pub multipliers: [i32; 4],
    /// Degrees.
    pub phase: f64,
    pub amplitude: f64,
    /// Days. Informational only.
    pub period: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terms {
    Main(Vec<MainTerm>),
    Planetary(Vec<PlanetaryTerm>),
    Tidal(Vec<TidalTerm>),
}

impl Terms {
    pub fn family(&self) -> TableFamily {
        match self {
            Terms::Main(_) => TableFamily::MainProblem,
            Terms::Planetary(_) => TableFamily::Planetary,
            Terms::Tidal(_) => TableFamily::Tidal,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Terms::Main(t) => t.len(),
            Terms::Planetary(t) => t.len(),
            Terms::Tidal(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn empty(family: TableFamily) -> Self {
        match family {
            TableFamily::MainProblem => Terms::Main(Vec::new()),
            TableFamily::Planetary => Terms::Planetary(Vec::new()),
            TableFamily::Tidal => Terms::Tidal(Vec::new()),
        }
    }
}

/// One numbered table whose records match the family of its number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTable"))]
pub struct Table {
    number: u8,
    #[cfg_attr(feature = "serde", serde(skip))]
    spec: TableSpec,
    terms: Terms,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTable {
    number: u8,
    terms: Terms,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTable> for Table {
    type Error = ElpError;

    fn try_from(raw: RawTable) -> ElpResult<Self> {
        Table::new(raw.number, raw.terms)
    }
}

impl Table {
    pub fn new(number: u8, terms: Terms) -> ElpResult<Self> {
        let spec = TableSpec::for_number(number)
            .ok_or_else(|| ElpError::table_error(number, "table number must be 1-36"))?;
        if spec.family != terms.family() {
            return Err(ElpError::table_error(
                number,
                &format!(
                    "expected {} records, got {} records",
                    spec.family,
                    terms.family()
                ),
            ));
        }
        Ok(Self {
            number,
            spec,
            terms,
        })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    pub fn terms(&self) -> &Terms {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        let max_amplitude = match &self.terms {
            Terms::Main(t) => t.iter().map(|m| m.coeffs[0].abs()).fold(0.0, f64::max),
            Terms::Planetary(t) => t.iter().map(|p| p.amplitude.abs()).fold(0.0, f64::max),
            Terms::Tidal(t) => t.iter().map(|p| p.amplitude.abs()).fold(0.0, f64::max),
        };
        TableStats {
            spec: self.spec,
            term_count: self.len(),
            max_amplitude,
        }
    }
}

/// Summary used by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub spec: TableSpec,
    pub term_count: usize,
    /// Arcseconds for angular tables, kilometers for distance tables.
    pub max_amplitude: f64,
}

/// The complete, immutable set of 36 tables ordered by number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Table>", into = "Vec<Table>"))]
pub struct CoefficientTables {
    tables: Vec<Table>,
}

impl CoefficientTables {
    /// A set where every table has no records. Evaluating it yields the mean
    /// orbit with zero distance, which is only useful as a starting point for
    /// [`insert`](Self::insert).
    pub fn empty() -> Self {
        let tables = catalog()
            .map(|spec| Table {
                number: spec.number,
                spec,
                terms: Terms::empty(spec.family),
            })
            .collect();
        Self { tables }
    }

    /// Replaces the table with the same number.
    pub fn insert(&mut self, table: Table) {
        let index = usize::from(table.number - 1);
        self.tables[index] = table;
    }

    pub fn with(mut self, table: Table) -> Self {
        self.insert(table);
        self
    }

    /// Tables in evaluation order, ELP1 first.
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn get(&self, number: u8) -> Option<&Table> {
        number
            .checked_sub(1)
            .and_then(|i| self.tables.get(usize::from(i)))
    }

    pub fn total_terms(&self) -> usize {
        self.tables.iter().map(Table::len).sum()
    }

    pub fn stats(&self) -> Vec<TableStats> {
        self.tables.iter().map(Table::stats).collect()
    }
}

impl TryFrom<Vec<Table>> for CoefficientTables {
    type Error = ElpError;

    fn try_from(tables: Vec<Table>) -> ElpResult<Self> {
        if tables.len() != usize::from(TABLE_COUNT) {
            return Err(ElpError::table_error(
                0,
                &format!("expected {} tables, got {}", TABLE_COUNT, tables.len()),
            ));
        }
        for (i, table) in tables.iter().enumerate() {
            let expected = i as u8 + 1;
            if table.number != expected {
                return Err(ElpError::table_error(
                    table.number,
                    &format!("found at position {}, expected ELP{}", i + 1, expected),
                ));
            }
        }
        Ok(Self { tables })
    }
}

impl From<CoefficientTables> for Vec<Table> {
    fn from(set: CoefficientTables) -> Self {
        set.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tidal(amplitude: f64) -> TidalTerm {
        TidalTerm {
            zeta: 0,
            multipliers: [0, 0, 1, 0],
            phase: 90.0,
            amplitude,
            period: Some(27.55),
        }
    }

    #[test]
    fn test_table_rejects_wrong_family() {
        let err = Table::new(10, Terms::Tidal(vec![tidal(1.0)])).unwrap_err();
        assert!(err.to_string().contains("ELP10"));
        assert!(err.to_string().contains("planetary"));
    }

    #[test]
    fn test_table_rejects_unknown_number() {
        assert!(Table::new(0, Terms::Main(vec![])).is_err());
        assert!(Table::new(37, Terms::Tidal(vec![])).is_err());
    }

    #[test]
    fn test_empty_set_has_all_families() {
        let set = CoefficientTables::empty();
        assert_eq!(set.iter().count(), 36);
        assert_eq!(set.total_terms(), 0);
        for table in set.iter() {
            assert_eq!(table.terms().family(), table.spec().family);
        }
    }

    #[test]
    fn test_insert_replaces_by_number() {
        let table = Table::new(25, Terms::Tidal(vec![tidal(1.0), tidal(-3.0)])).unwrap();
        let set = CoefficientTables::empty().with(table);
        assert_eq!(set.get(25).unwrap().len(), 2);
        assert_eq!(set.total_terms(), 2);
        assert!(set.get(0).is_none());
        assert!(set.get(37).is_none());
    }

    #[test]
    fn test_stats_report_largest_amplitude() {
        let table = Table::new(4, Terms::Tidal(vec![tidal(0.5), tidal(-2.5)])).unwrap();
        let stats = table.stats();
        assert_eq!(stats.term_count, 2);
        assert_eq!(stats.max_amplitude, 2.5);
        assert_eq!(stats.spec.description, "Earth figure perturbations");
    }

    #[test]
    fn test_try_from_requires_36_ordered_tables() {
        let mut tables: Vec<Table> = CoefficientTables::empty().into();
        assert!(CoefficientTables::try_from(tables.clone()).is_ok());

        tables.swap(3, 4);
        assert!(CoefficientTables::try_from(tables.clone()).is_err());

        tables.truncate(35);
        let err = CoefficientTables::try_from(tables).unwrap_err();
        assert!(err.to_string().contains("expected 36 tables"));
    }

    #[test]
    fn test_main_term_stats_use_first_coefficient() {
        let term = MainTerm {
            multipliers: [0, 0, 1, 0],
            coeffs: [-22639.5, 0.0, 0.0, 412529.6, 0.0, 0.0],
        };
        let table = Table::new(1, Terms::Main(vec![term])).unwrap();
        assert_eq!(table.stats().max_amplitude, 22639.5);
    }
}
