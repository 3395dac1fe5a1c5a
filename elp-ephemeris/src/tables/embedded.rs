//! Tables compiled into the library by the build script.
//!
//! `data/elp82b` in the crate directory is embedded with `include_str!` when
//! it holds all 36 files at build time.

use elp_core::{ElpError, ElpResult};

use super::{catalog, parse_table, CoefficientTables};

include!(concat!(env!("OUT_DIR"), "/embedded_tables.rs"));

impl CoefficientTables {
    /// Whether this build carries the tables.
    pub fn has_embedded() -> bool {
        EMBEDDED.is_some()
    }

    /// Parses the compiled-in tables.
    pub fn embedded() -> ElpResult<Self> {
        let texts = EMBEDDED.ok_or_else(|| {
            ElpError::data_error(
                "ELP2000-82B",
                "embed",
                "no tables compiled in; place ELP1..ELP36 in elp-ephemeris/data/elp82b and rebuild",
            )
        })?;
        parse_texts(&texts)
    }
}

fn parse_texts(texts: &[&str; 36]) -> ElpResult<CoefficientTables> {
    let tables = catalog()
        .zip(texts.iter())
        .map(|(spec, text)| parse_table(spec.number, text))
        .collect::<ElpResult<Vec<_>>>()?;
    CoefficientTables::try_from(tables)
}
