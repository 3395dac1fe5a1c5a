//! ELP2000-82B Lunar Ephemeris
//!
//! Geocentric rectangular coordinates of the Moon from the ELP2000-82B
//! semi-analytical theory of Chapront-Touzé & Chapront (1983), referred to
//! the inertial mean dynamical ecliptic and equinox of J2000. Positions are
//! in kilometers.

use std::path::Path;
use std::sync::OnceLock;

use elp_core::ElpResult;

use crate::frame;
use crate::series;
use crate::tables::CoefficientTables;
use crate::time::TimePowers;

/// Evaluator bound to one immutable coefficient table set.
#[derive(Debug, Clone)]
pub struct Elp82bMoon {
    tables: CoefficientTables,
}

impl Elp82bMoon {
    pub fn new(tables: CoefficientTables) -> Self {
        Self { tables }
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> ElpResult<Self> {
        CoefficientTables::from_dir(dir).map(Self::new)
    }

    pub fn from_default_location() -> ElpResult<Self> {
        CoefficientTables::from_default_location().map(Self::new)
    }

    /// Uses the tables compiled into this build.
    pub fn embedded() -> ElpResult<Self> {
        CoefficientTables::embedded().map(Self::new)
    }

    /// Compiled-in tables when present, otherwise the default data location.
    pub fn load() -> ElpResult<Self> {
        if CoefficientTables::has_embedded() {
            Self::embedded()
        } else {
            Self::from_default_location()
        }
    }

    pub fn tables(&self) -> &CoefficientTables {
        &self.tables
    }

    /// Raw longitude and latitude (arcsec) and distance (km) series totals
    /// referred to the mean ecliptic of date, before the mean longitude is
    /// added.
    pub fn series_totals(&self, jd: f64) -> [f64; 3] {
        series::sum_tables(&self.tables, &TimePowers::from_julian_date(jd))
    }

    /// Geocentric position `[X, Y, Z]` in km for a TDB Julian Date.
    ///
    /// Any finite date is accepted; accuracy degrades outside roughly the
    /// years 1000 to 3000.
    pub fn compute_position(&self, jd: f64) -> [f64; 3] {
        let time = TimePowers::from_julian_date(jd);
        let totals = series::sum_tables(&self.tables, &time);
        frame::to_j2000(totals, &time)
    }
}

static SHARED: OnceLock<Elp82bMoon> = OnceLock::new();

/// Process-wide evaluator, loaded with [`Elp82bMoon::load`] on first use.
///
/// Builds with embedded tables never fail here. A failed load is not cached,
/// so a later call can succeed once the files are installed.
pub fn shared() -> ElpResult<&'static Elp82bMoon> {
    if let Some(moon) = SHARED.get() {
        return Ok(moon);
    }
    let moon = Elp82bMoon::load()?;
    Ok(SHARED.get_or_init(|| moon))
}

/// Geocentric lunar position in km (J2000 ecliptic) for a TDB Julian Date.
///
/// Errors only when the build has no embedded tables and none are installed.
pub fn compute_position(jd: f64) -> ElpResult<[f64; 3]> {
    Ok(shared()?.compute_position(jd))
}
