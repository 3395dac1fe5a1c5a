pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

/// Arcseconds per radian, evaluated as `648000 / PI` so that it rounds
/// identically to the runtime quotient used by the lunar series.
pub const ARCSEC_PER_RAD: f64 = 648000.0 / PI;

/// Mean sidereal month in days, used by sanity checks on lunar motion.
pub const SIDEREAL_MONTH_DAYS: f64 = 27.321661;

/// Bounds on the geocentric lunar distance in kilometers (perigee, apogee).
pub const MOON_DISTANCE_RANGE_KM: (f64, f64) = (356_000.0, 407_000.0);
