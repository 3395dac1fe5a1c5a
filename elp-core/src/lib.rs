//! Shared building blocks for the ELP2000-82B lunar ephemeris.
//!
//! `elp-core` holds the pieces that do not depend on the coefficient tables:
//! time and angle constants, the `libm`-backed math wrappers used for
//! reproducible trigonometry, and the [`ElpError`] type reported at the data
//! boundary.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | J2000 epoch, century length, angle conversions |
//! | [`math`] | `fmod`, `sin`, `sincos`, `sqrt` through `libm` |
//! | [`errors`] | [`ElpError`] and [`ElpResult`] |
//!
//! ```
//! use elp_core::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
//!
//! let t = (2451545.0 + 36525.0 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
//! assert_eq!(t, 1.0);
//! ```

pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{ElpError, ElpResult};

pub mod test_helpers;
