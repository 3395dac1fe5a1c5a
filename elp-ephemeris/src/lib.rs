//! Geocentric Moon positions from the ELP2000-82B lunar theory.
//!
//! The theory is a sum of 36 trigonometric series read from the published
//! coefficient files `ELP1` .. `ELP36`, followed by a rotation to the mean
//! ecliptic and equinox of J2000.
//!
//! The files are compiled in when `data/elp82b` holds them at build time
//! (see [`CoefficientTables::embedded`]); otherwise they are read from disk.
//!
//! ```no_run
//! use elp_ephemeris::Elp82bMoon;
//!
//! let moon = Elp82bMoon::from_dir("/usr/local/share/ephemeris/elp82b")?;
//! let [x, y, z] = moon.compute_position(2449000.5);
//! println!("{x:.5} {y:.5} {z:.5}");
//! # Ok::<(), elp_core::ElpError>(())
//! ```

pub mod arguments;
pub mod frame;
pub mod moon;
pub mod series;
pub mod tables;
pub mod time;

pub use moon::{compute_position, Elp82bMoon};
pub use tables::{parse_table, CoefficientTables, Table};
pub use time::TimePowers;
