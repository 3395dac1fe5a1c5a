//! Locating and reading the ELP2000-82B data files.
//!
//! The directory is taken from `ELP82B_DATA` when set, otherwise from the
//! first of a few conventional locations that holds the files.

use std::fs;
use std::path::{Path, PathBuf};

use elp_core::{ElpError, ElpResult};

use super::{catalog, file_name, parse_table, CoefficientTables, Table, TABLE_COUNT};

pub const DATA_DIR_ENV: &str = "ELP82B_DATA";

/// Directories searched, in order, when `ELP82B_DATA` is unset.
pub fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(home) = std::env::var("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".local/share/ephemeris/elp82b"));
        dirs.push(home.join("ephemeris/elp82b"));
    }
    dirs.push(PathBuf::from("/usr/local/share/ephemeris/elp82b"));
    dirs
}

/// Returns the first directory holding all 36 files.
pub fn find_data_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(DATA_DIR_ENV) {
        let p = PathBuf::from(path);
        return missing_files(&p).is_empty().then_some(p);
    }
    candidate_dirs()
        .into_iter()
        .find(|dir| missing_files(dir).is_empty())
}

/// Names of the data files absent from `dir`.
pub fn missing_files(dir: &Path) -> Vec<String> {
    (1..=TABLE_COUNT)
        .map(file_name)
        .filter(|name| !dir.join(name).is_file())
        .collect()
}

pub fn read_table(dir: &Path, number: u8) -> ElpResult<Table> {
    let name = file_name(number);
    let path = dir.join(&name);
    let text = fs::read_to_string(&path).map_err(|e| {
        ElpError::data_error(&name, "read", &format!("{}: {}", path.display(), e))
    })?;
    parse_table(number, &text)
}

impl CoefficientTables {
    /// Reads `ELP1` .. `ELP36` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> ElpResult<Self> {
        let dir = dir.as_ref();
        let missing = missing_files(dir);
        if !missing.is_empty() {
            return Err(ElpError::data_error(
                "ELP2000-82B",
                "open",
                &format!(
                    "{} of {} files missing in {} (first: {})",
                    missing.len(),
                    TABLE_COUNT,
                    dir.display(),
                    missing[0]
                ),
            ));
        }

        let tables = catalog()
            .map(|spec| read_table(dir, spec.number))
            .collect::<ElpResult<Vec<_>>>()?;
        Self::try_from(tables)
    }

    /// Reads the tables from the configured data directory.
    pub fn from_default_location() -> ElpResult<Self> {
        let dir = find_data_dir().ok_or_else(|| {
            ElpError::data_error(
                "ELP2000-82B",
                "locate",
                &format!(
                    "data files not found; set {} or install them in one of {:?}",
                    DATA_DIR_ENV,
                    candidate_dirs()
                ),
            )
        })?;
        Self::from_dir(dir)
    }
}
