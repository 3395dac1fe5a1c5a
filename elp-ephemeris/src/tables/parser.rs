//! Reader for the published ELP2000-82B table files.
//!
//! Every file starts with one title record followed by one record per term:
//!
//! | Family | Layout |
//! |--------|--------|
//! | Main problem | `4i3, 2x, f13.5, 6f12.2` |
//! | Figures, tides, relativity | `5i3, 1x, f9.5, f9.5, f9.3` |
//! | Planetary | `11i3, 1x, f9.5, f9.5, f9.3` |
//!
//! Integer multipliers are always read from their fixed `i3` columns. Real
//! fields are normally separated by blanks and are split on whitespace and on
//! a sign that follows a digit; when two fields touch (a nine-character phase
//! followed by a nine-character period, say) the fixed columns are used
//! instead. Blank records are skipped.

use elp_core::{ElpError, ElpResult};

use super::{MainTerm, PlanetaryTerm, Table, TableFamily, TableSpec, Terms, TidalTerm};

const INT_WIDTH: usize = 3;

/// Parses the text of file `ELP{number}`.
pub fn parse_table(number: u8, text: &str) -> ElpResult<Table> {
    let spec = TableSpec::for_number(number)
        .ok_or_else(|| ElpError::table_error(number, "table number must be 1-36"))?;

    let mut lines = text.lines().enumerate();
    if lines.next().is_none() {
        return Err(ElpError::parse_error(number, 1, "missing title record"));
    }

    let records = lines
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Record {
            table: number,
            line_no: i + 1,
            line,
        });

    let terms = match spec.family {
        TableFamily::MainProblem => {
            Terms::Main(records.map(|r| r.main_term()).collect::<ElpResult<_>>()?)
        }
        TableFamily::Planetary => Terms::Planetary(
            records
                .map(|r| r.planetary_term())
                .collect::<ElpResult<_>>()?,
        ),
        TableFamily::Tidal => {
            Terms::Tidal(records.map(|r| r.tidal_term()).collect::<ElpResult<_>>()?)
        }
    };

    Table::new(number, terms)
}

struct Record<'a> {
    table: u8,
    line_no: usize,
    line: &'a str,
}

impl Record<'_> {
    fn error(&self, message: &str) -> ElpError {
        ElpError::parse_error(self.table, self.line_no, message)
    }

    fn integers<const N: usize>(&self) -> ElpResult<[i32; N]> {
        let mut out = [0i32; N];
        for (i, value) in out.iter_mut().enumerate() {
            let start = i * INT_WIDTH;
            let field = self
                .line
                .get(start..start + INT_WIDTH)
                .ok_or_else(|| self.error(&format!("record too short for {} multipliers", N)))?;
            *value = field
                .trim()
                .parse()
                .map_err(|_| self.error(&format!("invalid multiplier {}: '{}'", i + 1, field)))?;
        }
        Ok(out)
    }

    fn tail(&self, start: usize) -> &str {
        self.line.get(start..).unwrap_or("")
    }

    fn main_term(&self) -> ElpResult<MainTerm> {
        let multipliers = self.integers::<4>()?;
        let start = 4 * INT_WIDTH;

        let reals = match split_reals(self.tail(start)) {
            Some(values) if values.len() >= 6 => values,
            _ => {
                let mut widths = vec![(start + 2, 13)];
                widths.extend((0..6).map(|i| (start + 15 + i * 12, 12)));
                let values = fixed_reals(self.line, &widths);
                if values.len() < 6 {
                    return Err(self.error("expected amplitude and 5 coefficients"));
                }
                values
            }
        };

        let mut coeffs = [0.0f64; 6];
        coeffs.copy_from_slice(&reals[..6]);
        Ok(MainTerm {
            multipliers,
            coeffs,
        })
    }

    fn tidal_term(&self) -> ElpResult<TidalTerm> {
        let ints = self.integers::<5>()?;
        let (phase, amplitude, period) = self.phase_amplitude_period(5 * INT_WIDTH)?;
        Ok(TidalTerm {
            zeta: ints[0],
            multipliers: [ints[1], ints[2], ints[3], ints[4]],
            phase,
            amplitude,
            period,
        })
    }

    fn planetary_term(&self) -> ElpResult<PlanetaryTerm> {
        let multipliers = self.integers::<11>()?;
        let (phase, amplitude, period) = self.phase_amplitude_period(11 * INT_WIDTH)?;
        Ok(PlanetaryTerm {
            multipliers,
            phase,
            amplitude,
            period,
        })
    }

    /// Reads `1x, f9.5, f9.5, f9.3` starting after the multipliers. The
    /// period may be missing or overflowed (`*********`).
    fn phase_amplitude_period(&self, start: usize) -> ElpResult<(f64, f64, Option<f64>)> {
        if let Some(values) = split_reals(self.tail(start)) {
            if (2..=3).contains(&values.len()) {
                return Ok((values[0], values[1], values.get(2).copied()));
            }
        }

        let phase = fixed_real(self.line, start + 1, 9);
        let amplitude = fixed_real(self.line, start + 10, 9);
        match (phase, amplitude) {
            (Some(phase), Some(amplitude)) => {
                Ok((phase, amplitude, fixed_real(self.line, start + 19, 9)))
            }
            _ => Err(self.error("expected phase and amplitude")),
        }
    }
}

/// Splits a run of real fields on blanks and on a sign following a digit or
/// a decimal point. Returns `None` if any piece is not a number.
fn split_reals(s: &str) -> Option<Vec<f64>> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if (c == '-' || c == '+')
            && matches!(prev, Some(p) if p.is_ascii_digit() || p == '.')
        {
            tokens.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current.push(c);
        }
        prev = Some(c);
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens.iter().map(|t| parse_real(t)).collect()
}

fn fixed_reals(line: &str, fields: &[(usize, usize)]) -> Vec<f64> {
    fields
        .iter()
        .map_while(|&(start, width)| fixed_real(line, start, width))
        .collect()
}

fn fixed_real(line: &str, start: usize, width: usize) -> Option<f64> {
    let end = (start + width).min(line.len());
    line.get(start..end).and_then(parse_real)
}

fn parse_real(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.replace(['D', 'd'], "E").parse().ok()
}
