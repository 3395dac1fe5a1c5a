use elp_ephemeris::tables::{CoefficientTables, Table, TableFamily, Terms};

pub struct TableAnalysis {
    pub number: u8,
    pub description: &'static str,
    pub family: TableFamily,
    pub total_terms: usize,
    pub terms_above_threshold: usize,
    pub max_amplitude: f64,
    pub min_amplitude: f64,
}

pub struct FamilySummary {
    pub family: TableFamily,
    pub tables: usize,
    pub total_terms: usize,
    pub terms_above_threshold: usize,
}

fn amplitudes(table: &Table) -> Vec<f64> {
    match table.terms() {
        Terms::Main(terms) => terms.iter().map(|t| t.coeffs[0].abs()).collect(),
        Terms::Planetary(terms) => terms.iter().map(|t| t.amplitude.abs()).collect(),
        Terms::Tidal(terms) => terms.iter().map(|t| t.amplitude.abs()).collect(),
    }
}

pub fn analyze_table(table: &Table, threshold: f64) -> TableAnalysis {
    let stats = table.stats();
    let amps = amplitudes(table);
    let min_amp = amps.iter().copied().fold(f64::MAX, f64::min);

    TableAnalysis {
        number: table.number(),
        description: stats.spec.description,
        family: stats.spec.family,
        total_terms: stats.term_count,
        terms_above_threshold: amps.iter().filter(|&&a| a > threshold).count(),
        max_amplitude: stats.max_amplitude,
        min_amplitude: if min_amp == f64::MAX { 0.0 } else { min_amp },
    }
}

pub fn analyze_tables(tables: &CoefficientTables, threshold: f64) -> Vec<TableAnalysis> {
    tables.iter().map(|t| analyze_table(t, threshold)).collect()
}

pub fn summarize(analyses: &[TableAnalysis]) -> Vec<FamilySummary> {
    [
        TableFamily::MainProblem,
        TableFamily::Tidal,
        TableFamily::Planetary,
    ]
    .into_iter()
    .map(|family| {
        let members = analyses.iter().filter(|a| a.family == family);
        let mut summary = FamilySummary {
            family,
            tables: 0,
            total_terms: 0,
            terms_above_threshold: 0,
        };
        for a in members {
            summary.tables += 1;
            summary.total_terms += a.total_terms;
            summary.terms_above_threshold += a.terms_above_threshold;
        }
        summary
    })
    .collect()
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn print_analysis(analyses: &[TableAnalysis], threshold: f64) {
    println!("\nELP2000-82B Analysis (threshold: {:.0e}):", threshold);
    println!("{:-<90}", "");
    println!(
        "{:<6} {:<44} {:>8} {:>8} {:>10} {:>10}",
        "Table", "Description", "Terms", "Above", "Min amp", "Max amp"
    );
    println!("{:-<90}", "");

    for a in analyses {
        println!(
            "{:<6} {:<44} {:>8} {:>8} {:>10.2e} {:>10.2e}",
            format!("ELP{}", a.number),
            a.description,
            a.total_terms,
            a.terms_above_threshold,
            a.min_amplitude,
            a.max_amplitude
        );
    }

    println!("{:-<90}", "");
    for s in summarize(analyses) {
        println!(
            "  {}: {} tables, {} terms, {} above threshold ({:.1}%)",
            s.family,
            s.tables,
            s.total_terms,
            s.terms_above_threshold,
            percent(s.terms_above_threshold, s.total_terms)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elp_ephemeris::tables::{MainTerm, PlanetaryTerm, TidalTerm};

    fn main_table() -> Table {
        let term = |c0: f64| MainTerm {
            multipliers: [0, 0, 1, 0],
            coeffs: [c0, 0.0, 0.0, 0.0, 0.0, 0.0],
        };
        Table::new(1, Terms::Main(vec![term(22639.5), term(-0.004), term(12.0)])).unwrap()
    }

    fn tidal_table() -> Table {
        let term = TidalTerm {
            zeta: 0,
            multipliers: [0, 0, 0, 1],
            phase: 270.0,
            amplitude: 0.00006,
            period: None,
        };
        Table::new(4, Terms::Tidal(vec![term])).unwrap()
    }

    fn planetary_table() -> Table {
        Table::new(10, Terms::Planetary(Vec::<PlanetaryTerm>::new())).unwrap()
    }

    #[test]
    fn test_analyze_table_counts_threshold() {
        let a = analyze_table(&main_table(), 0.01);
        assert_eq!(a.number, 1);
        assert_eq!(a.family, TableFamily::MainProblem);
        assert_eq!(a.total_terms, 3);
        assert_eq!(a.terms_above_threshold, 2);
        assert_eq!(a.max_amplitude, 22639.5);
        assert_eq!(a.min_amplitude, 0.004);
    }

    #[test]
    fn test_analyze_empty_table() {
        let a = analyze_table(&planetary_table(), 1e-5);
        assert_eq!(a.total_terms, 0);
        assert_eq!(a.terms_above_threshold, 0);
        assert_eq!(a.min_amplitude, 0.0);
        assert_eq!(a.max_amplitude, 0.0);
    }

    #[test]
    fn test_summarize_groups_by_family() {
        let tables = CoefficientTables::empty()
            .with(main_table())
            .with(tidal_table())
            .with(planetary_table());
        let analyses = analyze_tables(&tables, 1e-5);
        let summary = summarize(&analyses);

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].family, TableFamily::MainProblem);
        assert_eq!(summary[0].total_terms, 3);
        assert_eq!(summary[1].family, TableFamily::Tidal);
        assert_eq!(summary[1].terms_above_threshold, 1);
        // An empty set still holds every table of each family.
        assert_eq!(summary[0].tables, 3);
        assert_eq!(summary[1].tables, 21);
        assert_eq!(summary[2].tables, 12);
        assert_eq!(summary[2].total_terms, 0);
    }

    #[test]
    fn test_percent_of_nothing_is_zero() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }
}
