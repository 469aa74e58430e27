//! The four analyses. Each one reads its own sources, renders its chart and
//! hands back what it computed.
use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::{
    aggregate::{self, ValueCounts, YearlyPivot},
    charts,
    config::Config,
    load::{self, CasualtyRecord, VehicleRecord},
    stats::{self, Bins, Describe},
};

#[derive(Debug, Clone)]
pub struct AgeDistribution {
    pub describe: Describe,
    pub kurtosis: f64,
    pub skewness: f64,
    pub bins: Bins,
}

impl AgeDistribution {
    pub fn from_casualties(casualties: &[CasualtyRecord], n_bins: usize) -> Result<Self> {
        let ages: Vec<f64> = casualties
            .iter()
            .filter_map(|c| c.age_of_casualty)
            .map(f64::from)
            .collect();
        Ok(Self {
            describe: stats::describe(&ages).context("age_of_casualty")?,
            kurtosis: stats::kurtosis(&ages),
            skewness: stats::skewness(&ages),
            bins: stats::histogram_bins(&ages, n_bins)?,
        })
    }

    pub fn print(&self) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        for (name, value) in self.describe.rows() {
            table.add_row(Row::new(vec![
                Cell::new(name).style_spec("b"),
                Cell::new(&format!("{:.6}", value)).style_spec("r"),
            ]));
        }
        println!("Descriptive Statistics:");
        table.printstd();
        println!("Kurtosis: {}", self.kurtosis);
        println!("Skewness: {}", self.skewness);
    }
}

#[derive(Debug, Clone)]
pub struct AgeBandShares {
    pub drivers: ValueCounts,
    pub casualties: ValueCounts,
}

impl AgeBandShares {
    pub fn from_records(vehicles: &[VehicleRecord], casualties: &[CasualtyRecord]) -> Self {
        Self {
            drivers: aggregate::age_band_counts(vehicles.iter().map(|v| v.age_of_driver)),
            casualties: aggregate::age_band_counts(casualties.iter().map(|c| c.age_of_casualty)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct YearlyModelTrend {
    /// Models ranked 1.. by joined-row count; rank 0 is left out.
    pub models: Vec<String>,
    pub pivot: YearlyPivot,
}

impl YearlyModelTrend {
    pub fn from_records(
        vehicles: &[VehicleRecord],
        casualties: &[CasualtyRecord],
        n_models: usize,
    ) -> Self {
        let models = aggregate::joined_model_counts(vehicles, casualties)
            .head(n_models)
            .ranked(1, n_models)
            .labels();
        let pivot = aggregate::yearly_pivot(vehicles, casualties, &models);
        Self { models, pivot }
    }
}

/// Everything one run produced, in chart order.
#[derive(Debug, Clone)]
pub struct Report {
    pub age_distribution: AgeDistribution,
    pub age_bands: AgeBandShares,
    pub top_models: ValueCounts,
    pub trend: YearlyModelTrend,
    pub charts: Vec<PathBuf>,
}

fn print_counts(counts: &ValueCounts, header: &str) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(vec![
        Cell::new(header).style_spec("bFg"),
        Cell::new("count").style_spec("bFg"),
    ]));
    for (label, count) in counts.entries() {
        table.add_row(Row::new(vec![
            Cell::new(label),
            Cell::new(&count.to_string()).style_spec("r"),
        ]));
    }
    table.printstd();
}

/// Histogram of casualty ages plus the statistics printout.
pub fn age_distribution(cfg: &Config, out_dir: &Path) -> Result<(AgeDistribution, PathBuf)> {
    let casualties = load::read_casualties(&cfg.sources.casualty)?;
    let result = AgeDistribution::from_casualties(&casualties, cfg.histogram_bins)?;

    let out = out_dir.join("age_distribution.png");
    charts::histogram_plot(
        &out,
        &result.bins,
        "Age of Casualty",
        "Frequency",
        "Age Distribution of Road Casualties",
    )?;
    result.print();
    info!(path = %out.display(), count = result.describe.count, "age distribution");
    Ok((result, out))
}

/// Age-band pies for drivers and for casualties.
pub fn age_band_shares(cfg: &Config, out_dir: &Path) -> Result<(AgeBandShares, Vec<PathBuf>)> {
    let vehicles = load::read_vehicles(&cfg.sources.vehicle)?;
    let casualties = load::read_casualties(&cfg.sources.casualty)?;
    let result = AgeBandShares::from_records(&vehicles, &casualties);

    print_counts(&result.drivers.head(5), "age_band");

    let drivers = out_dir.join("driver_age_bands.png");
    charts::pie_chart(
        &drivers,
        &result.drivers.values(),
        &result.drivers.labels(),
        "Age Bands Responsible for Accidents",
    )?;
    let affected = out_dir.join("casualty_age_bands.png");
    charts::pie_chart(
        &affected,
        &result.casualties.values(),
        &result.casualties.labels(),
        "Age Bands Most Affected by Accidents",
    )?;
    info!(
        drivers = result.drivers.total(),
        casualties = result.casualties.total(),
        "age bands"
    );
    Ok((result, vec![drivers, affected]))
}

/// Bar chart of the most frequent models after the top-ranked one.
pub fn top_models(cfg: &Config, out_dir: &Path) -> Result<(ValueCounts, PathBuf)> {
    let vehicles = load::read_vehicles(&cfg.sources.vehicle)?;
    let result = aggregate::top_models(&vehicles, cfg.top_models);

    let out = out_dir.join("top_models.png");
    charts::bar_chart(
        &out,
        &result.labels(),
        &result.values(),
        "Car Models",
        "Number of Casualties",
        &format!("Top {} Car Models Involved in Road Accidents", cfg.top_models),
    )?;
    info!(path = %out.display(), bars = result.len(), "top models");
    Ok((result, out))
}

/// Yearly casualty counts for the leading models over the multi-year sources.
pub fn yearly_model_trend(cfg: &Config, out_dir: &Path) -> Result<(YearlyModelTrend, PathBuf)> {
    let vehicles = load::read_vehicles(&cfg.sources.vehicle_last_5_years)?;
    let casualties = load::read_casualties(&cfg.sources.casualty_last_5_years)?;
    let result = YearlyModelTrend::from_records(&vehicles, &casualties, cfg.trend_models);

    let out = out_dir.join("yearly_model_trend.png");
    charts::line_plot(
        &out,
        &result.pivot,
        "Year",
        "Number of Casualties",
        "Yearly Trends of Casualties by Car Model",
        &result.models,
    )?;
    info!(
        path = %out.display(),
        years = result.pivot.rows.len(),
        models = result.models.len(),
        "yearly trend"
    );
    Ok((result, out))
}

pub fn run(cfg: &Config) -> Result<Report> {
    let out_dir = cfg.output_dir.as_path();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let (age_distribution, hist) = age_distribution(cfg, out_dir)?;
    let (age_bands, pies) = age_band_shares(cfg, out_dir)?;
    let (top_models, bar) = top_models(cfg, out_dir)?;
    let (trend, line) = yearly_model_trend(cfg, out_dir)?;

    let mut charts = vec![hist];
    charts.extend(pies);
    charts.push(bar);
    charts.push(line);

    Ok(Report {
        age_distribution,
        age_bands,
        top_models,
        trend,
        charts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn veh(idx: &str, year: i32, age: i32, model: &str) -> VehicleRecord {
        VehicleRecord {
            accident_index: idx.into(),
            accident_year: Some(year),
            age_of_driver: Some(age),
            generic_make_model: Some(model.into()),
        }
    }

    fn cas(idx: &str, age: Option<i32>) -> CasualtyRecord {
        CasualtyRecord {
            accident_index: idx.into(),
            accident_year: None,
            age_of_casualty: age,
            lsoa_of_casualty: Some("E01000001".into()),
        }
    }

    #[test]
    fn age_distribution_skips_missing_ages() -> Result<()> {
        let casualties = vec![cas("A", Some(10)), cas("A", None), cas("B", Some(30))];
        let d = AgeDistribution::from_casualties(&casualties, 15)?;
        assert_eq!(d.describe.count, 2);
        assert_eq!(d.bins.counts.iter().sum::<u64>(), 2);
        assert_eq!(d.bins.counts.len(), 15);
        Ok(())
    }

    #[test]
    fn age_distribution_without_ages_fails() {
        let casualties = vec![cas("A", None)];
        assert!(AgeDistribution::from_casualties(&casualties, 15).is_err());
    }

    #[test]
    fn age_band_shares_cover_every_row() {
        let vehicles = vec![veh("A", 2022, 12, "X"), veh("B", 2022, 60, "Y")];
        let casualties = vec![cas("A", Some(20)), cas("B", Some(5)), cas("B", Some(7))];
        let shares = AgeBandShares::from_records(&vehicles, &casualties);
        assert_eq!(shares.drivers.total(), 2);
        assert_eq!(shares.drivers.get("Teenager (12 - 20)"), Some(1));
        assert_eq!(shares.casualties.total(), 3);
        assert_eq!(shares.casualties.entries()[0], ("Child (<12)".to_string(), 2));
    }

    #[test]
    fn trend_drops_leading_model_and_keeps_rank_order() {
        // joined counts: -1 → 6, FIESTA → 4, CORSA → 3, POLO → 2, QASHQAI → 1
        let mut vehicles = Vec::new();
        let mut casualties = Vec::new();
        let mut next = 0;
        for (model, n) in [
            ("-1", 6),
            ("FORD FIESTA", 4),
            ("VAUXHALL CORSA", 3),
            ("VOLKSWAGEN POLO", 2),
            ("NISSAN QASHQAI", 1),
        ] {
            for k in 0..n {
                let idx = format!("ACC{next}");
                next += 1;
                vehicles.push(veh(&idx, 2018 + (k % 2), 40, model));
                casualties.push(cas(&idx, Some(30)));
            }
        }

        let trend = YearlyModelTrend::from_records(&vehicles, &casualties, 4);
        assert_eq!(
            trend.models,
            vec!["FORD FIESTA", "VAUXHALL CORSA", "VOLKSWAGEN POLO"]
        );
        assert_eq!(trend.pivot.columns, trend.models);
        assert_eq!(trend.pivot.years(), vec![2018, 2019]);
        assert_eq!(trend.pivot.cell(2018, "FORD FIESTA"), Some(2));
        assert_eq!(trend.pivot.cell(2019, "VAUXHALL CORSA"), Some(1));
        assert_eq!(trend.pivot.cell(2018, "-1"), None);
    }

    #[test]
    #[ignore = "needs system fonts"]
    fn run_writes_every_chart() -> Result<()> {
        use crate::config::Sources;

        let dir = tempfile::tempdir()?;
        let casualty = "\
accident_index,accident_year,age_of_casualty,lsoa_of_casualty
A1,2022,34,E01
A2,2022,8,E02
A3,2022,67,E03
";
        let vehicle = "\
accident_index,accident_year,age_of_driver,generic_make_model
A1,2022,45,-1
A2,2022,19,FORD FIESTA
A3,2022,52,VAUXHALL CORSA
A3,2022,12,-1
";
        let write = |name: &str, body: &str| -> Result<PathBuf> {
            let p = dir.path().join(name);
            fs::write(&p, body)?;
            Ok(p)
        };
        let cfg = Config {
            sources: Sources {
                casualty: write("cas.csv", casualty)?,
                vehicle: write("veh.csv", vehicle)?,
                vehicle_last_5_years: write("veh5.csv", vehicle)?,
                casualty_last_5_years: write("cas5.csv", casualty)?,
            },
            output_dir: dir.path().join("charts"),
            ..Config::default()
        };

        let report = run(&cfg)?;
        assert_eq!(report.charts.len(), 5);
        assert!(report.charts.iter().all(|p| p.exists()));
        assert_eq!(report.top_models.get("-1"), None);
        assert_eq!(report.trend.pivot.years(), vec![2022]);
        Ok(())
    }
}
