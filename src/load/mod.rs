// src/load/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

pub mod records;

pub use records::{CasualtyRecord, VehicleRecord};

/// Deserialize every row of `reader` by header name. Columns the record type
/// does not name are ignored; empty fields become `None`.
pub fn read_records<T, R>(reader: R, source: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize().enumerate() {
        let row: T =
            result.with_context(|| format!("CSV parse error in {} at record {}", source, idx))?;
        rows.push(row);
    }
    Ok(rows)
}

#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    let rows = read_records(file, &path.display().to_string())?;
    debug!(rows = rows.len(), "loaded");
    Ok(rows)
}

pub fn read_casualties<P: AsRef<Path>>(path: P) -> Result<Vec<CasualtyRecord>> {
    read_csv(path)
}

pub fn read_vehicles<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleRecord>> {
    read_csv(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,casualty_viz::load=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    #[test]
    fn test_read_casualties_ignores_extra_columns() -> Result<()> {
        init_test_logging();
        let content = "\
accident_index,accident_year,accident_reference,vehicle_reference,casualty_reference,casualty_class,sex_of_casualty,age_of_casualty,age_band_of_casualty,lsoa_of_casualty
2022010352073,2022,010352073,1,1,1,1,34,6,E01001342
2022010352573,2022,010352573,1,1,2,2,-1,-1,-1
2022010352575,2022,010352575,1,1,3,1,,,
";
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;

        let rows = read_casualties(tmp.path())?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].accident_index, "2022010352073");
        assert_eq!(rows[0].accident_year, Some(2022));
        assert_eq!(rows[0].age_of_casualty, Some(34));
        assert_eq!(rows[0].lsoa_of_casualty.as_deref(), Some("E01001342"));
        assert_eq!(rows[1].age_of_casualty, Some(-1));
        assert_eq!(rows[2].age_of_casualty, None);
        assert_eq!(rows[2].lsoa_of_casualty, None);
        Ok(())
    }

    #[test]
    fn test_read_vehicles_from_reader() -> Result<()> {
        let content = "\
accident_index,accident_year,vehicle_type,age_of_driver,generic_make_model
2022010352073,2022,9,45,FORD FIESTA
2022010352073,2022,9,23,-1
2022010352575,2022,1,,
";
        let rows: Vec<VehicleRecord> = read_records(Cursor::new(content), "inline")?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].generic_make_model.as_deref(), Some("FORD FIESTA"));
        assert_eq!(rows[1].generic_make_model.as_deref(), Some("-1"));
        assert_eq!(rows[1].age_of_driver, Some(23));
        assert_eq!(rows[2].age_of_driver, None);
        assert_eq!(rows[2].generic_make_model, None);
        Ok(())
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_vehicles("no-such-vehicles.csv").unwrap_err();
        assert!(format!("{:#}", err).contains("no-such-vehicles.csv"));
    }

    #[test]
    fn test_missing_join_column_is_an_error() {
        let content = "accident_year,age_of_casualty\n2022,30\n";
        let res: Result<Vec<CasualtyRecord>> = read_records(Cursor::new(content), "inline");
        assert!(res.is_err());
    }

    #[test]
    fn test_non_numeric_age_is_an_error() {
        let content = "accident_index,age_of_casualty\nA1,thirty\n";
        let res: Result<Vec<CasualtyRecord>> = read_records(Cursor::new(content), "inline");
        let err = res.unwrap_err();
        assert!(format!("{:#}", err).contains("record 0"));
    }
}
