use std::collections::{BTreeMap, HashMap};

use super::counts::ValueCounts;
use crate::load::{CasualtyRecord, VehicleRecord};

/// Counts by year (rows) × category (columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyPivot {
    pub columns: Vec<String>,
    /// Ascending by year; each row has one cell per column.
    pub rows: Vec<(i32, Vec<u64>)>,
}

impl YearlyPivot {
    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|(y, _)| *y).collect()
    }

    pub fn cell(&self, year: i32, column: &str) -> Option<u64> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, cells)| cells[col])
    }

    /// The values of one column, in year order.
    pub fn series(&self, col: usize) -> Vec<(i32, u64)> {
        self.rows.iter().map(|(y, cells)| (*y, cells[col])).collect()
    }

    pub fn max_cell(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|(_, cells)| cells.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Default, Clone, Copy)]
struct AccidentCasualties {
    total: u64,
    with_lsoa: u64,
}

fn casualties_by_accident(casualties: &[CasualtyRecord]) -> HashMap<&str, AccidentCasualties> {
    let mut by_accident: HashMap<&str, AccidentCasualties> = HashMap::new();
    for c in casualties {
        let entry = by_accident.entry(c.accident_index.as_str()).or_default();
        entry.total += 1;
        if c.lsoa_of_casualty.is_some() {
            entry.with_lsoa += 1;
        }
    }
    by_accident
}

/// Value counts of `generic_make_model` over the inner join of vehicles and
/// casualties on `accident_index`. Each vehicle contributes one row per
/// casualty of its accident.
pub fn joined_model_counts(
    vehicles: &[VehicleRecord],
    casualties: &[CasualtyRecord],
) -> ValueCounts {
    let by_accident = casualties_by_accident(casualties);
    let mut counts: HashMap<String, u64> = HashMap::new();
    for v in vehicles {
        let (Some(model), Some(c)) = (
            v.generic_make_model.as_ref(),
            by_accident.get(v.accident_index.as_str()),
        ) else {
            continue;
        };
        *counts.entry(model.clone()).or_insert(0) += c.total;
    }
    ValueCounts::from_counts(counts)
}

/// Joined rows per vehicle year × model, restricted to `models` and counting
/// only casualties with a recorded LSOA. Column order follows `models`.
/// Years come from the vehicle side; vehicles with no year are skipped.
pub fn yearly_pivot(
    vehicles: &[VehicleRecord],
    casualties: &[CasualtyRecord],
    models: &[String],
) -> YearlyPivot {
    let by_accident = casualties_by_accident(casualties);
    let column_of: HashMap<&str, usize> = models
        .iter()
        .enumerate()
        .map(|(i, m)| (m.as_str(), i))
        .collect();

    let mut rows: BTreeMap<i32, Vec<u64>> = BTreeMap::new();
    for v in vehicles {
        let Some(col) = v
            .generic_make_model
            .as_deref()
            .and_then(|m| column_of.get(m).copied())
        else {
            continue;
        };
        let Some(c) = by_accident.get(v.accident_index.as_str()) else {
            continue;
        };
        let Some(year) = v.accident_year else {
            continue;
        };
        rows.entry(year).or_insert_with(|| vec![0; models.len()])[col] += c.with_lsoa;
    }

    YearlyPivot {
        columns: models.to_vec(),
        rows: rows.into_iter().collect(),
    }
}
