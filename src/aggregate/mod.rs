pub mod age_band;
pub mod counts;
pub mod pivot;

pub use age_band::{binnify, AgeBand};
pub use counts::{value_counts, ValueCounts};
pub use pivot::{joined_model_counts, yearly_pivot, YearlyPivot};

use crate::load::VehicleRecord;

/// Age-band frequencies for a column of optional ages.
pub fn age_band_counts<I>(ages: I) -> ValueCounts
where
    I: IntoIterator<Item = Option<i32>>,
{
    value_counts(ages.into_iter().map(binnify))
}

/// Ranks 1..=n of `generic_make_model`; rank 0 is left out.
pub fn top_models(vehicles: &[VehicleRecord], n: usize) -> ValueCounts {
    value_counts(vehicles.iter().map(|v| v.generic_make_model.as_deref())).ranked(1, n)
}
