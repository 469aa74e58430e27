//! Summary statistics for a numeric column.
use anyhow::{bail, Result};

/// Count, moments and quartiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1). NaN for a single value.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

pub fn describe(values: &[f64]) -> Result<Describe> {
    if values.is_empty() {
        bail!("cannot describe an empty column");
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = mean(&sorted);
    let std = if n > 1 {
        let ss: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    Ok(Describe {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: quantile_sorted(&sorted, 0.25),
        q50: quantile_sorted(&sorted, 0.50),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted[n - 1],
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Linear interpolation between closest ranks.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// k-th central moment, divided by n.
fn central_moment(values: &[f64], mean: f64, k: i32) -> f64 {
    values.iter().map(|x| (x - mean).powi(k)).sum::<f64>() / values.len() as f64
}

/// Biased sample skewness. NaN for empty or constant input.
pub fn skewness(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let m2 = central_moment(values, m, 2);
    if m2 == 0.0 {
        return f64::NAN;
    }
    central_moment(values, m, 3) / m2.powf(1.5)
}

/// Fisher (excess) kurtosis, biased. NaN for empty or constant input.
pub fn kurtosis(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let m2 = central_moment(values, m, 2);
    if m2 == 0.0 {
        return f64::NAN;
    }
    central_moment(values, m, 4) / (m2 * m2) - 3.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    /// `counts.len() + 1` edges.
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Bins {
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// `n` equal-width bins over [min, max]; the last bin is closed on the right.
pub fn histogram_bins(values: &[f64], n: usize) -> Result<Bins> {
    if values.is_empty() {
        bail!("cannot bin an empty column");
    }
    if n == 0 {
        bail!("bin count must be positive");
    }
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / n as f64;
    let edges: Vec<f64> = (0..=n).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0u64; n];
    for &x in values {
        let idx = (((x - lo) / width).floor() as usize).min(n - 1);
        counts[idx] += 1;
    }
    Ok(Bins { edges, counts })
}
