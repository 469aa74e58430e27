use std::collections::HashMap;
use std::hash::Hash;

/// Frequency of each distinct label, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueCounts {
    entries: Vec<(String, u64)>,
}

impl ValueCounts {
    /// Ties are broken by label so output is deterministic.
    pub fn from_counts(counts: HashMap<String, u64>) -> Self {
        let mut entries: Vec<(String, u64)> = counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(l, _)| l.clone()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.entries.iter().map(|(_, c)| *c).collect()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    pub fn head(&self, n: usize) -> Self {
        self.ranked(0, n)
    }

    /// Ranks `skip..skip + take`, clamped to what is available.
    pub fn ranked(&self, skip: usize, take: usize) -> Self {
        Self {
            entries: self.entries.iter().skip(skip).take(take).cloned().collect(),
        }
    }
}

/// Counts the present values; `None` is dropped.
pub fn value_counts<I, K>(values: I) -> ValueCounts
where
    I: IntoIterator<Item = Option<K>>,
    K: ToString + Eq + Hash,
{
    let mut keyed: HashMap<K, u64> = HashMap::new();
    for v in values.into_iter().flatten() {
        *keyed.entry(v).or_insert(0) += 1;
    }
    ValueCounts::from_counts(keyed.into_iter().map(|(k, c)| (k.to_string(), c)).collect())
}
