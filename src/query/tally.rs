use crate::model::Variant;

use super::filter::{Categorized, Filter};

/// Per-value counts over a closed domain, plus the overall total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally<K> {
    all: usize,
    counts: Vec<(K, usize)>,
}

impl<K: Variant> Tally<K> {
    /// Count `records` by category. Every domain value gets an entry, zero or not.
    pub fn of<R: Categorized<K>>(records: &[R]) -> Self {
        let counts = K::all()
            .iter()
            .map(|key| {
                let count = records.iter().filter(|r| r.category() == *key).count();
                (*key, count)
            })
            .collect();
        Tally {
            all: records.len(),
            counts,
        }
    }

    pub fn all(&self) -> usize {
        self.all
    }

    pub fn count(&self, key: K) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// The count a filter tab would show.
    pub fn count_for(&self, filter: Filter<K>) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Only(key) => self.count(key),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.counts.iter().copied()
    }
}
