//! Paper-count distributions of simulated populations.
//!
//! A run's output is a multiset of paper counts. The histogram form is what
//! gets compared against real publication data, so it is the natural unit
//! to summarize, serialize and plot.

use serde::{Deserialize, Serialize};

use crate::pool::AuthorPool;

/// Histogram of authors by paper count
///
/// # Example
/// ```
/// use bibliosim::PaperCountDistribution;
///
/// let dist = PaperCountDistribution::from_counts(&[1, 1, 2, 5]);
/// assert_eq!(dist.authors(), 4);
/// assert_eq!(dist.papers(), 9);
/// assert_eq!(dist.frequency(1), 2);
/// assert_eq!(dist.max_paper_count(), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperCountDistribution {
    /// `frequencies[k - 1]` is the number of authors with exactly `k` papers
    frequencies: Vec<usize>,
}

impl PaperCountDistribution {
    /// Builds the histogram from a list of paper counts (order is irrelevant)
    ///
    /// Zero counts are not valid author states and are ignored.
    pub fn from_counts(counts: &[u32]) -> Self {
        let max = counts.iter().copied().max().unwrap_or(0) as usize;
        let mut frequencies = vec![0; max];
        for &count in counts.iter().filter(|&&c| c > 0) {
            frequencies[count as usize - 1] += 1;
        }
        Self { frequencies }
    }

    pub fn from_pool(pool: &AuthorPool) -> Self {
        Self::from_counts(&pool.paper_counts())
    }

    pub fn authors(&self) -> usize {
        self.frequencies.iter().sum()
    }

    pub fn papers(&self) -> u64 {
        self.frequencies
            .iter()
            .enumerate()
            .map(|(i, &n)| (i as u64 + 1) * n as u64)
            .sum()
    }

    /// Mean papers per author, `None` for an empty distribution
    pub fn mean(&self) -> Option<f64> {
        match self.authors() {
            0 => None,
            n => Some(self.papers() as f64 / n as f64),
        }
    }

    pub fn max_paper_count(&self) -> Option<u32> {
        (!self.frequencies.is_empty()).then_some(self.frequencies.len() as u32)
    }

    /// Number of authors with exactly `paper_count` papers
    pub fn frequency(&self, paper_count: u32) -> usize {
        (paper_count as usize)
            .checked_sub(1)
            .and_then(|i| self.frequencies.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Fraction of authors with exactly `paper_count` papers
    pub fn fraction(&self, paper_count: u32) -> f64 {
        match self.authors() {
            0 => 0.0,
            n => self.frequency(paper_count) as f64 / n as f64,
        }
    }

    /// Non-zero histogram rows as `(paper_count, authors)`
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.frequencies
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .map(|(i, &n)| (i as u32 + 1, n))
    }

    /// Complementary cumulative distribution `P(X >= k)` for `k = 1..=max`
    ///
    /// Usually plotted log-log against the observed curve.
    pub fn ccdf(&self) -> Vec<(u32, f64)> {
        let total = self.authors();
        if total == 0 {
            return Vec::new();
        }

        let mut remaining = total;
        self.frequencies
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let point = (i as u32 + 1, remaining as f64 / total as f64);
                remaining -= n;
                point
            })
            .collect()
    }
}
