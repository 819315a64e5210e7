//! Preferential-attachment split of the yearly publication budget.
//!
//! Bucket `k` (authors with `k` papers, `Ns[k]` of them) receives
//! `Tk = round(k * Ns[k] * γ * papers_per_year)` papers, with
//! `γ = 1 / Σ k * Ns[k]`. Buckets are rounded independently, so `Σ Tk` may
//! differ from the budget by up to half a paper per bucket.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Papers assigned to one paper-count bucket for a single year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTarget {
    /// Paper count `k` shared by every author in the bucket
    pub paper_count: u32,
    /// Number of authors in the bucket (`Ns[k]`)
    pub authors: usize,
    /// Papers to distribute from this bucket (`Tk`)
    pub papers: u32,
}

/// Total attachment weight `Σ k * Ns[k]`, i.e. the number of papers held by the population
///
/// `counts[k - 1]` is the number of authors with `k` papers.
pub fn attachment_mass(counts: &[usize]) -> u64 {
    counts
        .iter()
        .enumerate()
        .map(|(i, &n)| (i as u64 + 1) * n as u64)
        .sum()
}

/// Normalization factor `γ = 1 / Σ k * Ns[k]`
///
/// # Example
/// ```
/// use bibliosim::weighting::normalization_factor;
///
/// // one author each with 1, 2 and 3 papers
/// let gamma = normalization_factor(&[1, 1, 1]).unwrap();
/// assert!((gamma - 1.0 / 6.0).abs() < 1e-12);
/// ```
pub fn normalization_factor(counts: &[usize]) -> Result<f64> {
    match attachment_mass(counts) {
        0 => Err(SimulationError::EmptyPool),
        mass => Ok(1.0 / mass as f64),
    }
}

/// Splits `papers_per_year` across the non-empty buckets
///
/// Targets are returned in ascending paper-count order. Ties round to even.
pub fn bucket_targets(counts: &[usize], papers_per_year: u32) -> Result<Vec<BucketTarget>> {
    let gamma = normalization_factor(counts)?;
    let budget = papers_per_year as f64;

    let targets = counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(i, &n)| {
            let paper_count = i as u32 + 1;
            let share = paper_count as f64 * n as f64 * gamma;
            BucketTarget {
                paper_count,
                authors: n,
                papers: (share * budget).round_ties_even() as u32,
            }
        })
        .collect();

    Ok(targets)
}
