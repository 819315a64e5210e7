//! Weighted draws of paper recipients within a bucket.
//!
//! Each candidate author `i` occupies `share(age_i)` slots of a virtual pool,
//! preceded by `floor(ρ * W) + 1` "new author" slots, where `W` is the total
//! share. Drawing a uniform slot is equivalent to drawing from the literal
//! list `[New; n_new] ++ [0; s_0] ++ [1; s_1] ++ ...`, but the list is never
//! materialized: slots are resolved by binary search over cumulative shares.

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::age_share::productivity_share;

/// Recipient of a single sampled paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assignment {
    /// Attribute the paper to a brand-new author
    NewAuthor,
    /// Attribute the paper to the candidate at this index
    Existing(usize),
}

/// Virtual weighted pool of candidates for one bucket
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePool {
    new_slots: u64,
    /// Running total of shares; `cumulative[i]` counts slots of candidates `0..=i`
    cumulative: Vec<u64>,
}

impl CandidatePool {
    /// Builds the pool for candidates of the given `ages`
    ///
    /// # Arguments
    /// * `ages` - Academic ages of the bucket's authors, in bucket order
    /// * `new_author_rate` - Proportion ρ of extra slots reserved for new authors
    /// * `age_min` - Age up to which the full productivity share applies
    /// * `age_max` - Retirement age
    ///
    /// # Example
    /// ```
    /// use bibliosim::sampling::{Assignment, CandidatePool};
    ///
    /// let pool = CandidatePool::build(&[50], 0.0, 40, 60);
    /// assert_eq!(pool.len(), 11);
    /// assert_eq!(pool.entry(0), Some(Assignment::NewAuthor));
    /// assert_eq!(pool.entry(10), Some(Assignment::Existing(0)));
    /// ```
    pub fn build(ages: &[u32], new_author_rate: f64, age_min: u32, age_max: u32) -> Self {
        let cumulative: Vec<u64> = ages
            .iter()
            .scan(0u64, |total, &age| {
                *total += productivity_share(age, age_min, age_max) as u64;
                Some(*total)
            })
            .collect();

        let weighted = cumulative.last().copied().unwrap_or(0);
        // At least one new-author slot, whatever the sign of the rate; capped so
        // that `len()` fits in a u64.
        let new_slots = ((new_author_rate * weighted as f64).floor().max(0.0) as u64)
            .saturating_add(1)
            .min(u64::MAX - weighted);

        Self {
            new_slots,
            cumulative,
        }
    }

    /// Total number of slots, sentinels included
    pub fn len(&self) -> u64 {
        self.new_slots + self.weighted_len()
    }

    /// Always false: the pool holds at least one new-author slot
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn new_slots(&self) -> u64 {
        self.new_slots
    }

    /// Slots held by existing candidates (`Σ shares`)
    pub fn weighted_len(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Resolves a slot position to its assignment, or `None` past the end
    pub fn entry(&self, slot: u64) -> Option<Assignment> {
        if slot < self.new_slots {
            return Some(Assignment::NewAuthor);
        }
        let offset = slot - self.new_slots;
        if offset >= self.weighted_len() {
            return None;
        }
        Some(Assignment::Existing(
            self.cumulative.partition_point(|&c| c <= offset),
        ))
    }

    /// Draws one slot uniformly
    pub fn draw(&self, rng: &mut ChaChaRng) -> Assignment {
        let slot = rng.random_range(0..self.len());
        self.entry(slot).unwrap_or(Assignment::NewAuthor)
    }
}

/// Samples `papers` recipients with replacement from a bucket's candidates
///
/// Returns exactly `papers` assignments in draw order. Every `Existing`
/// index is a valid index into `ages`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use bibliosim::sampling::{Assignment, assign_papers};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let picks = assign_papers(&mut rng, 5, &[50], 0.0, 40, 60);
///
/// assert_eq!(picks.len(), 5);
/// assert!(picks
///     .iter()
///     .all(|a| matches!(a, Assignment::NewAuthor | Assignment::Existing(0))));
/// ```
pub fn assign_papers(
    rng: &mut ChaChaRng,
    papers: u32,
    ages: &[u32],
    new_author_rate: f64,
    age_min: u32,
    age_max: u32,
) -> Vec<Assignment> {
    let pool = CandidatePool::build(ages, new_author_rate, age_min, age_max);
    (0..papers).map(|_| pool.draw(rng)).collect()
}
