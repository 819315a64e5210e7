//! One simulated publication year.

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use super::params::{AgingPolicy, NEW_AUTHOR_RATE_JITTER, SimulationParams};
use crate::error::Result;
use crate::pool::AuthorPool;
use crate::sampling::{Assignment, assign_papers};
use crate::weighting::bucket_targets;

/// Summary of a completed year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearReport {
    /// New-author rate ρ_y actually used (baseline plus jitter)
    pub new_author_rate: f64,
    /// Pool size when the year started
    pub authors_at_start: usize,
    /// Non-empty paper-count buckets in the year's snapshot
    pub buckets: usize,
    /// Sum of the per-bucket targets (close to, not always equal to, the budget)
    pub papers_targeted: u32,
    /// Papers credited to authors who existed at the start of the year
    pub papers_to_existing: u32,
    /// Authors created this year (one paper each)
    pub new_authors: u32,
}

/// Advances the pool by one year
///
/// Sequence:
/// 1. Snapshot the pool into paper-count buckets
/// 2. Draw this year's new-author rate `ρ0 + U(-0.01, 0.01)`
/// 3. For every non-empty bucket, in ascending paper count: compute its
///    target, sample recipients among the bucket's members and apply them
/// 4. Age the population according to `params.aging`
///
/// Bucket membership comes from the snapshot only, so an author promoted
/// in step 3 is never read again from a higher bucket in the same year.
/// Random draws happen in exactly this order, which makes a year
/// reproducible for a given generator state.
///
/// # Errors
/// `EmptyPool` if the pool has no authors.
pub fn simulate_year(
    pool: &mut AuthorPool,
    params: &SimulationParams,
    rng: &mut ChaChaRng,
) -> Result<YearReport> {
    // 1. Frozen view of the year
    let snapshot = pool.snapshot_buckets()?;
    let authors_at_start = pool.len();

    // 2. Yearly new-author rate
    let rate = params.new_author_rate
        + rng.random_range(-NEW_AUTHOR_RATE_JITTER..NEW_AUTHOR_RATE_JITTER);

    // 3. Distribute papers bucket by bucket
    let targets = bucket_targets(&snapshot.counts(), params.papers_per_year)?;
    let mut report = YearReport {
        new_author_rate: rate,
        authors_at_start,
        buckets: targets.len(),
        papers_targeted: targets.iter().map(|t| t.papers).sum(),
        papers_to_existing: 0,
        new_authors: 0,
    };

    for target in &targets {
        let members = snapshot.members(target.paper_count);
        let ages = members
            .iter()
            .map(|&id| pool.age(id))
            .collect::<Result<Vec<u32>>>()?;

        let assignments = assign_papers(
            rng,
            target.papers,
            &ages,
            rate,
            params.age_min,
            params.age_max,
        );

        let mut created = 0;
        for assignment in assignments {
            match assignment {
                Assignment::NewAuthor => {
                    pool.create();
                    created += 1;
                }
                Assignment::Existing(i) => pool.increment_papers(members[i])?,
            }
        }

        tracing::trace!(
            paper_count = target.paper_count,
            authors = target.authors,
            papers = target.papers,
            created,
            "bucket distributed"
        );
        report.new_authors += created;
        report.papers_to_existing += target.papers - created;
    }

    // 4. Aging
    match params.aging {
        AgingPolicy::ExistingOnly => pool.increment_ages_below(authors_at_start),
        AgingPolicy::IncludeNewcomers => pool.increment_all_ages(),
    }

    Ok(report)
}
