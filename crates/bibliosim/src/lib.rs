//! Synthetic bibliometric populations.
//!
//! Simulates authors accumulating papers year by year under an
//! age-modulated preferential-attachment rule: each year a fixed budget of
//! papers is split across groups of authors sharing the same paper count,
//! weighted by that count, and within a group handed to authors in
//! proportion to their remaining productive years, with a share minted as
//! brand-new authors. The resulting paper-count distributions serve as
//! reference curves for real publication data.

pub mod age_share;
pub mod buckets;
pub mod distribution;
pub mod error;
pub mod metadata;
pub mod pool;
pub mod sampling;
pub mod simulation;
pub mod weighting;

#[cfg(test)]
mod age_share_test;
#[cfg(test)]
mod distribution_test;
#[cfg(test)]
mod pool_test;

// Re-export main types at crate root
pub use buckets::BucketSnapshot;
pub use distribution::PaperCountDistribution;
pub use error::{Result, SimulationError};
pub use metadata::{RunMetadata, RunRecord};
pub use pool::{AuthorId, AuthorPool, AuthorRecord};
pub use sampling::{Assignment, CandidatePool};
pub use simulation::{
    AgingPolicy, SimulationParams, SimulationState, YearReport, run, run_simulation,
    simulate_year, step,
};
pub use weighting::BucketTarget;
