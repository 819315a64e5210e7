//! Multi-year simulation driver.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use super::params::SimulationParams;
use super::year::{YearReport, simulate_year};
use crate::error::Result;
use crate::pool::AuthorPool;

/// Evolving state of a publication simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Completed simulated years
    pub year: u32,
    pub pool: AuthorPool,
    /// Single random stream for every draw of the run
    pub rng: ChaChaRng,
}

impl SimulationState {
    pub fn new(pool: AuthorPool, rng: ChaChaRng) -> Self {
        Self { year: 0, pool, rng }
    }

    /// Creates a state whose random stream is seeded from `seed`
    pub fn with_seed(pool: AuthorPool, seed: u64) -> Self {
        Self::new(pool, ChaChaRng::seed_from_u64(seed))
    }

    pub fn paper_counts(&self) -> Vec<u32> {
        self.pool.paper_counts()
    }
}

/// Simulates the year numbered `year` (1-based) on `pool` and logs its report
fn advance_year(
    pool: &mut AuthorPool,
    params: &SimulationParams,
    rng: &mut ChaChaRng,
    year: u32,
) -> Result<YearReport> {
    let report = simulate_year(pool, params, rng)?;

    tracing::debug!(
        year,
        rate = report.new_author_rate,
        buckets = report.buckets,
        papers = report.papers_targeted,
        new_authors = report.new_authors,
        authors = pool.len(),
        "year simulated"
    );

    Ok(report)
}

/// Executes one simulated year and advances the year counter
pub fn step(state: &mut SimulationState, params: &SimulationParams) -> Result<YearReport> {
    let report = advance_year(&mut state.pool, params, &mut state.rng, state.year + 1)?;
    state.year += 1;
    Ok(report)
}

/// Runs `params.years` consecutive years on `state`
///
/// Parameters are validated before the first year so that a rejected run
/// leaves the state untouched.
///
/// # Example
/// ```
/// use bibliosim::{AuthorPool, SimulationParams, SimulationState, run_simulation};
///
/// let params = SimulationParams::new(5, 60, 0.1);
/// let state = SimulationState::with_seed(AuthorPool::seeded(60), 42);
///
/// let final_state = run_simulation(state, &params).unwrap();
/// assert_eq!(final_state.year, 5);
/// assert!(final_state.pool.len() >= 30);
/// ```
pub fn run_simulation(
    mut state: SimulationState,
    params: &SimulationParams,
) -> Result<SimulationState> {
    params.validate()?;
    for _ in 0..params.years {
        step(&mut state, params)?;
    }
    Ok(state)
}

/// Simulates `params.years` years and returns every author's final paper count
///
/// Starts from `initial_pool`, or from [`AuthorPool::seeded`] for the run's
/// yearly budget when none is given. All randomness is drawn from `rng`.
/// The counts are in author id order; callers should treat them as a multiset.
///
/// # Errors
/// * `InvalidParameter` if `params` fail validation (checked before anything runs)
/// * `EmptyPool` if the pool is empty and at least one year must be simulated
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use bibliosim::{SimulationParams, run};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let counts = run(&SimulationParams::new(0, 6, 0.1), None, &mut rng).unwrap();
/// assert_eq!(counts, vec![1, 2, 3]);
/// ```
pub fn run(
    params: &SimulationParams,
    initial_pool: Option<AuthorPool>,
    rng: &mut ChaChaRng,
) -> Result<Vec<u32>> {
    params.validate()?;

    let mut pool = initial_pool.unwrap_or_else(|| AuthorPool::seeded(params.papers_per_year));
    tracing::info!(
        years = params.years,
        papers_per_year = params.papers_per_year,
        new_author_rate = params.new_author_rate,
        authors = pool.len(),
        "starting publication simulation"
    );

    for year in 1..=params.years {
        advance_year(&mut pool, params, rng, year)?;
    }

    tracing::info!(authors = pool.len(), "publication simulation finished");
    Ok(pool.paper_counts())
}
