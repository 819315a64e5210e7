//! Year-by-year publication simulation.
//!
//! # Update Sequence
//!
//! Every simulated year proceeds in this order:
//! 1. Snapshot authors into buckets by current paper count
//! 2. Draw the year's new-author rate (baseline ± 0.01)
//! 3. Split the yearly budget across buckets (preferential attachment)
//! 4. Within each bucket, sample recipients weighted by remaining
//!    productive years; some papers go to brand-new authors
//! 5. Age the population by one year
//!
//! Years run strictly in sequence, each from the previous year's final
//! state. All randomness is drawn from one caller-supplied `ChaChaRng`, so
//! a run is reproducible from its seed.

mod driver;
mod params;
mod year;


pub use driver::{SimulationState, run, run_simulation, step};
pub use params::{
    AgingPolicy, DEFAULT_AGE_MAX, DEFAULT_AGE_MIN, NEW_AUTHOR_RATE_BOUNDS, NEW_AUTHOR_RATE_JITTER,
    SimulationParams,
};
pub use year::{YearReport, simulate_year};
