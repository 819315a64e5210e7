//! Age-dependent productivity weighting.
//!
//! An author's weight in the sampler is the number of productive years left
//! before the modeled retirement age `age_max`, capped at the length of the
//! productive window `age_max - age_min`. Young authors (at or below
//! `age_min`) therefore all carry the full weight, and authors past
//! `age_max` never receive papers as existing authors.

/// Remaining productive years for an author of academic `age`
///
/// Computes `clamp(age_max - age, 0, age_max - age_min)`.
///
/// # Arguments
/// * `age` - Academic age in years since first publication
/// * `age_min` - Age up to which the full share is granted
/// * `age_max` - Retirement age, from which the share is zero
///
/// # Returns
/// Integer weight in `0..=age_max - age_min`. A degenerate window
/// (`age_min >= age_max`) yields zero for every age.
///
/// # Example
/// ```
/// use bibliosim::age_share::productivity_share;
///
/// assert_eq!(productivity_share(45, 40, 60), 15);
/// assert_eq!(productivity_share(5, 40, 60), 20);
/// assert_eq!(productivity_share(65, 40, 60), 0);
/// ```
pub fn productivity_share(age: u32, age_min: u32, age_max: u32) -> u32 {
    let window = age_max.saturating_sub(age_min) as i64;
    let remaining = age_max as i64 - age as i64;
    remaining.clamp(0, window) as u32
}

/// Element-wise [`productivity_share`] over a list of ages
pub fn productivity_shares(ages: &[u32], age_min: u32, age_max: u32) -> Vec<u32> {
    ages.iter()
        .map(|&age| productivity_share(age, age_min, age_max))
        .collect()
}
