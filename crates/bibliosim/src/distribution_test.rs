use approx::assert_relative_eq;

use crate::distribution::PaperCountDistribution;
use crate::pool::AuthorPool;

#[test]
fn histogram_from_counts() {
    let dist = PaperCountDistribution::from_counts(&[3, 1, 1, 2, 1, 6]);

    assert_eq!(dist.authors(), 6);
    assert_eq!(dist.papers(), 14);
    assert_eq!(dist.frequency(1), 3);
    assert_eq!(dist.frequency(4), 0);
    assert_eq!(dist.frequency(0), 0);
    assert_eq!(dist.frequency(40), 0);
    assert_eq!(dist.max_paper_count(), Some(6));
    assert_relative_eq!(dist.fraction(1), 0.5);
    assert_relative_eq!(dist.mean().unwrap(), 14.0 / 6.0);
}

#[test]
fn iter_skips_empty_rows() {
    let dist = PaperCountDistribution::from_counts(&[1, 4, 4]);
    let rows: Vec<(u32, usize)> = dist.iter().collect();

    assert_eq!(rows, vec![(1, 1), (4, 2)]);
}

#[test]
fn ccdf_starts_at_one_and_decreases() {
    let dist = PaperCountDistribution::from_counts(&[1, 1, 2, 4]);
    let ccdf = dist.ccdf();

    assert_eq!(ccdf.len(), 4);
    assert_eq!(ccdf[0], (1, 1.0));
    assert_relative_eq!(ccdf[1].1, 0.5);
    assert_relative_eq!(ccdf[2].1, 0.25);
    assert_relative_eq!(ccdf[3].1, 0.25);
    assert!(ccdf.windows(2).all(|w| w[1].1 <= w[0].1));
}

#[test]
fn empty_distribution() {
    let dist = PaperCountDistribution::from_counts(&[]);

    assert_eq!(dist.authors(), 0);
    assert_eq!(dist.mean(), None);
    assert_eq!(dist.max_paper_count(), None);
    assert_eq!(dist.fraction(1), 0.0);
    assert!(dist.ccdf().is_empty());
}

#[test]
fn matches_seed_pool() {
    let dist = PaperCountDistribution::from_pool(&AuthorPool::seeded(60));

    assert_eq!(dist.authors(), 30);
    assert_eq!(dist.papers(), 60);
    assert_eq!(
        dist.iter().collect::<Vec<_>>(),
        vec![(1, 10), (2, 10), (3, 10)]
    );
}
