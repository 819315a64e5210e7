use proptest::prelude::{ProptestConfig, prop_assert, prop_assert_eq, prop_assume, proptest};

use crate::age_share::{productivity_share, productivity_shares};

#[test]
fn share_inside_window() {
    assert_eq!(productivity_share(45, 40, 60), 15);
    assert_eq!(productivity_share(59, 40, 60), 1);
}

#[test]
fn share_is_zero_at_and_beyond_retirement() {
    assert_eq!(productivity_share(60, 40, 60), 0);
    assert_eq!(productivity_share(65, 40, 60), 0);
    assert_eq!(productivity_share(u32::MAX, 40, 60), 0);
}

#[test]
fn share_is_capped_for_young_authors() {
    assert_eq!(productivity_share(5, 40, 60), 20);
    assert_eq!(productivity_share(1, 40, 60), 20);
    assert_eq!(productivity_share(40, 40, 60), 20);
}

#[test]
fn degenerate_window_gives_zero() {
    assert_eq!(productivity_share(1, 60, 60), 0);
    assert_eq!(productivity_share(1, 70, 60), 0);
}

#[test]
fn vector_form_is_element_wise() {
    let shares = productivity_shares(&[1, 45, 50, 61], 40, 60);
    assert_eq!(shares, vec![20, 15, 10, 0]);
    assert!(productivity_shares(&[], 40, 60).is_empty());
}

proptest! {
    #[test]
    fn prop_share_bounded(age in 0u32..500, age_min in 0u32..200, span in 1u32..200) {
        let age_max = age_min + span;
        let share = productivity_share(age, age_min, age_max);
        prop_assert!(share <= span);
    }

    #[test]
    fn prop_share_non_increasing(age in 0u32..500, age_min in 0u32..200, span in 1u32..200) {
        let age_max = age_min + span;
        prop_assert!(
            productivity_share(age + 1, age_min, age_max) <= productivity_share(age, age_min, age_max)
        );
    }

    #[test]
    fn prop_share_saturates(age in 0u32..500, age_min in 0u32..200, span in 1u32..200) {
        let age_max = age_min + span;
        let share = productivity_share(age, age_min, age_max);
        if age <= age_min {
            prop_assert_eq!(share, span);
        }
        if age >= age_max {
            prop_assert_eq!(share, 0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 65536, ..ProptestConfig::default() })]

    #[test]
    fn prop_share_inside_window_counts_remaining_years(age in 0u32..500, age_min in 0u32..200, span in 1u32..200) {
        let age_max = age_min + span;
        prop_assume!(age > age_min && age < age_max);
        prop_assert_eq!(productivity_share(age, age_min, age_max), age_max - age);
    }
}
