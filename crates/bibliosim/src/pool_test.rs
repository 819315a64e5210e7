use crate::error::SimulationError;
use crate::pool::{AuthorId, AuthorPool, AuthorRecord};

#[test]
fn test_seeded_pool_groups() {
    let pool = AuthorPool::seeded(6);

    assert_eq!(pool.len(), 3);
    assert_eq!(pool.paper_counts(), vec![1, 2, 3]);
    assert!(pool.iter().all(|(_, record)| record.age == 1));
}

#[test]
fn test_seeded_pool_scales_with_budget() {
    let pool = AuthorPool::seeded(600);
    let counts = pool.paper_counts();

    assert_eq!(pool.len(), 300);
    for paper_count in 1..=3 {
        assert_eq!(counts.iter().filter(|&&c| c == paper_count).count(), 100);
    }
}

#[test]
fn test_seeded_pool_never_empty() {
    let pool = AuthorPool::seeded(1);
    assert_eq!(pool.paper_counts(), vec![1, 2, 3]);
}

#[test]
fn test_create_allocates_dense_ids() {
    let mut pool = AuthorPool::seeded(6);

    let id1 = pool.create();
    let id2 = pool.create();

    assert_eq!(id1, AuthorId(4));
    assert_eq!(id2, AuthorId(5));
    assert_eq!(pool.get(id2).unwrap(), &AuthorRecord::newcomer());
}

#[test]
fn test_increment_papers() {
    let mut pool = AuthorPool::new();
    let id = pool.create();

    pool.increment_papers(id).unwrap();
    pool.increment_papers(id).unwrap();

    assert_eq!(pool.get(id).unwrap().paper_count, 3);
    assert_eq!(pool.age(id).unwrap(), 1);
}

#[test]
fn test_unknown_author() {
    let mut pool = AuthorPool::seeded(6);

    assert_eq!(
        pool.increment_papers(AuthorId(0)),
        Err(SimulationError::UnknownAuthor(AuthorId(0)))
    );
    assert_eq!(
        pool.age(AuthorId(4)),
        Err(SimulationError::UnknownAuthor(AuthorId(4)))
    );
}

#[test]
fn test_increment_ages() {
    let mut pool = AuthorPool::seeded(6);
    pool.increment_all_ages();
    pool.create();
    pool.increment_ages_below(3);

    let ages: Vec<u32> = pool.iter().map(|(_, record)| record.age).collect();
    assert_eq!(ages, vec![3, 3, 3, 1]);
}

#[test]
fn test_from_records_rejects_zeroes() {
    let no_age = AuthorPool::from_records([AuthorRecord {
        age: 0,
        paper_count: 4,
    }]);
    assert!(matches!(
        no_age,
        Err(SimulationError::InvalidParameter {
            name: "initial_pool",
            ..
        })
    ));

    let no_papers = AuthorPool::from_records([
        AuthorRecord::newcomer(),
        AuthorRecord {
            age: 3,
            paper_count: 0,
        },
    ]);
    assert!(no_papers.is_err());
}

#[test]
fn test_deserialize_validates_records() {
    for json in [
        r#"{"authors":[{"age":1,"paperCount":0}]}"#,
        r#"{"authors":[{"age":0,"paperCount":2}]}"#,
    ] {
        let result = serde_json::from_str::<AuthorPool>(json);
        assert!(result.is_err(), "{} should be rejected", json);
    }

    let pool: AuthorPool =
        serde_json::from_str(r#"{"authors":[{"age":3,"paperCount":2}]}"#).unwrap();
    assert_eq!(pool.max_paper_count(), Ok(2));
}

#[test]
fn test_deserialize_round_trip() {
    let mut pool = AuthorPool::seeded(6);
    pool.create();

    let json = serde_json::to_string(&pool).unwrap();
    let restored: AuthorPool = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, pool);
}

#[test]
fn test_max_paper_count() {
    let pool = AuthorPool::from_records([
        AuthorRecord {
            age: 2,
            paper_count: 7,
        },
        AuthorRecord::newcomer(),
    ])
    .unwrap();

    assert_eq!(pool.max_paper_count(), Ok(7));
    assert_eq!(
        AuthorPool::new().max_paper_count(),
        Err(SimulationError::EmptyPool)
    );
}
