use serde::{Deserialize, Serialize};

use crate::buckets::BucketSnapshot;
use crate::error::{Result, SimulationError};

/// Identifier of an author in an [`AuthorPool`]
///
/// Ids are 1-based and allocated densely: the n-th author created gets `AuthorId(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub u32);

impl AuthorId {
    fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    /// Years since first publication, >= 1
    pub age: u32,
    /// Cumulative papers, >= 1
    pub paper_count: u32,
}

impl AuthorRecord {
    /// A freshly published author: age 1 with a single paper
    pub fn newcomer() -> Self {
        Self {
            age: 1,
            paper_count: 1,
        }
    }
}

/// The simulated author population
///
/// Authors live in a growable arena indexed by id; the pool never shrinks,
/// so iteration order is always ascending id.
///
/// Deserialization goes through [`AuthorPool::from_records`], so a loaded
/// pool obeys the same invariants as one built in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredPool")]
pub struct AuthorPool {
    authors: Vec<AuthorRecord>,
}

/// Serialized shape of an [`AuthorPool`], before validation
#[derive(Deserialize)]
struct StoredPool {
    authors: Vec<AuthorRecord>,
}

impl TryFrom<StoredPool> for AuthorPool {
    type Error = SimulationError;

    fn try_from(stored: StoredPool) -> Result<Self> {
        Self::from_records(stored.authors)
    }
}

impl AuthorPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default starting population for a yearly budget of `papers_per_year`
    ///
    /// Three equal groups of `max(papers_per_year / 6, 1)` authors, all of age 1,
    /// holding 1, 2 and 3 papers respectively.
    ///
    /// # Example
    /// ```
    /// use bibliosim::AuthorPool;
    ///
    /// let pool = AuthorPool::seeded(6);
    /// assert_eq!(pool.paper_counts(), vec![1, 2, 3]);
    ///
    /// let pool = AuthorPool::seeded(600);
    /// assert_eq!(pool.len(), 300);
    /// ```
    pub fn seeded(papers_per_year: u32) -> Self {
        let group_size = (papers_per_year / 6).max(1) as usize;
        let mut authors = Vec::with_capacity(3 * group_size);
        for paper_count in 1..=3 {
            authors.extend(std::iter::repeat_n(
                AuthorRecord {
                    age: 1,
                    paper_count,
                },
                group_size,
            ));
        }
        Self { authors }
    }

    /// Builds a pool from caller-supplied records, assigning ids in iteration order
    ///
    /// Records with a zero age or paper count are rejected.
    pub fn from_records(records: impl IntoIterator<Item = AuthorRecord>) -> Result<Self> {
        let authors: Vec<AuthorRecord> = records.into_iter().collect();
        for (i, record) in authors.iter().enumerate() {
            if record.age == 0 {
                return Err(SimulationError::invalid(
                    "initial_pool",
                    format!("author {} has age 0", i + 1),
                ));
            }
            if record.paper_count == 0 {
                return Err(SimulationError::invalid(
                    "initial_pool",
                    format!("author {} has no papers", i + 1),
                ));
            }
        }
        Ok(Self { authors })
    }

    /// Adds a newcomer (age 1, one paper) and returns its id
    pub fn create(&mut self) -> AuthorId {
        self.authors.push(AuthorRecord::newcomer());
        AuthorId(self.authors.len() as u32)
    }

    pub fn increment_papers(&mut self, id: AuthorId) -> Result<()> {
        let record = self.get_mut(id)?;
        record.paper_count += 1;
        Ok(())
    }

    pub fn increment_all_ages(&mut self) {
        self.increment_ages_below(self.authors.len());
    }

    /// Ages the first `count` authors by one year
    ///
    /// Because ids are allocated in order, the first `count` authors are exactly
    /// the population that existed when the pool had `count` members.
    pub fn increment_ages_below(&mut self, count: usize) {
        for record in self.authors.iter_mut().take(count) {
            record.age += 1;
        }
    }

    pub fn get(&self, id: AuthorId) -> Result<&AuthorRecord> {
        id.index()
            .and_then(|i| self.authors.get(i))
            .ok_or(SimulationError::UnknownAuthor(id))
    }

    fn get_mut(&mut self, id: AuthorId) -> Result<&mut AuthorRecord> {
        id.index()
            .and_then(|i| self.authors.get_mut(i))
            .ok_or(SimulationError::UnknownAuthor(id))
    }

    pub fn age(&self, id: AuthorId) -> Result<u32> {
        self.get(id).map(|record| record.age)
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Iterates `(id, record)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (AuthorId, &AuthorRecord)> {
        self.authors
            .iter()
            .enumerate()
            .map(|(i, record)| (AuthorId(i as u32 + 1), record))
    }

    /// Paper count of every author, in ascending id order
    pub fn paper_counts(&self) -> Vec<u32> {
        self.authors.iter().map(|record| record.paper_count).collect()
    }

    pub fn max_paper_count(&self) -> Result<u32> {
        self.authors
            .iter()
            .map(|record| record.paper_count)
            .max()
            .ok_or(SimulationError::EmptyPool)
    }

    /// Groups the current authors by paper count
    ///
    /// The snapshot is detached from the pool: later mutations do not change it.
    pub fn snapshot_buckets(&self) -> Result<BucketSnapshot> {
        let max_papers = self.max_paper_count()?;
        Ok(BucketSnapshot::from_authors(self.iter(), max_papers))
    }
}
