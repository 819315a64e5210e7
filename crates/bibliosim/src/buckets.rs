//! Per-year grouping of authors by paper count.
//!
//! A [`BucketSnapshot`] is taken once at the start of every simulated year and
//! is the only view of bucket membership used while that year's papers are
//! distributed. It owns its id lists, so authors who gain papers (or are
//! created) during the year stay in the bucket they were read from.

use serde::{Deserialize, Serialize};

use crate::pool::{AuthorId, AuthorRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSnapshot {
    /// `members[k - 1]` holds the ids of authors with exactly `k` papers, in id order
    members: Vec<Vec<AuthorId>>,
}

impl BucketSnapshot {
    pub(crate) fn from_authors<'a>(
        authors: impl Iterator<Item = (AuthorId, &'a AuthorRecord)>,
        max_papers: u32,
    ) -> Self {
        let mut members = vec![Vec::new(); max_papers as usize];
        for (id, record) in authors {
            members[record.paper_count as usize - 1].push(id);
        }
        Self { members }
    }

    /// Number of authors per paper count: entry `k - 1` is `Ns[k]`
    pub fn counts(&self) -> Vec<usize> {
        self.members.iter().map(Vec::len).collect()
    }

    /// Number of authors holding exactly `paper_count` papers
    pub fn count(&self, paper_count: u32) -> usize {
        self.members(paper_count).len()
    }

    /// Ids of authors holding exactly `paper_count` papers
    pub fn members(&self, paper_count: u32) -> &[AuthorId] {
        (paper_count as usize)
            .checked_sub(1)
            .and_then(|i| self.members.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn max_paper_count(&self) -> u32 {
        self.members.len() as u32
    }

    pub fn author_count(&self) -> usize {
        self.members.iter().map(Vec::len).sum()
    }

    /// Non-empty buckets as `(paper_count, members)`, ascending by paper count
    pub fn non_empty(&self) -> impl Iterator<Item = (u32, &[AuthorId])> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(i, ids)| (i as u32 + 1, ids.as_slice()))
    }
}
