//! Prefix-based grouping of similarly named files.
//!
//! Every unordered pair of base filenames is compared for a shared prefix;
//! pairs meeting the configured minimum length are merged with a union-find
//! over input indices, and groups of one are dropped. Membership is
//! transitive: two files can land in the same group purely because each
//! shares a prefix with a third.
//!
//! Ordering is deterministic: groups appear in first-occurrence order of
//! their earliest member, files within a group in input order.

use std::path::PathBuf;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::entry::FileEntry;

/// Union-find over a dense index arena, with path compression.
#[derive(Debug)]
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}

/// Byte-wise longest-common-prefix length of two strings.
///
/// When one string is a prefix of the other, the shorter length is
/// returned; empty strings yield 0.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .take_while(|(x, y)| x == y)
        .count()
}

/// A group of two or more files whose base filenames share a prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchGroup {
    /// Paths of all files in this group, in input order.
    pub paths: Vec<PathBuf>,
}

impl MatchGroup {
    /// Number of files in the group (always ≥ 2).
    pub fn count(&self) -> usize {
        self.paths.len()
    }

    /// Number of distinct file pairs that can be compared.
    pub fn pair_count(&self) -> usize {
        self.paths.len() * (self.paths.len() - 1) / 2
    }
}

/// Results from prefix matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Groups of similarly named files.
    pub groups: Vec<MatchGroup>,

    /// Number of files supplied to the matcher.
    pub files_considered: usize,

    /// Number of files that landed in some group.
    pub files_grouped: usize,

    /// Number of groups found.
    pub group_count: usize,
}

impl MatchReport {
    fn empty(files_considered: usize) -> Self {
        Self {
            groups: Vec::new(),
            files_considered,
            files_grouped: 0,
            group_count: 0,
        }
    }

    /// Check if any groups were found.
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }
}

/// Groups files by common filename prefix.
pub struct PrefixMatcher {
    config: MatchConfig,
}

impl PrefixMatcher {
    /// Create a matcher with the given minimum prefix length.
    pub fn new(min_prefix_len: usize) -> Self {
        Self {
            config: MatchConfig::new(min_prefix_len),
        }
    }

    /// Create a matcher with a full config.
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Partition `files` into groups of similarly named files.
    ///
    /// Fewer than two files yields an empty report. Only the final path
    /// segment participates in comparison, so files in different
    /// directories can still group together. The O(n²) pairwise pass is
    /// fine at single-directory scale.
    pub fn group_files(&self, files: &[PathBuf]) -> MatchReport {
        if files.len() < 2 {
            return MatchReport::empty(files.len());
        }

        let entries: Vec<FileEntry> = files.iter().map(FileEntry::new).collect();

        let mut sets = DisjointSet::new(entries.len());
        for (i, j) in (0..entries.len()).tuple_combinations() {
            let shared = common_prefix_len(&entries[i].file_name, &entries[j].file_name);
            if shared >= self.config.min_prefix_len {
                sets.union(i, j);
            }
        }

        // Gather members per root. Each bucket fills in increasing input
        // index, so bucket[0] is the group's first occurrence.
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
        for i in 0..entries.len() {
            let root = sets.find(i);
            by_root[root].push(i);
        }

        let mut buckets: Vec<Vec<usize>> = by_root
            .into_iter()
            .filter(|members| members.len() >= 2)
            .collect();
        buckets.sort_by_key(|members| members[0]);

        let groups: Vec<MatchGroup> = buckets
            .into_iter()
            .map(|members| MatchGroup {
                paths: members.into_iter().map(|i| entries[i].path.clone()).collect(),
            })
            .collect();

        let files_grouped = groups.iter().map(MatchGroup::count).sum();
        let group_count = groups.len();

        MatchReport {
            groups,
            files_considered: files.len(),
            files_grouped,
            group_count,
        }
    }
}

impl Default for PrefixMatcher {
    fn default() -> Self {
        Self::with_config(MatchConfig::default())
    }
}
