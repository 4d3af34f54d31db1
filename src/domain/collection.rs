//! Distinct configurations of one level, and the step to the next level.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::model::ConfigurationSet;

/// All pairwise non-equivalent configurations with `level` circles.
///
/// Members keep discovery order. The dedup contract is enforced on insertion:
/// a candidate equivalent to an accepted member is discarded.
#[derive(Debug, Clone)]
pub struct DedupCollection {
    level: usize,
    members: Vec<ConfigurationSet>,
    /// Canonical text of every accepted member.
    seen: HashSet<String>,
}

impl DedupCollection {
    /// Empty collection for `level`.
    pub fn new(level: usize) -> Self {
        Self {
            level,
            members: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Level 0: exactly one member, the empty configuration.
    pub fn seed() -> Self {
        let mut collection = Self::new(0);
        collection.insert(ConfigurationSet::new());
        collection
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[ConfigurationSet] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigurationSet> {
        self.members.iter()
    }

    /// Whether an equivalent configuration was already accepted.
    pub fn contains_equivalent(&self, candidate: &ConfigurationSet) -> bool {
        self.seen.contains(&candidate.canonical_text())
    }

    /// Accept `candidate` unless an equivalent member exists. Returns whether it was added.
    pub fn insert(&mut self, candidate: ConfigurationSet) -> bool {
        debug_assert_eq!(candidate.circle_count(), self.level);
        let text = candidate.canonical_text();
        if self.seen.contains(&text) {
            trace!("insert: discarding duplicate {}", text);
            return false;
        }
        trace!("insert: accepting {}", text);
        self.seen.insert(text);
        self.members.push(candidate);
        true
    }

    /// Every distinct configuration with one more circle.
    pub fn next_level(&self) -> DedupCollection {
        let mut next = DedupCollection::new(self.level + 1);
        let mut candidates = 0usize;
        for config in &self.members {
            for candidate in config.add_circle() {
                candidates += 1;
                next.insert(candidate);
            }
        }
        debug!(
            "next_level: level {} from {} candidates -> {} distinct",
            next.level,
            candidates,
            next.len()
        );
        next
    }
}

impl<'a> IntoIterator for &'a DedupCollection {
    type Item = &'a ConfigurationSet;
    type IntoIter = std::slice::Iter<'a, ConfigurationSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_seed_when_inspecting_then_single_empty_configuration() {
        let seed = DedupCollection::seed();
        assert_eq!(seed.level(), 0);
        assert_eq!(seed.len(), 1);
        assert!(seed.members()[0].is_empty());
    }

    #[test]
    fn given_equivalent_candidate_when_inserting_then_discarded() {
        let mut collection = DedupCollection::new(3);
        assert!(collection.insert("[ C [ C ], C ]".parse().unwrap()));
        assert!(!collection.insert("[ C, C [ C ] ]".parse().unwrap()));
        assert!(collection.insert("[ C, C, C ]".parse().unwrap()));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn given_level_two_when_expanding_then_discovery_order_is_stable() {
        let level2 = DedupCollection::seed().next_level().next_level();
        let texts: Vec<String> = level2.iter().map(|c| c.to_string()).collect();
        assert_eq!(texts, vec!["[ C, C ]", "[ C [ C ] ]"]);
    }
}
