//! Insertion of one additional circle.
//!
//! Candidates are enumerated without any filtering; duplicates are removed by
//! [`DedupCollection`](crate::domain::DedupCollection).

use tracing::trace;

use crate::domain::model::{CircleNode, ConfigurationSet};

impl CircleNode {
    /// Every way to add one circle inside this circle's subtree.
    ///
    /// A leaf gains a single enclosed circle. A circle that already encloses a
    /// group only grows through that group: non-intersecting circles leave no
    /// room for a second, parallel group.
    pub fn add_circle(&self) -> Vec<CircleNode> {
        match self.nested() {
            None => {
                trace!("add_circle: nesting a circle into a leaf");
                vec![CircleNode::with_nested(ConfigurationSet::leaves(1))]
            }
            Some(group) => group
                .add_circle()
                .into_iter()
                .map(CircleNode::with_nested)
                .collect(),
        }
    }
}

impl ConfigurationSet {
    /// Every configuration reachable by adding exactly one circle.
    ///
    /// The first result is the new top-level sibling, followed by the
    /// variants of each member in member order. The receiver is left intact.
    pub fn add_circle(&self) -> Vec<ConfigurationSet> {
        trace!("add_circle: expanding {} members", self.len());
        let mut candidates = vec![self.with_member(CircleNode::leaf())];
        for (index, member) in self.members().iter().enumerate() {
            candidates.extend(
                member
                    .add_circle()
                    .into_iter()
                    .map(|variant| self.with_replaced(index, variant)),
            );
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_set_when_adding_then_single_leaf() {
        let candidates = ConfigurationSet::new().add_circle();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].to_string(), "[ C ]");
    }

    #[test]
    fn given_leaf_when_adding_then_one_enclosed_circle() {
        let variants = CircleNode::leaf().add_circle();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].to_string(), "C [ C ]");
    }

    #[test]
    fn given_nested_circle_when_adding_then_grows_only_inside_group() {
        let node: ConfigurationSet = "[ C [ C ] ]".parse().unwrap();
        let variants = node.members()[0].add_circle();

        let texts: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
        assert_eq!(texts, vec!["C [ C, C ]", "C [ C [ C ] ]"]);
    }

    #[test]
    fn given_set_when_adding_then_count_is_one_plus_member_variants() {
        let set: ConfigurationSet = "[ C [ C, C ], C ]".parse().unwrap();
        // sibling + (1 + 1 + 1 inside the group) + 1 inside the leaf
        assert_eq!(set.add_circle().len(), 5);
        assert_eq!(set.circle_count(), 4);
    }

    #[test]
    fn given_set_when_adding_then_every_candidate_has_one_more_circle() {
        let set: ConfigurationSet = "[ C [ C [ C ] ], C, C ]".parse().unwrap();
        let before = set.to_string();

        for candidate in set.add_circle() {
            assert_eq!(candidate.circle_count(), set.circle_count() + 1);
        }
        assert_eq!(set.to_string(), before);
    }
}
