//! Tree view of configurations, for terminal display.

use termtree::Tree;

use crate::domain::collection::DedupCollection;
use crate::domain::model::{CircleNode, ConfigurationSet};

impl CircleNode {
    pub fn to_tree(&self) -> Tree<String> {
        let leaves: Vec<Tree<String>> = self
            .nested()
            .map(|group| group.sorted_members().into_iter().map(CircleNode::to_tree).collect())
            .unwrap_or_default();
        Tree::new("○".to_string()).with_leaves(leaves)
    }
}

impl ConfigurationSet {
    /// Canonical text at the root, one branch per top-level circle.
    pub fn to_tree(&self) -> Tree<String> {
        Tree::new(self.canonical_text())
            .with_leaves(self.sorted_members().into_iter().map(CircleNode::to_tree))
    }
}

impl DedupCollection {
    pub fn to_tree(&self) -> Tree<String> {
        Tree::new(format!("level {} ({})", self.level(), self.len()))
            .with_leaves(self.iter().map(ConfigurationSet::to_tree))
    }
}
