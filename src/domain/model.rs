//! Configuration data model: circles and the sibling groups they form.
//!
//! Both types are plain values. Every transformation returns a new value, so two
//! configurations never share structure that a later insertion could disturb.

/// One circle, optionally holding a single group of circles drawn inside it.
#[derive(Debug, Clone, Default)]
pub struct CircleNode {
    /// `None` for a leaf; never `Some` of an empty set.
    nested: Option<ConfigurationSet>,
}

/// Circles placed side by side at the same nesting depth.
///
/// Member order carries no meaning; it is only kept so that discovery order is
/// reproducible. Equivalence is decided on the canonical text.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationSet {
    members: Vec<CircleNode>,
}

impl CircleNode {
    /// A circle with nothing inside.
    pub fn leaf() -> Self {
        Self { nested: None }
    }

    /// A circle enclosing `nested`. An empty group collapses to a leaf.
    pub fn with_nested(nested: ConfigurationSet) -> Self {
        if nested.is_empty() {
            Self::leaf()
        } else {
            Self {
                nested: Some(nested),
            }
        }
    }

    pub fn nested(&self) -> Option<&ConfigurationSet> {
        self.nested.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.nested.is_none()
    }

    /// Nesting depth: 1 for a leaf, 1 + depth of the enclosed group otherwise.
    pub fn nesting(&self) -> usize {
        1 + self.nested.as_ref().map_or(0, ConfigurationSet::nesting)
    }

    /// Number of circles in this subtree, including this one.
    pub fn circle_count(&self) -> usize {
        1 + self
            .nested
            .as_ref()
            .map_or(0, ConfigurationSet::circle_count)
    }
}

impl ConfigurationSet {
    /// The empty configuration (level 0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Vec<CircleNode>) -> Self {
        Self { members }
    }

    /// `count` leaf circles side by side.
    pub fn leaves(count: usize) -> Self {
        Self::from_members(vec![CircleNode::leaf(); count])
    }

    pub fn members(&self) -> &[CircleNode] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Copy of this set with `member` appended.
    pub fn with_member(&self, member: CircleNode) -> Self {
        let mut members = self.members.clone();
        members.push(member);
        Self { members }
    }

    /// Copy of this set with the member at `index` replaced.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn with_replaced(&self, index: usize, member: CircleNode) -> Self {
        let mut members = self.members.clone();
        members[index] = member;
        Self { members }
    }

    /// Maximum nesting over all members, 0 for the empty set.
    pub fn nesting(&self) -> usize {
        self.members
            .iter()
            .map(CircleNode::nesting)
            .max()
            .unwrap_or(0)
    }

    /// Total number of circles, i.e. the level this configuration belongs to.
    pub fn circle_count(&self) -> usize {
        self.members.iter().map(CircleNode::circle_count).sum()
    }
}
