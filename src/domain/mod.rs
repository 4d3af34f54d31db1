//! Domain layer: configuration model, generation and deduplication
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod canonical;
pub mod collection;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod model;
pub mod tree;

pub use canonical::{equivalent, LEAF_TOKEN};
pub use collection::DedupCollection;
pub use error::{DomainError, DomainResult};
pub use geometry::CircleGeometry;
pub use model::{CircleNode, ConfigurationSet};
