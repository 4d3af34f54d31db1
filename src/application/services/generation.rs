//! Level-by-level generation of distinct configurations.

use tracing::{info, instrument};

use crate::domain::DedupCollection;

/// One row of the level/count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCount {
    pub level: usize,
    pub count: usize,
}

/// Drives [`DedupCollection::next_level`] from level 0 up to a target level.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerationService;

impl GenerationService {
    pub fn new() -> Self {
        Self
    }

    /// Collections for levels `0..=levels`; index equals level.
    #[instrument(skip(self))]
    pub fn generate(&self, levels: usize) -> Vec<DedupCollection> {
        let mut collections = Vec::with_capacity(levels + 1);
        collections.push(DedupCollection::seed());
        for level in 1..=levels {
            info!("generating level {}", level);
            let next = collections[level - 1].next_level();
            info!("level {}: {} distinct configurations", level, next.len());
            collections.push(next);
        }
        collections
    }

    /// Rows for every level above 0.
    pub fn counts(collections: &[DedupCollection]) -> Vec<LevelCount> {
        collections
            .iter()
            .filter(|c| c.level() > 0)
            .map(|c| LevelCount {
                level: c.level(),
                count: c.len(),
            })
            .collect()
    }
}
