//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner, CanvasFactory)
//! but are themselves concrete structs, not traits.

mod generation;
mod render;

pub use generation::{GenerationService, LevelCount};
pub use render::{LabelPlacement, LevelLayout, RenderService, RowLayout};
