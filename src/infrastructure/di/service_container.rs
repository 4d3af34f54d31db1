//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{GenerationService, RenderService};
use crate::config::Settings;
use crate::infrastructure::canvas::PngCanvasFactory;
use crate::infrastructure::traits::{
    CanvasFactory, CommandRunner, FileSystem, RealCommandRunner, RealFileSystem,
};

/// Container holding the settings and I/O implementations services are built from.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction (upload)
    pub cmd: Arc<dyn CommandRunner>,

    /// Canvas factory (rendering)
    pub canvas: Arc<dyn CanvasFactory>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
            Arc::new(PngCanvasFactory::default()),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        canvas: Arc<dyn CanvasFactory>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            canvas,
        }
    }

    pub fn generation_service(&self) -> GenerationService {
        GenerationService::new()
    }

    pub fn render_service(&self) -> RenderService {
        RenderService::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.cmd),
            Arc::clone(&self.canvas),
            Arc::clone(&self.settings),
        )
    }
}
