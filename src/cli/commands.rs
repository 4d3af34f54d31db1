//! Command execution: validate arguments, generate, report, render.

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::application::services::GenerationService;
use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{DedupCollection, DomainError};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let levels = target_level(cli.circles)?;
    let settings = load_settings(cli)?;

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }
    if cli.upload && settings.upload.host.is_none() {
        return Err(ApplicationError::UploadNotConfigured.into());
    }

    let container = ServiceContainer::new(settings);
    run_levels(cli, levels, &container, &mut io::stdout().lock())
}

/// Generate up to `levels`, write the count table to `out`, then the optional tree and images.
///
/// The table is written before rendering starts, so a failing renderer still leaves
/// the counts on `out`.
#[instrument(skip(cli, container, out))]
pub fn run_levels(
    cli: &Cli,
    levels: usize,
    container: &ServiceContainer,
    out: &mut dyn Write,
) -> CliResult<()> {
    let collections = container.generation_service().generate(levels);
    output::write_count_table(out, &GenerationService::counts(&collections))
        .with_context("write count table")?;

    if cli.tree {
        _tree(&collections);
    }
    if cli.image {
        _images(container, &collections, cli.upload)?;
    }
    Ok(())
}

/// Reject negative levels before any generation starts.
pub fn target_level(requested: i64) -> CliResult<usize> {
    usize::try_from(requested)
        .map_err(|_| CliError::InvalidArgs(DomainError::InvalidLevel(requested).to_string()))
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        settings.render.output_dir = dir.clone();
    }
    debug!("load_settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(collections))]
fn _tree(collections: &[DedupCollection]) {
    for collection in collections.iter().filter(|c| c.level() > 0) {
        output::info(&collection.to_tree());
    }
}

#[instrument(skip(container, collections))]
fn _images(
    container: &ServiceContainer,
    collections: &[DedupCollection],
    upload: bool,
) -> CliResult<()> {
    let service = container.render_service();
    for collection in collections.iter().filter(|c| c.level() > 0) {
        let paths = service
            .render_level(collection)
            .map_err(|source| InfraError::Render {
                level: collection.level(),
                source,
            })?;
        for path in paths {
            output::action("Image", &path.display());
            if upload {
                let location = service.upload(&path)?;
                output::action("Image available at", &location);
            }
        }
    }
    Ok(())
}
