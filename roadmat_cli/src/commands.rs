//! Command handlers

use std::path::{Path, PathBuf};

use roadmat_core::config::{load_settings, load_settings_or_default, OutputFormat, Settings, SETTINGS_FILE};
use roadmat_core::{
    builtin_catalog, load_catalog, CalcResult, EngineConfig, MaterialCatalog, ParameterPolicy,
    RawProjectParameters, RecommendationEngine,
};

use crate::cli::{Cli, Commands};
use crate::output;

pub fn execute(cli: Cli) -> CalcResult<()> {
    let settings = read_settings(cli.config.as_deref())?;
    let format = cli.format.map(OutputFormat::from).unwrap_or(settings.format);

    let catalog_path: Option<PathBuf> = cli.catalog.or_else(|| settings.catalog.clone());
    let loaded;
    let catalog: &MaterialCatalog = match catalog_path {
        Some(path) => {
            loaded = load_catalog(&path)?;
            &loaded
        }
        None => builtin_catalog()?,
    };

    match cli.command {
        Commands::Recommend {
            location,
            traffic,
            weather,
            soil,
            strict,
            top,
        } => {
            let policy = if strict { ParameterPolicy::Strict } else { settings.policy };
            let engine = RecommendationEngine::new(catalog, EngineConfig { policy });

            let raw = RawProjectParameters::new(location, traffic, weather, soil);
            let report = engine.report(&raw)?;
            output::print_report(&report, top.unwrap_or(settings.top), format)
        }
        Commands::Materials => output::print_catalog(catalog, format),
        Commands::Options => output::print_options(format),
    }
}

/// An explicit `--config` must exist; the default file is optional.
fn read_settings(explicit: Option<&Path>) -> CalcResult<Settings> {
    match explicit {
        Some(path) => load_settings(path),
        None => load_settings_or_default(Path::new(SETTINGS_FILE)),
    }
}
