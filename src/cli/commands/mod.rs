//! CLI command handlers for `NuPrereqs`.
//!
//! Each command is implemented in its own submodule. Commands that query a
//! catalog receive it already loaded.

pub mod check;
pub mod config;
pub mod export;
pub mod graph;
pub mod parse;
pub mod report;
pub mod suggest;

use nu_prereqs::config::Config;
use nu_prereqs::core::ingest::load_catalog;
use nu_prereqs::core::models::{Catalog, Transcript};
use nu_prereqs::{error, info};
use std::path::Path;

/// Load the catalog named by `--catalog` or the config `catalog` key
///
/// # Errors
/// Returns a printable message when no catalog is configured or it cannot be loaded
pub fn load_configured_catalog(config: &Config) -> Result<Catalog, String> {
    if config.catalog.path.is_empty() {
        return Err(
            "✗ No catalog configured. Pass --catalog FILE or run `nuprereqs config set catalog FILE`."
                .to_string(),
        );
    }

    let path = Path::new(&config.catalog.path);
    let catalog = load_catalog(path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", path.display());
        format!("✗ Failed to load catalog {}: {e}", path.display())
    })?;

    info!("Catalog '{}' ready with {} course(s)", catalog.name, catalog.len());
    Ok(catalog)
}

/// Build a transcript from `--completed` values, ignoring blanks
pub fn transcript_from(completed: &[String]) -> Transcript {
    completed
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_from_skips_blanks() {
        let transcript = transcript_from(&["cmpt 120".to_string(), " ".to_string()]);
        assert_eq!(transcript.sorted(), vec!["CMPT-120"]);
    }

    #[test]
    fn test_missing_catalog_path() {
        let config = Config::default();
        let err = load_configured_catalog(&config).unwrap_err();
        assert!(err.contains("No catalog configured"));
    }
}
