//! Export command handler

use nu_prereqs::config::Config;
use nu_prereqs::core::ingest::{export_catalog_json, save_catalog_json};
use nu_prereqs::core::models::Catalog;
use nu_prereqs::{error, info};
use std::path::{Path, PathBuf};

/// Export the parsed catalog as JSON to a file or stdout
pub fn run(catalog: &Catalog, output: Option<&Path>, to_stdout: bool, config: &Config) {
    if to_stdout {
        match export_catalog_json(catalog) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Catalog serialization failed: {e}");
                eprintln!("✗ Failed to serialize catalog: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let path = output.map_or_else(
        || PathBuf::from(&config.paths.exports_dir).join(format!("{}.json", catalog.name)),
        Path::to_path_buf,
    );

    match save_catalog_json(catalog, &path) {
        Ok(()) => {
            info!("Exported {} course(s) to {}", catalog.len(), path.display());
            println!("✓ Catalog exported to: {}", path.display());
        }
        Err(e) => {
            error!("Catalog export to {} failed: {e}", path.display());
            eprintln!("✗ Failed to export catalog to {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
