//! `config` subcommand: inspect and edit the stored configuration

use crate::args::ConfigSubcommand;
use nu_prereqs::config::Config;
use nu_prereqs::core::ingest::load_catalog;
use nu_prereqs::{error, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Dispatch config subcommands; any failure exits with status 1
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| format!("Unknown config key: '{key}'")),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = result {
        error!("config: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn show(config: &Config) {
    println!("Config file: {}\n", Config::get_config_file_path().display());
    print!("{config}");
    println!("\n{}", catalog_status(&config.catalog.path));
}

/// One line saying whether the configured catalog can be used
fn catalog_status(path: &str) -> String {
    if path.is_empty() {
        return "Catalog: not configured".to_string();
    }
    match load_catalog(Path::new(path)) {
        Ok(catalog) => format!("Catalog: {} course(s) in {path}", catalog.len()),
        Err(e) => format!("Catalog: cannot be loaded ({e})"),
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    let value = if key == "catalog" {
        resolve_catalog(value)?
    } else {
        value.to_string()
    };
    config.set(key, &value)?;
    save(config)?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Make a catalog path absolute and check that it loads
///
/// Paths using `$NU_PREREQS` are kept as written; they are expanded on load.
fn resolve_catalog(value: &str) -> Result<String, String> {
    if value.contains('$') {
        return Ok(value.to_string());
    }
    let path =
        fs::canonicalize(value).map_err(|e| format!("Catalog file '{value}' not found: {e}"))?;
    let catalog = load_catalog(&path)
        .map_err(|e| format!("Catalog {} cannot be loaded: {e}", path.display()))?;
    info!("Catalog '{}' checked: {} course(s)", catalog.name, catalog.len());
    Ok(path.to_string_lossy().into_owned())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    save(config)?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn save(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }
    if !confirm("Reset config to defaults? (y/n): ") {
        println!("Reset cancelled");
        return Ok(());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}
