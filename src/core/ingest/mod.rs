//! Catalog ingestion and persistence

pub mod csv_catalog;
pub mod json_store;

pub use csv_catalog::{load_catalog_csv, read_catalog_csv};
pub use json_store::{
    export_catalog_json, import_catalog_json, load_catalog_json, save_catalog_json, StoredCourse,
};

use crate::core::models::Catalog;
use std::error::Error;
use std::path::Path;

/// Load a catalog from disk, picking the reader by file extension
///
/// `.json` files are read as exported catalogs; everything else is read as CSV.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded
pub fn load_catalog(path: &Path) -> Result<Catalog, Box<dyn Error>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        load_catalog_json(path)
    } else {
        load_catalog_csv(path)
    }
}
