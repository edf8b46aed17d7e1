//! Report command handler

use nu_prereqs::config::Config;
use nu_prereqs::core::models::{normalize_course_id, Catalog, Transcript};
use nu_prereqs::core::report::{ReportContext, ReportFormat};
use nu_prereqs::core::validator::PrerequisiteValidator;
use nu_prereqs::{error, info};
use std::path::{Path, PathBuf};

/// Options for one report run
pub struct ReportRequest<'a> {
    /// Target course to analyze
    pub target: Option<&'a str>,
    /// Output format
    pub format: ReportFormat,
    /// Explicit output path
    pub output: Option<&'a Path>,
}

/// Generate a report and print where it was written
pub fn run(catalog: &Catalog, transcript: &Transcript, request: &ReportRequest, config: &Config) {
    match generate(catalog, transcript, request, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("✗ Report generation failed: {err}");
            std::process::exit(1);
        }
    }
}

fn generate(
    catalog: &Catalog,
    transcript: &Transcript,
    request: &ReportRequest,
    config: &Config,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let validator = PrerequisiteValidator::new(catalog);
    let ctx = ReportContext::new(
        &validator,
        transcript,
        request.target,
        config.suggestions.limit,
    );

    let path = request.output.map_or_else(
        || default_output_path(config, catalog, request.target, request.format),
        Path::to_path_buf,
    );

    request.format.generator().generate(&ctx, &path)?;
    info!("Wrote {} report to {}", request.format, path.display());
    Ok(path)
}

/// `<reports_dir>/<catalog>[-<target>]-report.<ext>`
fn default_output_path(
    config: &Config,
    catalog: &Catalog,
    target: Option<&str>,
    format: ReportFormat,
) -> PathBuf {
    let stem = target.map_or_else(
        || catalog.name.clone(),
        |t| format!("{}-{}", catalog.name, normalize_course_id(t)),
    );
    PathBuf::from(&config.paths.reports_dir).join(format!("{stem}-report.{}", format.extension()))
}
