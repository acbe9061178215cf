//! Build command implementation.

use crate::cli::BuildArgs;
use crate::config::Profile;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use versus_content::{load_catalog, ValidationConfig, Validator};
use versus_render::render_page;

/// Execute the build command: validate the catalog, then render every
/// page to `<out>/<slug>.html`.
pub fn execute_build(args: BuildArgs, profile: &Profile, formatter: &Formatter) -> Result<()> {
    let content_dir = args.content.unwrap_or_else(|| profile.content_dir.clone());
    let out_dir = args.out.unwrap_or_else(|| profile.output_dir.clone());

    let catalog = load_catalog(&content_dir)?;
    let report = Validator::new(ValidationConfig::default()).validate_catalog(catalog.pages());
    if report.has_errors() {
        println!("{}", formatter.format_report(&report)?);
        let errors = report
            .issues()
            .iter()
            .filter(|i| i.severity == versus_content::Severity::Error)
            .count();
        return Err(CliError::ValidationFailed(errors));
    }

    fs::create_dir_all(&out_dir)?;
    for page in catalog.pages() {
        let html = render_page(page)?;
        let path: PathBuf = out_dir.join(format!("{}.html", page.slug));
        fs::write(&path, html)?;
        info!(slug = %page.slug, path = %path.display(), "rendered page");
    }

    println!(
        "{}",
        formatter.success(&format!(
            "Rendered {} page(s) to {}",
            catalog.len(),
            out_dir.display()
        ))
    );
    Ok(())
}
