//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::Profile;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use versus_content::{load_catalog, Severity, ValidationConfig, Validator};

/// Execute the check command: validate the catalog and print the report.
pub fn execute_check(args: CheckArgs, profile: &Profile, formatter: &Formatter) -> Result<()> {
    let content_dir = args.content.unwrap_or_else(|| profile.content_dir.clone());

    let config = if args.permissive {
        ValidationConfig::permissive()
    } else {
        ValidationConfig::default()
    };

    let catalog = load_catalog(&content_dir)?;
    let report = Validator::new(config).validate_catalog(catalog.pages());
    println!("{}", formatter.format_report(&report)?);

    if report.has_errors() {
        let errors = report
            .issues()
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        return Err(CliError::ValidationFailed(errors));
    }
    Ok(())
}
