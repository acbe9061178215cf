//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::config::Profile;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use versus_content::load_catalog;
use versus_domain::rank;

/// Execute the score command: rank one page's comparison block and print it.
pub fn execute_score(args: ScoreArgs, profile: &Profile, formatter: &Formatter) -> Result<()> {
    let content_dir = args.content.unwrap_or_else(|| profile.content_dir.clone());

    let catalog = load_catalog(&content_dir)?;
    let page = catalog.find(&args.page)?;
    let comparison = page.comparison.as_ref().ok_or_else(|| {
        CliError::InvalidInput(format!("page '{}' has no comparison block", page.slug))
    })?;

    let table = comparison.to_table()?;
    let ranking = rank(&table)?;
    println!("{}", formatter.format_ranking(&table, &ranking)?);
    Ok(())
}
