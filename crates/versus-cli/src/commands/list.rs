//! List command implementation.

use crate::cli::ListArgs;
use crate::config::Profile;
use crate::error::Result;
use crate::output::Formatter;
use versus_content::load_catalog;

/// Execute the list command: print the catalog's pages.
pub fn execute_list(args: ListArgs, profile: &Profile, formatter: &Formatter) -> Result<()> {
    let content_dir = args.content.unwrap_or_else(|| profile.content_dir.clone());
    let catalog = load_catalog(&content_dir)?;
    println!("{}", formatter.format_pages(catalog.pages())?);
    Ok(())
}
