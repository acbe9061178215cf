//! Content catalog loading
//!
//! Reads every `*.toml` page file under a content directory into a
//! [`Catalog`]. Files load in file-name order so catalog order (and the
//! rendered output) is deterministic across runs and platforms.

use crate::error::{ContentError, Result};
use crate::model::Page;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The loaded set of pages, in file-name order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pages: Vec<Page>,
}

impl Catalog {
    /// All pages in catalog order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Look up a page by slug.
    pub fn find(&self, slug: &str) -> Result<&Page> {
        self.pages
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::UnknownSlug(slug.to_string()))
    }

    /// Number of pages in the catalog.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the catalog holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Load a single page file.
pub fn load_page(path: &Path) -> Result<Page> {
    debug!(path = %path.display(), "loading page file");
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every page file under `dir` into a catalog.
///
/// Only files with a `.toml` extension are considered; anything else in
/// the directory is ignored.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    let mut pages = Vec::with_capacity(paths.len());
    for path in &paths {
        pages.push(load_page(path)?);
    }

    info!(count = pages.len(), dir = %dir.display(), "loaded content catalog");
    Ok(Catalog { pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_unknown_slug() {
        let catalog = Catalog { pages: vec![] };
        let err = catalog.find("missing").unwrap_err();
        assert!(matches!(err, ContentError::UnknownSlug(s) if s == "missing"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog { pages: vec![] };
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
