//! Versus Content
//!
//! Loads and validates authored page content for the Versus engine.
//!
//! Pages are TOML files, one per page, each carrying the full page data
//! (hero, features, pricing, pros/cons, FAQs, alternatives) and, on
//! comparison pages, a scoreboard block that converts into the domain
//! [`versus_domain::ComparisonTable`].
//!
//! # Examples
//!
//! ```no_run
//! use versus_content::{load_catalog, ValidationConfig, Validator};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("content"))?;
//! let report = Validator::new(ValidationConfig::default()).validate_catalog(catalog.pages());
//! assert!(!report.has_errors());
//! # Ok::<(), versus_content::ContentError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod loader;
mod model;
mod validator;

pub use error::{ContentError, Result};
pub use loader::{load_catalog, load_page, Catalog};
pub use model::{
    Alternative, ComparisonData, EntityData, FaqItem, Feature, Hero, Page, PricingPlan, RowData,
};
pub use validator::{Issue, Severity, ValidationConfig, ValidationReport, Validator};
