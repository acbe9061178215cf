//! Page content validation
//!
//! Checks a loaded catalog against the authoring invariants before
//! anything renders: unique slugs, non-empty copy in required sections,
//! and well-formed comparison blocks (scores in range, unique dimension
//! labels, every entity scored in every row). The scorer zero-fills a
//! missing entry at evaluation time, but a hole in authored data is
//! almost always a typo, so the validator reports it rather than letting
//! a silent zero skew the ranking.

use crate::model::{ComparisonData, Page};
use std::collections::HashSet;
use tracing::debug;
use versus_domain::{MAX_SCORE, MIN_SCORE};

/// Configuration for validation rules
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Enable score range checking on comparison rows
    pub validate_score_range: bool,

    /// Require every entity to be scored in every row
    pub validate_full_rows: bool,

    /// Require dimension labels to be unique within a table
    pub validate_unique_labels: bool,

    /// Require slugs to be unique across the catalog
    pub validate_unique_slugs: bool,

    /// Minimum number of entities a comparison block must carry
    pub min_entities: usize,

    /// Minimum number of dimension rows a comparison block must carry
    pub min_dimensions: usize,

    /// Warn on pages without an SEO meta description
    pub warn_missing_description: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_score_range: true,
            validate_full_rows: true,
            validate_unique_labels: true,
            validate_unique_slugs: true,
            min_entities: 2,
            min_dimensions: 1,
            warn_missing_description: true,
        }
    }
}

impl ValidationConfig {
    /// Permissive preset: structural checks only
    pub fn permissive() -> Self {
        Self {
            validate_score_range: true,
            validate_full_rows: false,
            validate_unique_labels: false,
            validate_unique_slugs: true,
            min_entities: 2,
            min_dimensions: 1,
            warn_missing_description: false,
        }
    }

    /// Strict preset: every check enabled
    pub fn strict() -> Self {
        Self::default()
    }
}

/// How serious a reported issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The page must not render until fixed
    Error,

    /// Worth fixing, but rendering can proceed
    Warning,
}

/// One validation finding
#[derive(Debug, Clone)]
pub struct Issue {
    /// Slug of the page the issue was found on
    pub page_slug: String,

    /// How serious the issue is
    pub severity: Severity,

    /// Human-readable description
    pub message: String,
}

/// The outcome of validating a catalog
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// All findings, in catalog order
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Whether any finding is an error
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Whether the report is empty
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn error(&mut self, slug: &str, message: impl Into<String>) {
        self.issues.push(Issue {
            page_slug: slug.to_string(),
            severity: Severity::Error,
            message: message.into(),
        });
    }

    fn warning(&mut self, slug: &str, message: impl Into<String>) {
        self.issues.push(Issue {
            page_slug: slug.to_string(),
            severity: Severity::Warning,
            message: message.into(),
        });
    }
}

/// Validates pages and catalogs against the authoring invariants
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a whole catalog
    pub fn validate_catalog(&self, pages: &[Page]) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.config.validate_unique_slugs {
            let mut seen = HashSet::new();
            for page in pages {
                if !seen.insert(page.slug.as_str()) {
                    report.error(&page.slug, "duplicate slug in catalog");
                }
            }
        }

        for page in pages {
            self.validate_page_into(page, &mut report);
        }

        debug!(
            issues = report.issues.len(),
            errors = report.has_errors(),
            "catalog validation finished"
        );
        report
    }

    /// Validate a single page
    pub fn validate_page(&self, page: &Page) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.validate_page_into(page, &mut report);
        report
    }

    fn validate_page_into(&self, page: &Page, report: &mut ValidationReport) {
        if page.slug.trim().is_empty() {
            report.error(&page.slug, "slug is empty");
        }
        if page.title.trim().is_empty() {
            report.error(&page.slug, "title is empty");
        }
        if page.hero.headline.trim().is_empty() {
            report.error(&page.slug, "hero headline is empty");
        }
        if self.config.warn_missing_description && page.description.is_none() {
            report.warning(&page.slug, "page has no meta description");
        }

        if let Some(comparison) = &page.comparison {
            self.validate_comparison(&page.slug, comparison, report);
        }
    }

    fn validate_comparison(
        &self,
        slug: &str,
        comparison: &ComparisonData,
        report: &mut ValidationReport,
    ) {
        if comparison.entities.len() < self.config.min_entities {
            report.error(
                slug,
                format!(
                    "comparison needs at least {} entities, found {}",
                    self.config.min_entities,
                    comparison.entities.len()
                ),
            );
        }
        if comparison.rows.len() < self.config.min_dimensions {
            report.error(
                slug,
                format!(
                    "comparison needs at least {} dimension rows, found {}",
                    self.config.min_dimensions,
                    comparison.rows.len()
                ),
            );
        }

        let mut entity_keys = HashSet::new();
        for entity in &comparison.entities {
            if !entity_keys.insert(entity.key.as_str()) {
                report.error(slug, format!("duplicate entity key '{}'", entity.key));
            }
        }

        if self.config.validate_unique_labels {
            let mut labels = HashSet::new();
            for row in &comparison.rows {
                if !labels.insert(row.label.as_str()) {
                    report.error(slug, format!("duplicate dimension label '{}'", row.label));
                }
            }
        }

        for row in &comparison.rows {
            if self.config.validate_score_range {
                for (entity, value) in &row.scores {
                    if !value.is_finite() || *value < MIN_SCORE || *value > MAX_SCORE {
                        report.error(
                            slug,
                            format!(
                                "score {} for '{}' on '{}' is outside [0, 10]",
                                value, entity, row.label
                            ),
                        );
                    }
                }
            }

            if self.config.validate_full_rows {
                for entity in &comparison.entities {
                    if !row.scores.contains_key(&entity.key) {
                        report.error(
                            slug,
                            format!("row '{}' has no score for '{}'", row.label, entity.key),
                        );
                    }
                }
            }

            // Scores for entities the table never declares are dead data.
            for entity in row.scores.keys() {
                if !entity_keys.contains(entity.as_str()) {
                    report.warning(
                        slug,
                        format!("row '{}' scores undeclared entity '{}'", row.label, entity),
                    );
                }
            }
        }
    }
}
