//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use versus_content::{Page, Severity, ValidationReport};
use versus_domain::{format_one_decimal, ComparisonTable, EntityKey, RankingResult};

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a scoreboard ranking.
    pub fn format_ranking(
        &self,
        table: &ComparisonTable,
        ranking: &RankingResult,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_ranking_json(table, ranking),
            OutputFormat::Table => Ok(self.format_ranking_table(table, ranking)),
            OutputFormat::Quiet => Ok(ranking.overall_winner().to_string()),
        }
    }

    /// Format a ranking as JSON.
    fn format_ranking_json(
        &self,
        table: &ComparisonTable,
        ranking: &RankingResult,
    ) -> Result<String> {
        let averages: serde_json::Map<String, serde_json::Value> = ranking
            .averages()
            .iter()
            .map(|(key, avg)| (key.to_string(), serde_json::json!(avg)))
            .collect();
        let winners: Vec<serde_json::Value> = table
            .rows()
            .iter()
            .zip(ranking.dimension_winners())
            .map(|(row, winner)| {
                serde_json::json!({
                    "dimension": row.dimension().label,
                    "winner": winner.to_string(),
                })
            })
            .collect();

        let value = serde_json::json!({
            "dimensions": winners,
            "averages": averages,
            "overall_winner": ranking.overall_winner().to_string(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a ranking as a table; winning cells carry a `*` marker.
    fn format_ranking_table(&self, table: &ComparisonTable, ranking: &RankingResult) -> String {
        let order: Vec<&EntityKey> = table.entity_order().collect();

        let mut builder = Builder::default();
        let mut header = vec!["Dimension".to_string()];
        header.extend(table.entities().iter().map(|e| e.display_name.clone()));
        builder.push_record(header);

        for (row, winner) in table.rows().iter().zip(ranking.dimension_winners()) {
            let mut record = vec![row.dimension().label.clone()];
            for key in &order {
                let score = row.score_for(key).to_string();
                if *key == winner {
                    record.push(format!("{} *", score));
                } else {
                    record.push(score);
                }
            }
            builder.push_record(record);
        }

        let mut averages = vec!["Overall".to_string()];
        for key in &order {
            let average = format_one_decimal(ranking.average_for(key).unwrap_or_default());
            if *key == ranking.overall_winner() {
                averages.push(format!("{} *", average));
            } else {
                averages.push(average);
            }
        }
        builder.push_record(averages);

        let mut rendered = builder.build();
        rendered
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let winner_key = ranking.overall_winner();
        let winner_name = table
            .display_name(winner_key)
            .unwrap_or_else(|| winner_key.as_str());
        let verdict = self.success(&format!(
            "Overall winner: {} ({})",
            winner_name,
            format_one_decimal(ranking.average_for(winner_key).unwrap_or_default())
        ));

        format!("{}\n{}", rendered, verdict)
    }

    /// Format a validation report.
    pub fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let issues: Vec<serde_json::Value> = report
                    .issues()
                    .iter()
                    .map(|issue| {
                        serde_json::json!({
                            "page": issue.page_slug,
                            "severity": match issue.severity {
                                Severity::Error => "error",
                                Severity::Warning => "warning",
                            },
                            "message": issue.message,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&issues)?)
            }
            OutputFormat::Table | OutputFormat::Quiet => {
                if report.is_clean() {
                    return Ok(self.success("Catalog is valid."));
                }
                let lines: Vec<String> = report
                    .issues()
                    .iter()
                    .map(|issue| {
                        let prefix = match issue.severity {
                            Severity::Error => self.colorize("error", "red"),
                            Severity::Warning => self.colorize("warning", "yellow"),
                        };
                        format!("{}: [{}] {}", prefix, issue.page_slug, issue.message)
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the page listing.
    pub fn format_pages(&self, pages: &[Page]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = pages
                    .iter()
                    .map(|page| {
                        serde_json::json!({
                            "slug": page.slug,
                            "title": page.title,
                            "comparison": page.comparison.is_some(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Quiet => Ok(pages
                .iter()
                .map(|p| p.slug.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if pages.is_empty() {
                    return Ok(self.colorize("No pages found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Slug", "Title", "Kind"]);
                for page in pages {
                    let kind = if page.comparison.is_some() {
                        "comparison"
                    } else {
                        "review"
                    };
                    builder.push_record([page.slug.as_str(), page.title.as_str(), kind]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}
