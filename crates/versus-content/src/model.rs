//! Page data model
//!
//! The typed shape of one authored page file. Every page carries the same
//! sections (hero, features, pricing, pros/cons, FAQs, alternatives) with
//! an optional comparison scoreboard; the data is passed explicitly into
//! the renderer rather than living as module-level singletons, so a page
//! render is a pure function of its `Page` value.

use crate::error::{ContentError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use versus_domain::{ComparisonTable, Dimension, DimensionRow, Entity, EntityKey, Score};
use versus_domain::{MAX_SCORE, MIN_SCORE};

/// One authored page: static content plus an optional comparison block
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// URL slug; also the output file stem
    pub slug: String,

    /// Page title, rendered into the document head and hero
    pub title: String,

    /// SEO meta description
    #[serde(default)]
    pub description: Option<String>,

    /// Hero banner copy
    pub hero: Hero,

    /// Feature grid entries
    #[serde(default)]
    pub features: Vec<Feature>,

    /// Pricing table plans
    #[serde(default)]
    pub pricing: Vec<PricingPlan>,

    /// Pros list
    #[serde(default)]
    pub pros: Vec<String>,

    /// Cons list
    #[serde(default)]
    pub cons: Vec<String>,

    /// FAQ accordion items
    #[serde(default)]
    pub faqs: Vec<FaqItem>,

    /// Alternatives list
    #[serde(default)]
    pub alternatives: Vec<Alternative>,

    /// Comparison scoreboard, present on "X vs Y" pages only
    #[serde(default)]
    pub comparison: Option<ComparisonData>,
}

/// Hero banner copy
#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    /// Main headline
    pub headline: String,

    /// Supporting line under the headline
    #[serde(default)]
    pub subheadline: Option<String>,

    /// Call-to-action button label
    pub cta_label: String,

    /// Call-to-action target URL
    pub cta_url: String,
}

/// One feature grid entry
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Feature name
    pub name: String,

    /// Short description
    pub description: String,
}

/// One pricing table plan
#[derive(Debug, Clone, Deserialize)]
pub struct PricingPlan {
    /// Plan name (e.g. "Free", "Pro")
    pub name: String,

    /// Displayed price string, authored as-is (e.g. "$15/mo")
    pub price: String,

    /// Bullet points for the plan
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// One FAQ question/answer pair
#[derive(Debug, Clone, Deserialize)]
pub struct FaqItem {
    /// The question
    pub question: String,

    /// The answer
    pub answer: String,
}

/// One entry in the alternatives list
#[derive(Debug, Clone, Deserialize)]
pub struct Alternative {
    /// Alternative tool name
    pub name: String,

    /// One-line pitch
    pub blurb: String,

    /// Link target
    #[serde(default)]
    pub url: Option<String>,
}

/// Raw comparison block as authored in TOML
///
/// This is the candidate form; [`ComparisonData::to_table`] converts it
/// into the domain [`ComparisonTable`] once the scores check out.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonData {
    /// Competing entities in display and tie-break order
    pub entities: Vec<EntityData>,

    /// Dimension rows in display order
    pub rows: Vec<RowData>,
}

/// One authored entity
#[derive(Debug, Clone, Deserialize)]
pub struct EntityData {
    /// Stable key used in score rows
    pub key: String,

    /// Human-facing name
    pub name: String,
}

/// One authored dimension row
#[derive(Debug, Clone, Deserialize)]
pub struct RowData {
    /// Dimension label
    pub label: String,

    /// Entity key → score value
    pub scores: HashMap<String, f64>,
}

impl ComparisonData {
    /// Convert the authored block into a domain comparison table
    ///
    /// Rejects out-of-range scores here rather than letting the domain
    /// constructor panic on authored data; structural issues (holes,
    /// duplicate labels) are the validator's job and pass through.
    pub fn to_table(&self) -> Result<ComparisonTable> {
        let entities = self
            .entities
            .iter()
            .map(|e| Entity::new(e.key.as_str(), e.name.as_str()))
            .collect();

        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut scores = Vec::with_capacity(row.scores.len());
            for (entity, value) in &row.scores {
                if !value.is_finite() || *value < MIN_SCORE || *value > MAX_SCORE {
                    return Err(ContentError::ScoreOutOfRange {
                        dimension: row.label.clone(),
                        entity: entity.clone(),
                        value: *value,
                    });
                }
                scores.push((EntityKey::new(entity.as_str()), Score::new(*value)));
            }
            rows.push(DimensionRow::new(Dimension::new(row.label.as_str()), scores));
        }

        Ok(ComparisonTable::new(entities, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison(scores: &[(&str, &[(&str, f64)])]) -> ComparisonData {
        ComparisonData {
            entities: vec![
                EntityData {
                    key: "a".into(),
                    name: "A".into(),
                },
                EntityData {
                    key: "b".into(),
                    name: "B".into(),
                },
            ],
            rows: scores
                .iter()
                .map(|(label, pairs)| RowData {
                    label: (*label).into(),
                    scores: pairs.iter().map(|(k, v)| ((*k).into(), *v)).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_to_table_preserves_order_and_scores() {
        let data = comparison(&[
            ("one", &[("a", 8.0), ("b", 6.0)]),
            ("two", &[("a", 5.0), ("b", 9.0)]),
        ]);
        let table = data.to_table().unwrap();

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].dimension().label, "one");
        assert_eq!(
            table.rows()[1].score_for(&EntityKey::new("b")).value(),
            9.0
        );
        let order: Vec<&str> = table.entity_order().map(EntityKey::as_str).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn test_to_table_rejects_out_of_range_score() {
        let data = comparison(&[("one", &[("a", 11.0), ("b", 6.0)])]);
        let err = data.to_table().unwrap_err();
        assert!(matches!(
            err,
            ContentError::ScoreOutOfRange { value, .. } if value == 11.0
        ));
    }

    #[test]
    fn test_page_parses_from_toml() {
        let toml = r#"
            slug = "loom-review"
            title = "Loom Review"
            description = "Is Loom worth it?"

            [hero]
            headline = "Loom Review"
            cta_label = "Try Loom"
            cta_url = "https://example.com/loom"

            [[features]]
            name = "Instant sharing"
            description = "Links are ready the moment you stop recording."

            [[faqs]]
            question = "Is there a free plan?"
            answer = "Yes, up to 25 videos."
        "#;
        let page: Page = toml::from_str(toml).unwrap();
        assert_eq!(page.slug, "loom-review");
        assert_eq!(page.features.len(), 1);
        assert_eq!(page.faqs.len(), 1);
        assert!(page.comparison.is_none());
        assert!(page.pricing.is_empty());
    }

    #[test]
    fn test_comparison_block_parses_from_toml() {
        // r## because the fixture contains a "#verdict" anchor.
        let toml = r##"
            slug = "a-vs-b"
            title = "A vs B"

            [hero]
            headline = "A vs B"
            cta_label = "See winner"
            cta_url = "#verdict"

            [comparison]
            entities = [
                { key = "a", name = "A" },
                { key = "b", name = "B" },
            ]

            [[comparison.rows]]
            label = "Editing power"
            scores = { a = 7.8, b = 9.3 }
        "##;
        let page: Page = toml::from_str(toml).unwrap();
        let comparison = page.comparison.unwrap();
        assert_eq!(comparison.rows[0].label, "Editing power");
        assert_eq!(comparison.rows[0].scores["b"], 9.3);
    }
}
