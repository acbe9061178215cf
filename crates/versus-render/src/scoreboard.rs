//! Scoreboard rendering
//!
//! The consumer side of the comparison scorer: one row per dimension with
//! the winning cell marked, an averages row, and an overall-winner
//! callout labeled with its average. The ranking is recomputed from the
//! table on every call; nothing is cached between renders.

use crate::error::Result;
use crate::html::{escape, HtmlBuilder};
use versus_domain::{format_one_decimal, rank, ComparisonTable, EntityKey};

/// Render a comparison table as scoreboard markup.
pub fn render_scoreboard(table: &ComparisonTable) -> Result<String> {
    let ranking = rank(table)?;
    let order: Vec<&EntityKey> = table.entity_order().collect();

    let mut b = HtmlBuilder::new();
    b.line("<section class=\"scoreboard\" id=\"verdict\">");
    b.line("<table>");

    b.line("<thead>");
    b.line("<tr>");
    b.line("<th></th>");
    for entity in table.entities() {
        b.line(format!("<th>{}</th>", escape(&entity.display_name)));
    }
    b.line("</tr>");
    b.line("</thead>");

    b.line("<tbody>");
    for (row, winner) in table.rows().iter().zip(ranking.dimension_winners()) {
        b.line("<tr>");
        b.line(format!("<th>{}</th>", escape(&row.dimension().label)));
        for key in &order {
            let score = row.score_for(key);
            if *key == winner {
                b.line(format!("<td class=\"winner\">{}</td>", score));
            } else {
                b.line(format!("<td>{}</td>", score));
            }
        }
        b.line("</tr>");
    }

    b.line("<tr class=\"averages\">");
    b.line("<th>Overall</th>");
    for key in &order {
        // rank() guarantees an average for every entity in the order.
        let average = ranking.average_for(key).unwrap_or_default();
        if *key == ranking.overall_winner() {
            b.line(format!(
                "<td class=\"winner\">{}</td>",
                format_one_decimal(average)
            ));
        } else {
            b.line(format!("<td>{}</td>", format_one_decimal(average)));
        }
    }
    b.line("</tr>");
    b.line("</tbody>");
    b.line("</table>");

    let winner_key = ranking.overall_winner();
    let winner_name = table
        .display_name(winner_key)
        .unwrap_or_else(|| winner_key.as_str());
    let winner_average = ranking.average_for(winner_key).unwrap_or_default();
    b.line(format!(
        "<p class=\"verdict\">Winner: <strong>{}</strong> ({})</p>",
        escape(winner_name),
        format_one_decimal(winner_average)
    ));
    b.line("</section>");

    Ok(b.finish())
}
