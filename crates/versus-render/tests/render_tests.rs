//! Integration tests for full-page rendering

use versus_content::Page;
use versus_render::render_page;

// r## because the fixture contains a "#verdict" anchor.
const COMPARISON_PAGE: &str = r##"
slug = "riverside-vs-loom-vs-descript"
title = "Riverside vs Loom vs Descript"
description = "Three recording tools, one scoreboard."

[hero]
headline = "Riverside vs Loom vs Descript"
cta_label = "Jump to verdict"
cta_url = "#verdict"

pros = ["All three have free tiers"]
cons = ["None nails live streaming"]

[[faqs]]
question = "Which is best for podcasts?"
answer = "Riverside records the highest quality raw tracks."

[comparison]
entities = [
    { key = "riverside", name = "Riverside" },
    { key = "loom", name = "Loom" },
    { key = "descript", name = "Descript" },
]

[[comparison.rows]]
label = "Recording quality"
scores = { riverside = 9.5, loom = 7.0, descript = 8.4 }

[[comparison.rows]]
label = "Ease to share"
scores = { riverside = 7.0, loom = 9.4, descript = 8.1 }

[[comparison.rows]]
label = "Editing power"
scores = { riverside = 7.8, loom = 7.5, descript = 9.3 }

[[comparison.rows]]
label = "Speed to publish"
scores = { riverside = 8.0, loom = 9.5, descript = 8.7 }

[[comparison.rows]]
label = "Value for money"
scores = { riverside = 8.8, loom = 8.9, descript = 9.0 }
"##;

fn comparison_page() -> Page {
    toml::from_str(COMPARISON_PAGE).unwrap()
}

#[test]
fn test_scoreboard_shows_averages_and_verdict() {
    let html = render_page(&comparison_page()).unwrap();

    // Averages display to one decimal: 8.22 -> 8.2, 8.46 -> 8.5, 8.70 -> 8.7.
    assert!(html.contains("<td>8.2</td>"));
    assert!(html.contains("<td>8.5</td>"));
    assert!(html.contains("<td class=\"winner\">8.7</td>"));
    assert!(html.contains("Winner: <strong>Descript</strong> (8.7)"));
}

#[test]
fn test_each_dimension_row_marks_its_winner() {
    let html = render_page(&comparison_page()).unwrap();

    // Riverside takes recording quality, Loom takes sharing and speed,
    // Descript takes editing and value; plus the averages-row winner.
    assert_eq!(html.matches("class=\"winner\"").count(), 6);
    assert!(html.contains("<td class=\"winner\">9.5</td>"));
}

#[test]
fn test_render_is_idempotent() {
    let page = comparison_page();
    let first = render_page(&page).unwrap();
    let second = render_page(&page).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_faq_defaults_collapsed() {
    let html = render_page(&comparison_page()).unwrap();
    assert!(html.contains("<details>"));
    assert!(!html.contains("<details open>"));
}
