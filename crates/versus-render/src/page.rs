//! Full page rendering
//!
//! Turns one [`Page`] value into a complete HTML document. Every section
//! is a straight mapping from authored data to markup; the only computed
//! content is the scoreboard, delegated to [`crate::render_scoreboard`].

use crate::error::Result;
use crate::faq::{render_faqs, FaqState};
use crate::html::{escape, HtmlBuilder};
use crate::scoreboard::render_scoreboard;
use versus_content::Page;

/// Render a page to a standalone HTML document.
pub fn render_page(page: &Page) -> Result<String> {
    let mut b = HtmlBuilder::new();

    b.line("<!DOCTYPE html>");
    b.line("<html lang=\"en\">");
    b.line("<head>");
    b.line("<meta charset=\"utf-8\">");
    b.line(format!("<title>{}</title>", escape(&page.title)));
    if let Some(description) = &page.description {
        b.line(format!(
            "<meta name=\"description\" content=\"{}\">",
            escape(description)
        ));
    }
    b.line("</head>");
    b.line("<body>");

    render_hero(page, &mut b);
    render_features(page, &mut b);
    render_pricing(page, &mut b);
    render_pros_cons(page, &mut b);

    if let Some(comparison) = &page.comparison {
        let table = comparison.to_table()?;
        b.raw(&render_scoreboard(&table)?);
    }

    b.raw(&render_faqs(&page.faqs, FaqState::Collapsed));
    render_alternatives(page, &mut b);
    render_final_cta(page, &mut b);

    b.line("</body>");
    b.line("</html>");
    Ok(b.finish())
}

fn render_hero(page: &Page, b: &mut HtmlBuilder) {
    b.line("<section class=\"hero\">");
    b.line(format!("<h1>{}</h1>", escape(&page.hero.headline)));
    if let Some(subheadline) = &page.hero.subheadline {
        b.line(format!("<p>{}</p>", escape(subheadline)));
    }
    b.line(format!(
        "<a class=\"cta\" href=\"{}\">{}</a>",
        escape(&page.hero.cta_url),
        escape(&page.hero.cta_label)
    ));
    b.line("</section>");
}

fn render_features(page: &Page, b: &mut HtmlBuilder) {
    if page.features.is_empty() {
        return;
    }
    b.line("<section class=\"features\">");
    b.line("<h2>Features</h2>");
    b.line("<ul>");
    for feature in &page.features {
        b.line(format!(
            "<li><strong>{}</strong> {}</li>",
            escape(&feature.name),
            escape(&feature.description)
        ));
    }
    b.line("</ul>");
    b.line("</section>");
}

fn render_pricing(page: &Page, b: &mut HtmlBuilder) {
    if page.pricing.is_empty() {
        return;
    }
    b.line("<section class=\"pricing\">");
    b.line("<h2>Pricing</h2>");
    b.line("<table>");
    b.line("<thead>");
    b.line("<tr>");
    for plan in &page.pricing {
        b.line(format!("<th>{}</th>", escape(&plan.name)));
    }
    b.line("</tr>");
    b.line("</thead>");
    b.line("<tbody>");
    b.line("<tr>");
    for plan in &page.pricing {
        b.line(format!("<td>{}</td>", escape(&plan.price)));
    }
    b.line("</tr>");
    b.line("<tr>");
    for plan in &page.pricing {
        let bullets: Vec<String> = plan
            .bullets
            .iter()
            .map(|bullet| format!("<li>{}</li>", escape(bullet)))
            .collect();
        b.line(format!("<td><ul>{}</ul></td>", bullets.concat()));
    }
    b.line("</tr>");
    b.line("</tbody>");
    b.line("</table>");
    b.line("</section>");
}

fn render_pros_cons(page: &Page, b: &mut HtmlBuilder) {
    if page.pros.is_empty() && page.cons.is_empty() {
        return;
    }
    b.line("<section class=\"pros-cons\">");
    if !page.pros.is_empty() {
        b.line("<h2>Pros</h2>");
        b.line("<ul class=\"pros\">");
        for pro in &page.pros {
            b.line(format!("<li>{}</li>", escape(pro)));
        }
        b.line("</ul>");
    }
    if !page.cons.is_empty() {
        b.line("<h2>Cons</h2>");
        b.line("<ul class=\"cons\">");
        for con in &page.cons {
            b.line(format!("<li>{}</li>", escape(con)));
        }
        b.line("</ul>");
    }
    b.line("</section>");
}

fn render_alternatives(page: &Page, b: &mut HtmlBuilder) {
    if page.alternatives.is_empty() {
        return;
    }
    b.line("<section class=\"alternatives\">");
    b.line("<h2>Alternatives</h2>");
    b.line("<ul>");
    for alternative in &page.alternatives {
        let name = match &alternative.url {
            Some(url) => format!(
                "<a href=\"{}\">{}</a>",
                escape(url),
                escape(&alternative.name)
            ),
            None => escape(&alternative.name),
        };
        b.line(format!(
            "<li><strong>{}</strong> {}</li>",
            name,
            escape(&alternative.blurb)
        ));
    }
    b.line("</ul>");
    b.line("</section>");
}

fn render_final_cta(page: &Page, b: &mut HtmlBuilder) {
    b.line("<section class=\"final-cta\">");
    b.line(format!(
        "<a class=\"cta\" href=\"{}\">{}</a>",
        escape(&page.hero.cta_url),
        escape(&page.hero.cta_label)
    ));
    b.line("</section>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use versus_content::{FaqItem, Feature, Hero, PricingPlan};

    fn minimal_page() -> Page {
        Page {
            slug: "loom-review".to_string(),
            title: "Loom Review".to_string(),
            description: Some("Is Loom worth it?".to_string()),
            hero: Hero {
                headline: "Loom Review".to_string(),
                subheadline: Some("Async video in seconds".to_string()),
                cta_label: "Try Loom".to_string(),
                cta_url: "https://example.com/loom".to_string(),
            },
            features: vec![Feature {
                name: "Instant links".to_string(),
                description: "Share the moment you stop recording.".to_string(),
            }],
            pricing: vec![PricingPlan {
                name: "Starter".to_string(),
                price: "$0".to_string(),
                bullets: vec!["25 videos".to_string()],
            }],
            pros: vec!["Fast".to_string()],
            cons: vec!["Light editing".to_string()],
            faqs: vec![FaqItem {
                question: "Free plan?".to_string(),
                answer: "Yes.".to_string(),
            }],
            alternatives: vec![],
            comparison: None,
        }
    }

    #[test]
    fn test_head_carries_title_and_description() {
        let html = render_page(&minimal_page()).unwrap();
        assert!(html.contains("<title>Loom Review</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Is Loom worth it?\">"));
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = render_page(&minimal_page()).unwrap();
        let hero = html.find("class=\"hero\"").unwrap();
        let features = html.find("class=\"features\"").unwrap();
        let pricing = html.find("class=\"pricing\"").unwrap();
        let faq = html.find("class=\"faq\"").unwrap();
        let cta = html.find("class=\"final-cta\"").unwrap();
        assert!(hero < features && features < pricing && pricing < faq && faq < cta);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut page = minimal_page();
        page.features.clear();
        page.pricing.clear();
        page.pros.clear();
        page.cons.clear();
        page.faqs.clear();
        let html = render_page(&page).unwrap();
        assert!(!html.contains("class=\"features\""));
        assert!(!html.contains("class=\"pricing\""));
        assert!(!html.contains("class=\"pros-cons\""));
        assert!(!html.contains("class=\"faq\""));
    }

    #[test]
    fn test_authored_text_is_escaped() {
        let mut page = minimal_page();
        page.title = "Loom <review> & verdict".to_string();
        let html = render_page(&page).unwrap();
        assert!(html.contains("<title>Loom &lt;review&gt; &amp; verdict</title>"));
    }
}
