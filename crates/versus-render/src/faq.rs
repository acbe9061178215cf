//! FAQ accordion rendering
//!
//! Each FAQ item carries an explicit open/closed state instead of an ad
//! hoc boolean. Rendering emits a `<details>` element per item; only
//! expanded items get the `open` attribute. Pages render with every item
//! collapsed; expansion is a client-side interaction.

use crate::html::{escape, HtmlBuilder};
use versus_content::FaqItem;

/// Open/closed state of one accordion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaqState {
    /// Item shows only its question
    #[default]
    Collapsed,

    /// Item shows question and answer
    Expanded,
}

impl FaqState {
    /// The state after a user toggle.
    pub fn toggled(self) -> Self {
        match self {
            FaqState::Collapsed => FaqState::Expanded,
            FaqState::Expanded => FaqState::Collapsed,
        }
    }
}

/// Render the FAQ section; returns an empty string when there are no items.
pub fn render_faqs(faqs: &[FaqItem], state: FaqState) -> String {
    if faqs.is_empty() {
        return String::new();
    }

    let mut b = HtmlBuilder::new();
    b.line("<section class=\"faq\">");
    b.line("<h2>Frequently asked questions</h2>");
    for item in faqs {
        match state {
            FaqState::Collapsed => b.line("<details>"),
            FaqState::Expanded => b.line("<details open>"),
        }
        b.line(format!("<summary>{}</summary>", escape(&item.question)));
        b.line(format!("<p>{}</p>", escape(&item.answer)));
        b.line("</details>");
    }
    b.line("</section>");
    b.finish()
}
