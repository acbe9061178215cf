//! Versus Render
//!
//! Renders loaded page content to HTML: static sections (hero, features,
//! pricing, pros/cons, FAQ accordion, alternatives, final CTA) plus the
//! comparison scoreboard with per-dimension winner highlighting, an
//! averages row, and the overall-winner verdict.
//!
//! Rendering is deterministic: the same `Page` value always produces a
//! byte-identical document.

#![warn(missing_docs)]

mod error;
mod faq;
mod html;
mod page;
mod scoreboard;

pub use error::{RenderError, Result};
pub use faq::{render_faqs, FaqState};
pub use html::{escape, HtmlBuilder};
pub use page::render_page;
pub use scoreboard::render_scoreboard;
