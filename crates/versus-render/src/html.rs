//! Minimal HTML building helpers
//!
//! All authored text passes through [`escape`] on its way into markup.
//! Output uses a fixed line-per-element layout, so re-rendering the same
//! data yields byte-identical documents.

/// Escape text for use in HTML element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Accumulates lines of markup.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    out: String,
}

impl HtmlBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line of markup. Caller escapes authored text.
    pub fn line(&mut self, markup: impl AsRef<str>) {
        self.out.push_str(markup.as_ref());
        self.out.push('\n');
    }

    /// Append a prebuilt fragment without adding a newline.
    pub fn raw(&mut self, fragment: &str) {
        self.out.push_str(fragment);
    }

    /// Consume the builder, yielding the document.
    pub fn finish(self) -> String {
        self.out
    }
}
