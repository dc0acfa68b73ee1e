//! Feature card rendering.
//!
//! A pure mapping from descriptors to an HTML fragment: exactly one
//! card per descriptor, in input order. Row wrapping is left to the
//! grid system's `col col--4` classes; no layout math happens here.
//!
//! # Output shape
//!
//! ```html
//! <section class="features">
//!   <div class="container">
//!     <div class="row">
//!       <div class="col col--4">...</div>
//!     </div>
//!   </div>
//! </section>
//! ```

use super::FeatureDescriptor;
use std::borrow::Cow;

/// Render the catalog to an HTML fragment, one card per descriptor.
pub fn render_features(features: &[FeatureDescriptor]) -> String {
    let mut html = String::with_capacity(512 * features.len());

    html.push_str("<section class=\"features\">\n  <div class=\"container\">\n    <div class=\"row\">\n");
    for feature in features {
        push_card(&mut html, feature);
    }
    html.push_str("    </div>\n  </div>\n</section>\n");
    html
}

/// Append one card.
fn push_card(html: &mut String, feature: &FeatureDescriptor) {
    html.push_str("      <div class=\"col col--4\">\n");

    html.push_str("        <div class=\"text--center\">\n          <span class=\"feature-icon\" role=\"img\" aria-label=\"");
    html.push_str(&escape_html(feature.title));
    html.push_str(" icon\">");
    html.push_str(&escape_html(feature.icon));
    html.push_str("</span>\n        </div>\n");

    html.push_str("        <div class=\"text--center padding-horiz--md\">\n          <h3>");
    html.push_str(&escape_html(feature.title));
    html.push_str("</h3>\n          <p>");
    // Descriptions are markup fragments; pass through as authored.
    html.push_str(feature.description);
    html.push_str("</p>\n        </div>\n");

    html.push_str("      </div>\n");
}

/// Escape text for HTML text and attribute positions.
fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
