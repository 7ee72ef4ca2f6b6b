//! Painting a [`RenderPlan`] onto a result surface.
//!
//! The page contract for the result area: clear the previous output
//! entirely, then paint the probability header, the features heading, each
//! entry in plan order, and the summary paragraph last. Nothing accumulates
//! across predictions.
//!
//! [`ResultSurface`] keeps the contract independent of any UI framework;
//! [`HtmlSurface`] is the concrete markup the browser page shows, also
//! handy for snapshotting the paint order in tests.

use crate::explain::{AssetKind, DisplayEntry, RenderPlan};

/// Sink for one full repaint of the result area.
pub trait ResultSurface {
    /// Drop all previously painted output.
    fn clear(&mut self);
    /// Paint the probability header figure, e.g. `"82.0%"`.
    fn paint_probability(&mut self, text: &str);
    /// Paint the heading above the feature entries.
    fn paint_heading(&mut self);
    /// Paint one display entry.
    fn paint_entry(&mut self, entry: &DisplayEntry);
    /// Paint the summary paragraph. Always invoked last.
    fn paint_summary(&mut self, text: &str);
}

/// Repaint `surface` from `plan`: clear, probability header, heading,
/// entries in order, summary last.
pub fn paint<S: ResultSurface>(plan: &RenderPlan, surface: &mut S) {
    surface.clear();
    surface.paint_probability(&plan.probability_text);
    surface.paint_heading();
    for entry in &plan.entries {
        surface.paint_entry(entry);
    }
    surface.paint_summary(&plan.summary.text());
}

/// [`ResultSurface`] producing the result area's HTML.
///
/// Within an entry, the fragment drawing paints above the text line and the
/// whole-structure drawing below it, matching the page layout. Labels and
/// summary text are escaped; SVG assets are inserted verbatim (they come
/// from the drawing backend, not from user input).
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    html: String,
}

impl HtmlSurface {
    /// Empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered markup so far.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the surface, yielding the markup.
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }
}

impl ResultSurface for HtmlSurface {
    fn clear(&mut self) {
        self.html.clear();
    }

    fn paint_probability(&mut self, text: &str) {
        self.html.push_str("<div><strong>Probability:</strong> ");
        self.html.push_str(&escape_text(text));
        self.html.push_str("</div>");
    }

    fn paint_heading(&mut self) {
        self.html.push_str(
            "<div class=\"features-heading\">\
             <strong>Top Influencing Features:</strong></div>",
        );
    }

    fn paint_entry(&mut self, entry: &DisplayEntry) {
        self.html.push_str("<div class=\"feature\">");
        for asset in &entry.visual_assets {
            if asset.kind == AssetKind::FragmentHighlight {
                self.html.push_str("<div class=\"fragment-svg\">");
                self.html.push_str(&asset.svg);
                self.html.push_str("</div>");
            }
        }
        self.html.push_str("<div class=\"feature-line\">");
        self.html.push_str(&escape_text(&entry.line()));
        self.html.push_str("</div>");
        for asset in &entry.visual_assets {
            if asset.kind == AssetKind::WholeStructure {
                self.html.push_str("<div class=\"fragment-svg-full\">");
                self.html.push_str(&asset.svg);
                self.html.push_str("</div>");
            }
        }
        self.html.push_str("</div>");
    }

    fn paint_summary(&mut self, text: &str) {
        self.html.push_str("<p class=\"summary\">");
        self.html.push_str(&escape_text(text));
        self.html.push_str("</p>");
    }
}

/// Minimal HTML text escaping for user-visible strings.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::build_render_plan;
    use crate::model::{FeatureContribution, PredictionResult};

    fn sample_plan() -> RenderPlan {
        let mut ring = FeatureContribution::chemical("Ring A", 0.2);
        ring.svg = Some("<svg>frag</svg>".to_owned());
        ring.svg_full = Some("<svg>full</svg>".to_owned());
        build_render_plan(&PredictionResult {
            probability: 0.82,
            explanation: vec![ring, FeatureContribution::protein("Kinase X", -0.1)],
        })
    }

    #[test]
    fn paint_clears_before_painting() {
        let mut surface = HtmlSurface::new();
        paint(&sample_plan(), &mut surface);
        paint(&sample_plan(), &mut surface);

        // One repaint's worth of output, not two.
        assert_eq!(surface.html().matches("Probability:").count(), 1);
        assert_eq!(surface.html().matches("class=\"summary\"").count(), 1);
    }

    #[test]
    fn paint_order_is_header_heading_entries_summary() {
        let mut surface = HtmlSurface::new();
        paint(&sample_plan(), &mut surface);
        let html = surface.html();

        let probability = html.find("Probability:").unwrap();
        let heading = html.find("Top Influencing Features:").unwrap();
        let first_entry = html.find("Ring A").unwrap();
        let second_entry = html.find("Kinase X").unwrap();
        let summary = html.find("class=\"summary\"").unwrap();

        assert!(probability < heading);
        assert!(heading < first_entry);
        assert!(first_entry < second_entry);
        assert!(second_entry < summary);
    }

    #[test]
    fn drawings_flank_the_entry_line() {
        let mut surface = HtmlSurface::new();
        paint(&sample_plan(), &mut surface);
        let html = surface.html();

        let fragment = html.find("<svg>frag</svg>").unwrap();
        let line = html.find("Ring A").unwrap();
        let full = html.find("<svg>full</svg>").unwrap();
        assert!(fragment < line && line < full);
    }

    #[test]
    fn labels_are_escaped_but_svg_is_verbatim() {
        let mut spicy = FeatureContribution::chemical("<b>bold</b>", 0.2);
        spicy.svg = Some("<svg>ok</svg>".to_owned());
        let plan = build_render_plan(&PredictionResult {
            probability: 0.5,
            explanation: vec![spicy],
        });

        let mut surface = HtmlSurface::new();
        paint(&plan, &mut surface);
        assert!(surface.html().contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(surface.html().contains("<svg>ok</svg>"));
    }
}
