//! Explanation-to-narrative rendering engine.
//!
//! Turns a [`PredictionResult`] into a [`RenderPlan`]: one display entry per
//! feature contribution (input order preserved) plus a synthesized summary
//! paragraph naming the most influential features of each polarity.
//!
//! [`build_render_plan`] is pure and total over well-formed input. Any
//! probability and any (possibly empty) contribution list yields a plan, the
//! same input always yields a structurally identical plan, and nothing here
//! touches the outside world.

use crate::model::{FeatureContribution, FeatureKind, PredictionResult};

/// How many feature labels each summary sentence names at most.
const SUMMARY_LABEL_CAP: usize = 3;

/// Whether a feature pushes the prediction up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Positive impact: raises the interaction likelihood.
    Increases,
    /// Non-positive impact: lowers it. Zero impact lands here as well; the
    /// classification is a strict `impact > 0` test, and that tie-break is
    /// kept as-is rather than fixed (see the regression test).
    Decreases,
}

impl Direction {
    /// Classify a signed impact. Zero and NaN both classify as `Decreases`.
    #[must_use]
    pub fn from_impact(impact: f64) -> Self {
        if impact > 0.0 {
            Self::Increases
        } else {
            Self::Decreases
        }
    }

    /// Display label used in the entry line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increases => "Increases",
            Self::Decreases => "Decreases",
        }
    }
}

/// Scale of a chemical highlight drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Fragment-only drawing of the matched substructure.
    FragmentHighlight,
    /// The whole query molecule with the substructure highlighted.
    WholeStructure,
}

/// One inline SVG drawing attached to a chemical display entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualAsset {
    /// Drawing scale.
    pub kind: AssetKind,
    /// Raw SVG markup, guaranteed non-blank.
    pub svg: String,
}

/// Display-ready form of one feature contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    /// Marker distinguishing protein from chemical features.
    pub icon: &'static str,
    /// Impact polarity as shown to the user.
    pub direction: Direction,
    /// `|impact|` formatted to three decimal places.
    pub magnitude_text: String,
    /// Feature description, verbatim from the service.
    pub label: String,
    /// Zero to two highlight drawings; always empty for protein features.
    pub visual_assets: Vec<VisualAsset>,
}

impl DisplayEntry {
    /// Canonical single-line text for the entry, e.g.
    /// `"🧬 Increases (0.500) – Kinase X"`.
    #[must_use]
    pub fn line(&self) -> String {
        format!(
            "{} {} ({}) \u{2013} {}",
            self.icon,
            self.direction.label(),
            self.magnitude_text,
            self.label
        )
    }
}

/// The synthesized summary paragraph, sentence by sentence.
///
/// The positive and negative sentences name at most the first three labels
/// of their polarity group, in original input order, independent of how many
/// entries the plan paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeSummary {
    /// Interaction verdict with the probability figure. Space-terminated so
    /// the sentences concatenate directly.
    pub interaction_sentence: String,
    /// Positive-feature sentence; absent when no feature is positive.
    pub positive_sentence: Option<String>,
    /// Non-positive-feature sentence; absent when every feature is positive.
    pub negative_sentence: Option<String>,
}

impl NarrativeSummary {
    /// The full paragraph text.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = self.interaction_sentence.clone();
        if let Some(sentence) = &self.positive_sentence {
            out.push_str(sentence);
        }
        if let Some(sentence) = &self.negative_sentence {
            out.push_str(sentence);
        }
        out
    }
}

/// Fully derived, display-ready output for one prediction response.
///
/// Recomputed wholesale per prediction; nothing in a plan is mutated
/// incrementally or outlives the next response.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Probability header figure, e.g. `"82.0%"`.
    pub probability_text: String,
    /// One entry per contribution, in input order.
    pub entries: Vec<DisplayEntry>,
    /// Summary paragraph, painted after the entries.
    pub summary: NarrativeSummary,
}

/// Build the display plan for one prediction response.
///
/// Entries keep the input order. The polarity grouping behind the summary
/// spans both feature kinds, and each polarity sentence names at most the
/// first [`SUMMARY_LABEL_CAP`] labels of its group.
#[must_use]
pub fn build_render_plan(result: &PredictionResult) -> RenderPlan {
    let mut entries = Vec::with_capacity(result.explanation.len());
    let mut positive: Vec<&str> = Vec::new();
    let mut negative: Vec<&str> = Vec::new();

    for feature in &result.explanation {
        entries.push(display_entry(feature));
        match Direction::from_impact(feature.impact) {
            Direction::Increases => positive.push(&feature.label),
            Direction::Decreases => negative.push(&feature.label),
        }
    }

    let summary = NarrativeSummary {
        interaction_sentence: interaction_sentence(result.probability),
        positive_sentence: polarity_sentence(&positive, Polarity::Positive),
        negative_sentence: polarity_sentence(&negative, Polarity::Negative),
    };

    RenderPlan {
        probability_text: format!("{:.1}%", result.probability * 100.0),
        entries,
        summary,
    }
}

/// Build one display entry, attaching drawings for chemical features only.
fn display_entry(feature: &FeatureContribution) -> DisplayEntry {
    let mut visual_assets = Vec::new();
    if feature.feature_type == FeatureKind::Chemical {
        if let Some(svg) = non_blank(feature.svg.as_deref()) {
            visual_assets.push(VisualAsset {
                kind: AssetKind::FragmentHighlight,
                svg,
            });
        }
        if let Some(svg) = non_blank(feature.svg_full.as_deref()) {
            visual_assets.push(VisualAsset {
                kind: AssetKind::WholeStructure,
                svg,
            });
        }
    }

    DisplayEntry {
        icon: icon_for(feature.feature_type),
        direction: Direction::from_impact(feature.impact),
        magnitude_text: format!("{:.3}", feature.impact.abs()),
        label: feature.label.clone(),
        visual_assets,
    }
}

/// Marker glyph per feature kind. Purely cosmetic, but the two kinds must
/// stay visually distinguishable.
const fn icon_for(kind: FeatureKind) -> &'static str {
    match kind {
        FeatureKind::Protein => "\u{1f9ec}",
        FeatureKind::Chemical => "\u{2697}\u{fe0f}",
    }
}

/// Keep a drawing only when it is present and non-blank after trimming. The
/// markup itself is carried verbatim, untrimmed.
fn non_blank(svg: Option<&str>) -> Option<String> {
    svg.filter(|s| !s.trim().is_empty()).map(str::to_owned)
}

/// Interaction verdict sentence; the branch is inclusive at `0.5`.
fn interaction_sentence(probability: f64) -> String {
    let pct = format!("{:.1}", probability * 100.0);
    if probability >= 0.5 {
        format!(
            "This molecule is predicted to interact with the chosen target \
             (probability: {pct}%). "
        )
    } else {
        format!(
            "This molecule is predicted not to interact with the chosen \
             target (probability: {pct}%). "
        )
    }
}

/// Which summary sentence is being built.
#[derive(Clone, Copy)]
enum Polarity {
    Positive,
    Negative,
}

/// Summary sentence for one polarity group, or `None` when the group is
/// empty. Singular phrasing for exactly one label; otherwise the first
/// [`SUMMARY_LABEL_CAP`] labels joined with curly-quoted separators. The
/// positive plural says "all contribute", the negative plural just
/// "contribute"; that asymmetry is part of the page's wording.
fn polarity_sentence(labels: &[&str], polarity: Polarity) -> Option<String> {
    if labels.is_empty() {
        return None;
    }
    let top = &labels[..labels.len().min(SUMMARY_LABEL_CAP)];
    let sentence = match (polarity, top) {
        (Polarity::Positive, [only]) => format!(
            "Notably, the feature \u{201c}{only}\u{201d} contributes \
             positively toward interaction. "
        ),
        (Polarity::Positive, many) => format!(
            "Notably, the features \u{201c}{}\u{201d} all contribute \
             positively toward interaction. ",
            many.join("\u{201d}, \u{201c}")
        ),
        (Polarity::Negative, [only]) => format!(
            "Conversely, the feature \u{201c}{only}\u{201d} contributes \
             negatively toward interaction."
        ),
        (Polarity::Negative, many) => format!(
            "Conversely, the features \u{201c}{}\u{201d} contribute \
             negatively toward interaction.",
            many.join("\u{201d}, \u{201c}")
        ),
    };
    Some(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeatureContribution as Feature;

    fn result(probability: f64, explanation: Vec<Feature>) -> PredictionResult {
        PredictionResult {
            probability,
            explanation,
        }
    }

    #[test]
    fn empty_explanation_yields_interaction_sentence_only() {
        let plan = build_render_plan(&result(0.5, vec![]));
        assert!(plan.entries.is_empty());
        assert_eq!(plan.summary.positive_sentence, None);
        assert_eq!(plan.summary.negative_sentence, None);
        assert_eq!(plan.summary.text(), plan.summary.interaction_sentence);
    }

    #[test]
    fn interaction_branch_is_inclusive_at_half() {
        let at_half = build_render_plan(&result(0.5, vec![]));
        assert!(at_half
            .summary
            .interaction_sentence
            .starts_with("This molecule is predicted to interact"));

        let below = build_render_plan(&result(0.499_999, vec![]));
        assert!(below
            .summary
            .interaction_sentence
            .starts_with("This molecule is predicted not to interact"));
    }

    #[test]
    fn single_positive_protein_feature() {
        // probability=0.82, one protein feature at +0.5
        let plan = build_render_plan(&result(
            0.82,
            vec![Feature::protein("Kinase X", 0.5)],
        ));

        assert_eq!(plan.probability_text, "82.0%");
        assert!(plan.summary.interaction_sentence.contains("82.0%"));
        assert!(plan
            .summary
            .interaction_sentence
            .starts_with("This molecule is predicted to interact"));

        assert_eq!(
            plan.summary.positive_sentence.as_deref(),
            Some(
                "Notably, the feature \u{201c}Kinase X\u{201d} contributes \
                 positively toward interaction. "
            )
        );
        assert_eq!(plan.summary.negative_sentence, None);

        assert_eq!(plan.entries.len(), 1);
        let entry = &plan.entries[0];
        assert_eq!(entry.direction, Direction::Increases);
        assert_eq!(entry.magnitude_text, "0.500");
        assert!(entry.visual_assets.is_empty());
        assert_eq!(entry.line(), "\u{1f9ec} Increases (0.500) \u{2013} Kinase X");
    }

    #[test]
    fn mixed_chemical_features_with_one_drawing() {
        let mut ring_a = Feature::chemical("Ring A", 0.2);
        ring_a.svg = Some("<svg/>".to_owned());
        let ring_b = Feature::chemical("Ring B", -0.4);

        let plan = build_render_plan(&result(0.3, vec![ring_a, ring_b]));

        assert!(plan
            .summary
            .interaction_sentence
            .starts_with("This molecule is predicted not to interact"));
        assert!(plan.summary.interaction_sentence.contains("30.0%"));

        assert_eq!(
            plan.summary.positive_sentence.as_deref(),
            Some(
                "Notably, the feature \u{201c}Ring A\u{201d} contributes \
                 positively toward interaction. "
            )
        );
        assert_eq!(
            plan.summary.negative_sentence.as_deref(),
            Some(
                "Conversely, the feature \u{201c}Ring B\u{201d} contributes \
                 negatively toward interaction."
            )
        );

        assert_eq!(plan.entries[0].visual_assets.len(), 1);
        assert_eq!(
            plan.entries[0].visual_assets[0].kind,
            AssetKind::FragmentHighlight
        );
        assert!(plan.entries[1].visual_assets.is_empty());
    }

    #[test]
    fn positive_sentence_caps_at_first_three_labels() {
        let plan = build_render_plan(&result(
            0.9,
            vec![
                Feature::protein("A", 0.4),
                Feature::protein("B", 0.3),
                Feature::chemical("C", 0.2),
                Feature::protein("D", 0.1),
            ],
        ));

        let sentence = plan.summary.positive_sentence.unwrap();
        assert_eq!(
            sentence,
            "Notably, the features \u{201c}A\u{201d}, \u{201c}B\u{201d}, \
             \u{201c}C\u{201d} all contribute positively toward interaction. "
        );
        assert!(!sentence.contains('D'));
        // All four entries still paint.
        assert_eq!(plan.entries.len(), 4);
    }

    #[test]
    fn negative_plural_has_no_all() {
        let plan = build_render_plan(&result(
            0.1,
            vec![Feature::protein("A", -0.4), Feature::protein("B", -0.3)],
        ));
        assert_eq!(
            plan.summary.negative_sentence.as_deref(),
            Some(
                "Conversely, the features \u{201c}A\u{201d}, \u{201c}B\u{201d} \
                 contribute negatively toward interaction."
            )
        );
    }

    #[test]
    fn zero_impact_groups_with_negative() {
        // Regression pin: the page used a strict `impact > 0` test, so an
        // exactly-zero impact reads "Decreases" and lands in the negative
        // list. Do not "fix" this tie-break.
        let plan =
            build_render_plan(&result(0.6, vec![Feature::protein("Flat", 0.0)]));

        let entry = &plan.entries[0];
        assert_eq!(entry.direction, Direction::Decreases);
        assert_eq!(entry.magnitude_text, "0.000");
        assert!(entry.line().contains("Decreases (0.000)"));

        assert_eq!(plan.summary.positive_sentence, None);
        assert_eq!(
            plan.summary.negative_sentence.as_deref(),
            Some(
                "Conversely, the feature \u{201c}Flat\u{201d} contributes \
                 negatively toward interaction."
            )
        );
    }

    #[test]
    fn blank_drawings_are_dropped() {
        let mut feature = Feature::chemical("Ether", 0.3);
        feature.svg = Some("   \n".to_owned());
        feature.svg_full = Some("<svg>full</svg>".to_owned());

        let plan = build_render_plan(&result(0.7, vec![feature]));
        let assets = &plan.entries[0].visual_assets;
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].kind, AssetKind::WholeStructure);
        assert_eq!(assets[0].svg, "<svg>full</svg>");
    }

    #[test]
    fn protein_features_never_carry_drawings() {
        let mut feature = Feature::protein("Ala-Leu-Gly", 0.2);
        // Even if the service sent markup, protein entries stay text-only.
        feature.svg = Some("<svg/>".to_owned());

        let plan = build_render_plan(&result(0.7, vec![feature]));
        assert!(plan.entries[0].visual_assets.is_empty());
    }

    #[test]
    fn icons_distinguish_feature_kinds() {
        let plan = build_render_plan(&result(
            0.7,
            vec![
                Feature::protein("P", 0.1),
                Feature::chemical("C", 0.1),
            ],
        ));
        assert_ne!(plan.entries[0].icon, plan.entries[1].icon);
    }

    #[test]
    fn entries_preserve_input_order() {
        let plan = build_render_plan(&result(
            0.7,
            vec![
                Feature::chemical("second-ranked", -0.2),
                Feature::protein("first-ranked", 0.9),
                Feature::chemical("third-ranked", 0.1),
            ],
        ));
        let labels: Vec<&str> =
            plan.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["second-ranked", "first-ranked", "third-ranked"]);
    }

    #[test]
    fn summary_text_concatenates_in_order() {
        let plan = build_render_plan(&result(
            0.82,
            vec![Feature::protein("Up", 0.5), Feature::protein("Down", -0.5)],
        ));
        let text = plan.summary.text();
        let interact = text.find("predicted to interact").unwrap();
        let notably = text.find("Notably").unwrap();
        let conversely = text.find("Conversely").unwrap();
        assert!(interact < notably && notably < conversely);
    }

    #[test]
    fn renderer_is_idempotent() {
        let input = result(
            0.42,
            vec![
                Feature::protein("Kinase X", 0.5),
                Feature::chemical("Ring A", -0.1),
                Feature::protein("Flat", 0.0),
            ],
        );
        assert_eq!(build_render_plan(&input), build_render_plan(&input));
    }

    #[test]
    fn probability_formats_to_one_decimal() {
        assert_eq!(build_render_plan(&result(0.0, vec![])).probability_text, "0.0%");
        assert_eq!(build_render_plan(&result(1.0, vec![])).probability_text, "100.0%");
        assert_eq!(
            build_render_plan(&result(0.825_49, vec![])).probability_text,
            "82.5%"
        );
    }
}
