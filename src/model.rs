//! Wire-format data model for the prediction service.
//!
//! Types mirror the service JSON field for field: `GET /target-info` returns
//! a [`TargetList`], `POST /predict` takes a [`PredictionQuery`] and returns
//! a [`PredictionResult`], and non-success responses carry a
//! [`ServiceDetail`]. The service may attach extra diagnostic fields (e.g.
//! the raw SMARTS pattern behind a chemical feature); deserialization
//! ignores anything not modeled here.

use serde::{Deserialize, Serialize};

/// One selectable prediction target: a stable unique id (a UniProt
/// accession) plus its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    /// Stable unique identifier, e.g. `"Q02338"`.
    pub id: String,
    /// Human-readable description from the catalog.
    pub name: String,
}

/// Payload of `GET /target-info`: the full catalog, fetched once per page
/// life and held read-only for the session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TargetList {
    /// Catalog rows in service order.
    pub targets: Vec<TargetRecord>,
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionQuery {
    /// SMILES encoding of the drawn molecule.
    pub smiles: String,
    /// Selected target id.
    pub target: String,
}

/// Which side of the interaction a feature describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Protein-side feature (a k-mer of the target sequence).
    Protein,
    /// Chemical substructure feature of the query molecule.
    Chemical,
}

/// One explanatory factor with a signed impact on the predicted probability.
///
/// `svg` and `svg_full` are meaningful only for [`FeatureKind::Chemical`];
/// protein features are text-only. Either drawing may be absent or blank
/// without that being an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    /// Feature family; decides the entry icon and whether drawings attach.
    pub feature_type: FeatureKind,
    /// Human-readable feature description.
    pub label: String,
    /// Signed contribution; positive raises the interaction likelihood.
    pub impact: f64,
    /// Fragment-scale highlight drawing (chemical features only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    /// Whole-structure highlight drawing (chemical features only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_full: Option<String>,
}

impl FeatureContribution {
    /// Text-only protein feature.
    #[must_use]
    pub fn protein(label: impl Into<String>, impact: f64) -> Self {
        Self {
            feature_type: FeatureKind::Protein,
            label: label.into(),
            impact,
            svg: None,
            svg_full: None,
        }
    }

    /// Chemical feature without drawings; attach them via the public fields.
    #[must_use]
    pub fn chemical(label: impl Into<String>, impact: f64) -> Self {
        Self {
            feature_type: FeatureKind::Chemical,
            label: label.into(),
            impact,
            svg: None,
            svg_full: None,
        }
    }
}

/// Response of `POST /predict`: the probability plus the ranked feature
/// contributions, most influential first. Consumed once by the explanation
/// renderer and replaced wholesale by the next prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Interaction probability in `[0, 1]`.
    pub probability: f64,
    /// Feature contributions in service rank order.
    pub explanation: Vec<FeatureContribution>,
}

/// Error payload the service returns on non-success responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetail {
    /// Human-readable failure description.
    pub detail: String,
}
