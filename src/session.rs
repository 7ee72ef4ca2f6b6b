//! Page-level state transitions, independent of any UI framework.
//!
//! The original page wired this logic straight into DOM event handlers; here
//! each handler is an explicit method on [`Session`]: a pure transition on
//! the session value, followed by exactly one paint step on the caller's
//! side. The session never performs I/O itself.
//!
//! Overlapping predictions are deliberately not serialized. Every resolved
//! response passes through [`Session::apply_prediction`], which replaces the
//! plan wholesale, so the last response to *resolve* is the one that stays
//! on screen, regardless of click order.

use crate::error::DtiError;
use crate::explain::{build_render_plan, RenderPlan};
use crate::model::{PredictionQuery, PredictionResult, TargetList, TargetRecord};

/// Single-valued cell for the currently selected target id.
///
/// Replaced wholesale on every selection, so at most one target is marked
/// selected at any time. Mutual exclusivity is structural, not enforced by
/// row-walking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    /// Currently selected id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Replace the selection.
    pub fn set(&mut self, id: impl Into<String>) {
        self.0 = Some(id.into());
    }

    /// Whether `id` is the selected one. Drives the exclusive row highlight.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.0.as_deref() == Some(id)
    }
}

/// State behind the prediction page: the target catalog, the selection cell,
/// and the latest render plan.
#[derive(Debug, Clone, Default)]
pub struct Session {
    targets: Vec<TargetRecord>,
    selection: Selection,
    latest: Option<RenderPlan>,
}

impl Session {
    /// Fresh session: empty catalog, no selection, no plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog rows, in service order.
    #[must_use]
    pub fn targets(&self) -> &[TargetRecord] {
        &self.targets
    }

    /// Read side of the selection cell.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Latest render plan, once a prediction has resolved.
    #[must_use]
    pub fn latest_plan(&self) -> Option<&RenderPlan> {
        self.latest.as_ref()
    }

    /// Replace the catalog wholesale. One load per page life; the service
    /// guarantees unique ids, so no de-duplication happens here.
    pub fn load_targets(&mut self, list: TargetList) {
        log::debug!("catalog loaded: {} targets", list.targets.len());
        self.targets = list.targets;
    }

    /// Select a catalog row by id, replacing any previous selection. Ids not
    /// present in the catalog leave the selection untouched.
    pub fn select_target(&mut self, id: &str) -> Option<&TargetRecord> {
        let record = self.targets.iter().find(|t| t.id == id);
        if record.is_none() {
            log::warn!("select_target: unknown id {id}");
            return None;
        }
        self.selection.set(id);
        record
    }

    /// Validate the inputs and form the prediction request. Pure: the
    /// request is handed back for the caller's transport of choice.
    ///
    /// # Errors
    ///
    /// [`DtiError::EmptyInput`] when no structure has been drawn or no
    /// target is selected.
    pub fn begin_prediction(
        &self,
        structure: &str,
    ) -> Result<PredictionQuery, DtiError> {
        if structure.is_empty() {
            return Err(DtiError::EmptyInput(
                "Please draw a molecule.".to_owned(),
            ));
        }
        let Some(target) = self.selection.id() else {
            return Err(DtiError::EmptyInput(
                "Please click one target from the list above before \
                 pressing Predict."
                    .to_owned(),
            ));
        };
        Ok(PredictionQuery {
            smiles: structure.to_owned(),
            target: target.to_owned(),
        })
    }

    /// Fold a resolved prediction in: build a fresh plan and replace the
    /// previous one wholesale. Each overlapping response lands here
    /// independently, so last-to-resolve wins.
    pub fn apply_prediction(&mut self, result: &PredictionResult) -> &RenderPlan {
        self.latest.insert(build_render_plan(result))
    }
}
