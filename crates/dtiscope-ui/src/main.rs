//! Dioxus web app for the prediction page.
//!
//! Thin glue around the `dtiscope` engine crate: the target catalog table,
//! the molecule-editor affordances, and the result panel. All non-trivial
//! logic (classification, narrative synthesis, page state) lives in the
//! engine; this crate fetches, clicks, and paints.

mod bridge;
mod panel;

use dioxus::prelude::*;
use dtiscope::error::DtiError;
use dtiscope::model::{ServiceDetail, TargetList};
use dtiscope::session::Session;

/// Service base URL. Empty means same-origin, which is how the page is
/// served in production.
pub(crate) const API_BASE: &str = "";

fn main() {
    launch(app);
}

/// Root component: owns the session signal and kicks off the one catalog
/// load per page life.
fn app() -> Element {
    let session = use_signal(Session::new);
    let smiles_echo = use_signal(String::new);

    let _catalog = use_future(move || load_catalog(session));

    rsx! {
        panel::Page { session, smiles_echo }
    }
}

/// Fetch the catalog once and fold it into the session. Failure surfaces a
/// single alert and leaves the list empty; there is no retry.
async fn load_catalog(mut session: Signal<Session>) {
    match bridge::get_text(&format!("{API_BASE}/target-info")).await {
        Ok(outcome) if outcome.ok => {
            match serde_json::from_str::<TargetList>(&outcome.body) {
                Ok(list) => session.write().load_targets(list),
                Err(e) => bridge::alert(
                    &DtiError::CatalogLoad(e.to_string()).to_string(),
                ),
            }
        }
        Ok(outcome) => {
            let detail = serde_json::from_str::<ServiceDetail>(&outcome.body)
                .map_or_else(
                    |_| "Failed to load target info".to_owned(),
                    |d| d.detail,
                );
            bridge::alert(&DtiError::CatalogLoad(detail).to_string());
        }
        Err(e) => bridge::alert(&e.to_string()),
    }
}
