//! Page components: target table, molecule affordances, result panel.
//!
//! Every user action maps to one session transition followed by one paint;
//! the paint itself falls out of Dioxus re-rendering the components that
//! read the session signal.

// `rsx!` expands `onclick:` handlers into paths the compiler flags as
// unnecessary qualifications; the spans land on macro input we can't edit.
#![allow(unused_qualifications)]

use dioxus::prelude::*;
use dtiscope::error::DtiError;
use dtiscope::model::{PredictionQuery, PredictionResult, ServiceDetail};
use dtiscope::session::Session;
use dtiscope::view::{self, HtmlSurface};

use crate::bridge;

/// Whole page: catalog table, editor affordances, prediction results.
#[component]
pub fn Page(session: Signal<Session>, smiles_echo: Signal<String>) -> Element {
    rsx! {
        div { class: "page",
            h2 { "Drug\u{2013}Target Interaction Predictor" }
            TargetTable { session }
            EditorBox { smiles_echo }
            PredictButton { session }
            ResultPanel { session }
        }
    }
}

/// Scrollable catalog table. Clicking a row makes it the selected target;
/// the highlight is exclusive because the selection cell is single-valued.
#[component]
fn TargetTable(session: Signal<Session>) -> Element {
    let state = session.read();
    rsx! {
        div { class: "target-list",
            table {
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                    }
                }
                tbody {
                    for record in state.targets().iter() {
                        TargetRow {
                            session,
                            id: record.id.clone(),
                            name: record.name.clone(),
                            selected: state.selection().is_selected(&record.id),
                        }
                    }
                }
            }
        }
    }
}

/// One catalog row.
#[component]
fn TargetRow(
    session: Signal<Session>,
    id: String,
    name: String,
    selected: bool,
) -> Element {
    let row_class = if selected { "selected" } else { "" };
    let row_id = id.clone();
    rsx! {
        tr {
            class: "{row_class}",
            onclick: move |_| {
                let mut s = session;
                let _ = s.write().select_target(&row_id);
            },
            td { "{id}" }
            td { "{name}" }
        }
    }
}

/// The molecule editor container plus the "Get SMILES" echo affordance.
/// The editor itself is the JSME applet mounted by `index.html`.
#[component]
fn EditorBox(smiles_echo: Signal<String>) -> Element {
    rsx! {
        div { class: "editor-box",
            div { id: "jsme_container" }
            button {
                onclick: move |_| {
                    let mut echo = smiles_echo;
                    match bridge::editor_smiles() {
                        Ok(smiles) => echo.set(smiles),
                        Err(e) => bridge::alert(&e.to_string()),
                    }
                },
                "Get SMILES"
            }
            code { class: "smiles-out", "{smiles_echo}" }
        }
    }
}

/// Predict button: validate inputs, call the service, fold the response in.
#[component]
fn PredictButton(session: Signal<Session>) -> Element {
    rsx! {
        button {
            class: "predict",
            onclick: move |_| {
                let smiles = match bridge::editor_smiles() {
                    Ok(s) => s,
                    Err(e) => {
                        bridge::alert(&e.to_string());
                        return;
                    }
                };
                let query = match session.read().begin_prediction(&smiles) {
                    Ok(q) => q,
                    Err(e) => {
                        bridge::alert(&e.to_string());
                        return;
                    }
                };
                spawn(run_prediction(session, query));
            },
            "Predict"
        }
    }
}

/// POST the query and fold the response into the session. Overlapping
/// predictions are not serialized; each response fully repaints, so the
/// last one to resolve is what stays on screen.
async fn run_prediction(mut session: Signal<Session>, query: PredictionQuery) {
    let body = match serde_json::to_string(&query) {
        Ok(b) => b,
        Err(e) => {
            bridge::alert(&DtiError::Network(e.to_string()).to_string());
            return;
        }
    };
    let outcome =
        match bridge::post_json(&format!("{}/predict", crate::API_BASE), &body)
            .await
        {
            Ok(o) => o,
            Err(e) => {
                bridge::alert(&e.to_string());
                return;
            }
        };
    if !outcome.ok {
        let detail = serde_json::from_str::<ServiceDetail>(&outcome.body)
            .map_or_else(|_| "Unknown error".to_owned(), |d| d.detail);
        bridge::alert(&DtiError::Service { detail }.to_string());
        return;
    }
    match serde_json::from_str::<PredictionResult>(&outcome.body) {
        Ok(result) => {
            let _ = session.write().apply_prediction(&result);
        }
        Err(e) => {
            bridge::alert(&DtiError::Network(e.to_string()).to_string());
        }
    }
}

/// Result area. Painted through the engine's [`HtmlSurface`] so the markup
/// and paint order (clear, probability, heading, entries, summary) match
/// the page contract exactly; replaced wholesale on every prediction.
#[component]
fn ResultPanel(session: Signal<Session>) -> Element {
    let state = session.read();
    let html = state.latest_plan().map_or_else(String::new, |plan| {
        let mut surface = HtmlSurface::new();
        view::paint(plan, &mut surface);
        surface.into_html()
    });
    rsx! {
        div { id: "result", dangerous_inner_html: "{html}" }
    }
}
