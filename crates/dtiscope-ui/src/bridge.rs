//! JS interop: the JSME molecule editor, alerts, and the browser fetch API.
//!
//! The molecule editor is the stock JSME applet loaded by `index.html`; it
//! announces itself as `window.jsmeApplet`, and the drawing logic stays
//! entirely on the JS side. This module only reads the current SMILES out
//! of it, shows the page's one user-visible failure channel (`alert`), and
//! wraps `fetch` for the two service endpoints.

use dtiscope::error::DtiError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Read the current SMILES string from the editor.
///
/// An empty string is returned as-is; whether empty input is acceptable is
/// the session layer's call, not the bridge's.
///
/// # Errors
///
/// [`DtiError::WidgetNotReady`] when the applet has not initialized yet or
/// does not answer with a string.
pub fn editor_smiles() -> Result<String, DtiError> {
    let applet = js_sys::Reflect::get(
        &js_sys::global(),
        &JsValue::from_str("jsmeApplet"),
    )
    .map_err(|_| DtiError::WidgetNotReady)?;
    if applet.is_undefined() || applet.is_null() {
        return Err(DtiError::WidgetNotReady);
    }
    let smiles = js_sys::eval("window.jsmeApplet.smiles()")
        .map_err(|_| DtiError::WidgetNotReady)?;
    smiles.as_string().ok_or(DtiError::WidgetNotReady)
}

/// Show a blocking alert, the page's single user-visible error channel.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Outcome of one HTTP exchange: whether the status was in the success
/// range, plus the raw body text.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// `true` for 2xx statuses.
    pub ok: bool,
    /// Raw response body.
    pub body: String,
}

/// `GET url`, returning status and body text.
///
/// # Errors
///
/// [`DtiError::Network`] on transport failure.
pub async fn get_text(url: &str) -> Result<FetchOutcome, DtiError> {
    let window = web_sys::window()
        .ok_or_else(|| DtiError::Network("no window".to_owned()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| DtiError::Network(js_error_text(&e)))?;
    read_response(response).await
}

/// `POST url` with a JSON body, returning status and body text.
///
/// # Errors
///
/// [`DtiError::Network`] on transport failure.
pub async fn post_json(url: &str, body: &str) -> Result<FetchOutcome, DtiError> {
    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| DtiError::Network(js_error_text(&e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| DtiError::Network(js_error_text(&e)))?;

    let window = web_sys::window()
        .ok_or_else(|| DtiError::Network("no window".to_owned()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| DtiError::Network(js_error_text(&e)))?;
    read_response(response).await
}

/// Downcast the fetch result and read its body text.
async fn read_response(value: JsValue) -> Result<FetchOutcome, DtiError> {
    let response: web_sys::Response = value
        .dyn_into()
        .map_err(|_| DtiError::Network("unexpected fetch result".to_owned()))?;
    let ok = response.ok();
    let text_promise = response
        .text()
        .map_err(|e| DtiError::Network(js_error_text(&e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| DtiError::Network(js_error_text(&e)))?
        .as_string()
        .unwrap_or_default();
    Ok(FetchOutcome { ok, body })
}

/// Best-effort text for an opaque JS error value.
fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
