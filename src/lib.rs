//! Explanation rendering engine for a drug-target interaction predictor.
//!
//! The browser page lets a user pick a protein target from a catalog, draw a
//! molecule, and submit both to a prediction service. This crate holds
//! everything behind that page that is not DOM glue: the service wire model,
//! the explanation-to-narrative renderer, the page state transitions, and the
//! painting contract for the result area.
//!
//! # Key entry points
//!
//! - [`explain::build_render_plan`] - the pure renderer turning a
//!   [`model::PredictionResult`] into a display-ready [`explain::RenderPlan`]
//! - [`session::Session`] - catalog, target selection, and the latest plan,
//!   with one method per page event
//! - [`view::paint`] - repaint a [`view::ResultSurface`] from a plan
//! - [`client::PredictionClient`] - blocking service client (`client`
//!   feature, native builds only)
//!
//! # Architecture
//!
//! [`explain`] is pure and total: any well-formed prediction response maps to
//! exactly one plan, with no side effects, so it can be re-invoked freely and
//! tested exhaustively. Everything stateful lives in [`session`], which is
//! deliberately free of any UI-framework or transport concern; the Dioxus
//! front end in `crates/dtiscope-ui` and the native [`client`] both drive it
//! from outside.

pub mod error;
pub mod explain;
pub mod model;
pub mod session;
pub mod view;

#[cfg(feature = "client")]
pub mod client;
