//! # Quartier TUI
//!
//! Terminal client for the Paris address analysis service. The user types a
//! street address, the service analyzes it (geocoding, neighborhood
//! content, transit), and the client renders a multi-section report.
//!
//! ## Architecture
//!
//! Message-driven, Elm-style:
//!
//! - **State**: the request lifecycle lives in a single
//!   [`quartier_client::RequestController`]; the four UI situations are its
//!   four variants.
//! - **Update**: keyboard events and settlement messages from the spawned
//!   API task flow through [`app::App::update`] over an internal channel.
//! - **View**: [`report`] derives a display model from the request state
//!   with explicit presence guards per section; [`view`] maps it to
//!   ratatui widgets.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod message;
pub mod report;
pub mod view;

pub use app::App;
pub use config::Config;
