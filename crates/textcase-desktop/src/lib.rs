//! textcase-desktop library root.
//!
//! Everything the Tauri command layer sits on top of lives here so that
//! integration tests can drive the session, config, and view snapshots
//! without a webview.

pub mod config;
pub mod logging;
pub mod state;
pub mod view;
