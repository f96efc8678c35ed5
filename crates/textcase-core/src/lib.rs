//! textcase-core
//!
//! Pure text-case transforms and the page-session state around them:
//! the input holder, the four transform actions, and the newest-first
//! output list. No I/O, no Tauri dependency.

pub mod action;
pub mod error;
pub mod input;
pub mod output;
pub mod record;
pub mod session;
pub mod transform;

pub use action::TransformAction;
pub use error::CoreError;
pub use input::{InputChange, InputHolder};
pub use output::{OutputList, OutputState};
pub use record::TransformRecord;
pub use session::Session;
