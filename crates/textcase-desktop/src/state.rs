use std::sync::Arc;

use tokio::sync::Mutex;

use textcase_core::{CoreError, Session, TransformAction};

use crate::view::SessionView;

/// Session state managed by Tauri. Lives only in memory; a page reload
/// calls [`DesktopState::reset`].
#[derive(Clone, Default)]
pub struct DesktopState {
    pub session: Arc<Mutex<Session>>,
}

impl DesktopState {
    pub async fn snapshot(&self) -> SessionView {
        SessionView::from_session(&*self.session.lock().await)
    }

    /// Returns the new snapshot and whether the text actually changed.
    pub async fn set_input(&self, text: String) -> (SessionView, bool) {
        let mut session = self.session.lock().await;
        let changed = session.set_input(text).is_some();
        (SessionView::from_session(&session), changed)
    }

    pub async fn apply(&self, action: &str) -> Result<SessionView, CoreError> {
        let action: TransformAction = action.parse()?;
        let mut session = self.session.lock().await;
        session.apply(action)?;
        Ok(SessionView::from_session(&session))
    }

    /// Store `text` as the input and apply `action` to it under one lock.
    /// An unknown action leaves the session untouched.
    pub async fn apply_to(&self, action: &str, text: String) -> Result<SessionView, CoreError> {
        let action: TransformAction = action.parse()?;
        let mut session = self.session.lock().await;
        session.set_input(text);
        session.apply(action)?;
        Ok(SessionView::from_session(&session))
    }

    pub async fn reset(&self) -> SessionView {
        let mut session = self.session.lock().await;
        session.reset();
        SessionView::from_session(&session)
    }
}
