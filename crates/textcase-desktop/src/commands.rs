use tauri::{AppHandle, Emitter, State};

use textcase_desktop::state::DesktopState;
use textcase_desktop::view::SessionView;

/// Event carrying a fresh [`SessionView`] whenever the session changes.
pub const SESSION_CHANGED: &str = "session-changed";

/// Event sent after a reset; the page clears its input box on this one only.
pub const SESSION_RESET: &str = "session-reset";

pub fn specta_builder() -> tauri_specta::Builder<tauri::Wry> {
    tauri_specta::Builder::<tauri::Wry>::new().commands(tauri_specta::collect_commands![
        get_session,
        set_input,
        apply_action,
        reset_session,
    ])
}

fn emit(app: &AppHandle, event: &str, view: &SessionView) {
    if let Err(e) = app.emit(event, view) {
        tracing::warn!(error = %e, "failed to emit {event}");
    }
}

pub fn notify(app: &AppHandle, view: &SessionView) {
    emit(app, SESSION_CHANGED, view);
}

pub fn announce_reset(app: &AppHandle, view: &SessionView) {
    emit(app, SESSION_RESET, view);
    emit(app, SESSION_CHANGED, view);
}

#[tauri::command]
#[specta::specta]
pub async fn get_session(state: State<'_, DesktopState>) -> Result<SessionView, String> {
    Ok(state.snapshot().await)
}

#[tauri::command]
#[specta::specta]
pub async fn set_input(
    app: AppHandle,
    state: State<'_, DesktopState>,
    text: String,
) -> Result<SessionView, String> {
    let (view, changed) = state.set_input(text).await;
    if changed {
        notify(&app, &view);
    }
    Ok(view)
}

/// `text` is what the input box shows at click time; it replaces the
/// stored input before the transform runs, so out-of-order `set_input`
/// calls cannot change which text a card is made from.
#[tauri::command]
#[specta::specta]
pub async fn apply_action(
    app: AppHandle,
    state: State<'_, DesktopState>,
    action: String,
    text: String,
) -> Result<SessionView, String> {
    let view = state.apply_to(&action, text).await.map_err(|e| {
        tracing::warn!(%action, error = %e, "action rejected");
        e.to_string()
    })?;
    notify(&app, &view);
    Ok(view)
}

#[tauri::command]
#[specta::specta]
pub async fn reset_session(
    app: AppHandle,
    state: State<'_, DesktopState>,
) -> Result<SessionView, String> {
    let view = state.reset().await;
    announce_reset(&app, &view);
    Ok(view)
}
