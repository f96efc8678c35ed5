#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;
use tauri::Manager;
use tauri::webview::PageLoadEvent;

use textcase_desktop::state::DesktopState;

mod commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = textcase_desktop::config::load_or_default();
    textcase_desktop::logging::init(&config);

    let specta = commands::specta_builder();

    #[cfg(debug_assertions)]
    {
        std::fs::create_dir_all("bindings")?;
        specta
            .export(specta_typescript::Typescript::default(), "bindings/commands.ts")
            .map_err(|e| eyre::eyre!("failed to export command bindings: {e}"))?;
    }

    tauri::Builder::default()
        .manage(DesktopState::default())
        // A reload starts a fresh page session; nothing survives it. The
        // reset completes before the new page can issue its first command.
        .on_page_load(|webview, payload| {
            if !matches!(payload.event(), PageLoadEvent::Started) {
                return;
            }
            let state = webview.state::<DesktopState>();
            let view = tauri::async_runtime::block_on(state.reset());
            commands::announce_reset(webview.app_handle(), &view);
        })
        .invoke_handler(specta.invoke_handler())
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}
