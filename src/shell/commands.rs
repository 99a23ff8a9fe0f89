use super::{publish, SharedDesktop};
use crate::error::{DesktopError, Result};
use crate::i18n::Language;
use crate::links::LinkId;
use crate::state::frame::FrameInput;
use crate::state::shell::StartEntry;
use crate::state::snapshot::DesktopSnapshot;
use crate::state::DesktopController;
use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;
use tracing::info;

// ===== Desktop Commands =====

/// Current snapshot, used by the view on first paint
#[tauri::command]
pub fn get_desktop(state: State<'_, SharedDesktop>) -> Result<DesktopSnapshot> {
    Ok(state.0.lock()?.snapshot())
}

// ===== Window Management Commands =====

#[tauri::command]
pub fn toggle_window(
    id: String,
    app: AppHandle,
    state: State<'_, SharedDesktop>,
) -> Result<DesktopSnapshot> {
    let snapshot = state.0.lock()?.with_window(&id, DesktopController::toggle_window)?;
    publish(&app, &snapshot);
    Ok(snapshot)
}

#[tauri::command]
pub fn close_window(
    id: String,
    app: AppHandle,
    state: State<'_, SharedDesktop>,
) -> Result<DesktopSnapshot> {
    let snapshot = state.0.lock()?.with_window(&id, DesktopController::close_window)?;
    publish(&app, &snapshot);
    Ok(snapshot)
}

#[tauri::command]
pub fn minimize_window(
    id: String,
    app: AppHandle,
    state: State<'_, SharedDesktop>,
) -> Result<DesktopSnapshot> {
    let snapshot = state.0.lock()?.with_window(&id, DesktopController::minimize_window)?;
    publish(&app, &snapshot);
    Ok(snapshot)
}

/// Taskbar button click: focus and restore
#[tauri::command]
pub fn focus_window(
    id: String,
    app: AppHandle,
    state: State<'_, SharedDesktop>,
) -> Result<DesktopSnapshot> {
    let snapshot = state.0.lock()?.with_window(&id, DesktopController::focus_window)?;
    publish(&app, &snapshot);
    Ok(snapshot)
}

/// Press, drag, or title bar button on a window frame
#[tauri::command]
pub fn frame_input(
    id: String,
    input: FrameInput,
    app: AppHandle,
    state: State<'_, SharedDesktop>,
) -> Result<DesktopSnapshot> {
    let snapshot = state.0.lock()?.frame_input(&id, input)?;
    publish(&app, &snapshot);
    Ok(snapshot)
}

// ===== Shell Commands =====

#[tauri::command]
pub fn set_language(
    language: String,
    app: AppHandle,
    state: State<'_, SharedDesktop>,
) -> Result<DesktopSnapshot> {
    let language: Language = language.parse()?;
    let snapshot = state.0.lock()?.update(|c| c.set_language(language));
    publish(&app, &snapshot);
    Ok(snapshot)
}

#[tauri::command]
pub fn toggle_language(app: AppHandle, state: State<'_, SharedDesktop>) -> Result<DesktopSnapshot> {
    let snapshot = state.0.lock()?.update(DesktopController::toggle_language);
    publish(&app, &snapshot);
    Ok(snapshot)
}

#[tauri::command]
pub fn toggle_start_menu(
    app: AppHandle,
    state: State<'_, SharedDesktop>,
) -> Result<DesktopSnapshot> {
    let snapshot = state.0.lock()?.update(DesktopController::toggle_start_menu);
    publish(&app, &snapshot);
    Ok(snapshot)
}

#[tauri::command]
pub fn launch_start_entry(
    entry: StartEntry,
    app: AppHandle,
    state: State<'_, SharedDesktop>,
) -> Result<DesktopSnapshot> {
    let snapshot = state.0.lock()?.update(|c| c.launch_start_entry(entry));
    publish(&app, &snapshot);
    Ok(snapshot)
}

// ===== Outbound Links =====

/// Open one of the fixed outbound links in the system browser
#[tauri::command]
pub fn open_link(link: LinkId, app: AppHandle) -> Result<()> {
    info!("Opening {:?} -> {}", link, link.url());
    app.opener()
        .open_url(link.url(), None::<&str>)
        .map_err(|e| DesktopError::Opener(e.to_string()))
}
