// Tauri host: managed state, IPC commands, events and the clock task lifecycle

mod commands;

use crate::clock::ClockTicker;
use crate::config::{DesktopConfig, CONFIG_FILE};
use crate::desktop::Desktop;
use crate::state::snapshot::DesktopSnapshot;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tauri::{AppHandle, Emitter, Manager, RunEvent, WindowEvent};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

pub const DESKTOP_CHANGED: &str = "desktop-changed";
pub const CLOCK_TICK: &str = "clock-tick";

#[derive(Clone, Serialize)]
struct ClockTickPayload {
    time: String,
}

// Arc so the clock task can share the desktop with command handlers
pub struct SharedDesktop(pub Arc<Mutex<Desktop>>);

struct ClockState(Mutex<Option<ClockTicker>>);

/// Push a fresh snapshot to the view
fn publish(app: &AppHandle, snapshot: &DesktopSnapshot) {
    if let Err(e) = app.emit(DESKTOP_CHANGED, snapshot.clone()) {
        warn!("Failed to emit {}: {}", DESKTOP_CHANGED, e);
    }
}

fn load_config(app: &AppHandle) -> DesktopConfig {
    let path = match app.path().app_config_dir() {
        Ok(dir) => dir.join(CONFIG_FILE),
        Err(e) => {
            warn!("No app config dir ({}), using defaults", e);
            return DesktopConfig::default();
        }
    };

    DesktopConfig::load(&path).unwrap_or_else(|e| {
        error!("{}; falling back to defaults", e);
        DesktopConfig::default()
    })
}

fn start_clock(app: &AppHandle, desktop: Arc<Mutex<Desktop>>, interval_ms: u64) -> ClockTicker {
    let handle = app.clone();
    let period = Duration::from_millis(interval_ms.max(1));

    ClockTicker::start(tauri::async_runtime::handle().inner(), period, move |now| {
        let time = match desktop.lock() {
            Ok(mut desktop) => desktop.tick(now),
            Err(_) => {
                warn!("[CLOCK] desktop state poisoned, skipping tick");
                return;
            }
        };
        if let Err(e) = handle.emit(CLOCK_TICK, ClockTickPayload { time }) {
            warn!("Failed to emit {}: {}", CLOCK_TICK, e);
        }
    })
}

fn stop_clock(app: &AppHandle) {
    let Some(clock) = app.try_state::<ClockState>() else {
        return;
    };
    if let Ok(mut slot) = clock.0.lock() {
        if let Some(mut ticker) = slot.take() {
            ticker.stop();
            info!("Clock stopped");
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let config = load_config(app.handle());
            let desktop = Arc::new(Mutex::new(Desktop::new(&config)));

            let ticker = start_clock(app.handle(), desktop.clone(), config.clock.interval_ms);
            app.manage(SharedDesktop(desktop));
            app.manage(ClockState(Mutex::new(Some(ticker))));

            info!(
                "Desktop ready (language: {}, open: {})",
                config.language.code(),
                config.open_at_startup
            );
            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                if window.label() == "main" {
                    stop_clock(window.app_handle());
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_desktop,
            commands::toggle_window,
            commands::close_window,
            commands::minimize_window,
            commands::focus_window,
            commands::set_language,
            commands::toggle_language,
            commands::toggle_start_menu,
            commands::launch_start_entry,
            commands::frame_input,
            commands::open_link,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app, event| {
        if let RunEvent::Exit = event {
            stop_clock(app);
        }
    });
}
