use crate::config::{DesktopConfig, FocusOnClose, UnknownWindowPolicy};
use crate::error::{DesktopError, Result};
use crate::i18n::{self, Language};
use chrono::{DateTime, Local};
use tracing::{debug, warn};

use self::shell::StartEntry;
use self::window::{AppWindow, WindowId};

pub mod frame;
pub mod shell;
pub mod snapshot;
pub mod window;

/// Single source of truth for the desktop: which windows are open, minimized
/// and focused, plus the start menu, language and clock.
pub struct DesktopController {
    windows: Vec<AppWindow>,           // Fixed collection order, never reordered
    active_window: Option<WindowId>,   // May point at a closed window (see FocusOnClose::Keep)
    open_order: Vec<WindowId>,         // Open windows, oldest first
    language: Language,
    start_menu_open: bool,
    clock_time: DateTime<Local>,
    unknown_window: UnknownWindowPolicy,
    focus_on_close: FocusOnClose,
}

impl DesktopController {
    pub fn new(config: &DesktopConfig) -> Self {
        let startup = config.open_at_startup;
        let windows = WindowId::ALL
            .iter()
            .map(|id| AppWindow::new(*id, *id == startup))
            .collect();

        Self {
            windows,
            active_window: Some(startup),
            open_order: vec![startup],
            language: config.language,
            start_menu_open: false,
            clock_time: Local::now(),
            unknown_window: config.unknown_window,
            focus_on_close: config.focus_on_close,
        }
    }

    /// Resolve a raw id coming from the view.
    /// `Ok(None)` means the id is unknown and the caller should do nothing.
    pub fn lookup(&self, raw: &str) -> Result<Option<WindowId>> {
        match WindowId::from_str(raw) {
            Some(id) => Ok(Some(id)),
            None => match self.unknown_window {
                UnknownWindowPolicy::Ignore => {
                    warn!("Ignoring unknown window id '{}'", raw);
                    Ok(None)
                }
                UnknownWindowPolicy::Reject => Err(DesktopError::UnknownWindow(raw.to_string())),
            },
        }
    }

    /// Open a closed window (focusing it) or close an open one
    pub fn toggle_window(&mut self, id: WindowId) {
        let Some(win) = self.window_mut(id) else {
            return;
        };
        let was_open = win.is_open;
        win.is_open = !was_open;
        win.is_minimized = false;

        if was_open {
            debug!("[TOGGLE] {} closed", id);
            self.on_closed(id);
        } else {
            debug!("[TOGGLE] {} opened", id);
            self.open_order.retain(|w| *w != id);
            self.open_order.push(id);
            self.active_window = Some(id);
        }
    }

    pub fn close_window(&mut self, id: WindowId) {
        let Some(win) = self.window_mut(id) else {
            return;
        };
        let was_open = win.is_open;
        win.is_open = false;
        debug!("[CLOSE] {}", id);

        if was_open {
            self.on_closed(id);
        }
    }

    pub fn minimize_window(&mut self, id: WindowId) {
        if let Some(win) = self.window_mut(id) {
            win.is_minimized = true;
            debug!("[MINIMIZE] {}", id);
        }
    }

    /// Focus a window, restoring it if minimized. Does not open closed windows.
    pub fn focus_window(&mut self, id: WindowId) {
        if let Some(win) = self.window_mut(id) {
            win.is_minimized = false;
            self.active_window = Some(id);
            debug!("[FOCUS] {}", id);
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            debug!("[LANGUAGE] {} -> {}", self.language.code(), language.code());
        }
        self.language = language;
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.other());
    }

    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Activate a start menu entry. Only entries bound to a window do anything.
    pub fn launch_start_entry(&mut self, entry: StartEntry) {
        match entry.target() {
            Some(id) => {
                self.toggle_window(id);
                self.close_start_menu();
            }
            None => debug!("[START] {:?} has no action", entry),
        }
    }

    pub fn tick(&mut self, now: DateTime<Local>) {
        self.clock_time = now;
    }

    fn on_closed(&mut self, id: WindowId) {
        self.open_order.retain(|w| *w != id);

        if self.active_window != Some(id) {
            return;
        }
        match self.focus_on_close {
            FocusOnClose::Keep => {}
            FocusOnClose::MostRecent => {
                let next = self
                    .open_order
                    .iter()
                    .rev()
                    .copied()
                    .find(|w| self.window(*w).is_some_and(AppWindow::is_screen_visible));
                debug!("[CLOSE] focus moves {} -> {:?}", id, next);
                self.active_window = next;
            }
        }
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut AppWindow> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    // ===== Read-only projections =====

    pub fn window(&self, id: WindowId) -> Option<&AppWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn windows(&self) -> &[AppWindow] {
        &self.windows
    }

    /// Raw active pointer, which may reference a closed window
    pub fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    /// Whether `id` is focused and actually on screen
    pub fn is_active(&self, id: WindowId) -> bool {
        self.active_window == Some(id) && self.window(id).is_some_and(AppWindow::is_screen_visible)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    pub fn clock_time(&self) -> DateTime<Local> {
        self.clock_time
    }

    pub fn title(&self, id: WindowId) -> &'static str {
        i18n::window_title(self.language, id)
    }

    /// Windows drawn on screen, in collection order
    pub fn screen_layer(&self) -> impl Iterator<Item = &AppWindow> {
        self.windows.iter().filter(|w| w.is_screen_visible())
    }

    /// Windows listed in the taskbar (open, minimized or not), in collection order
    pub fn taskbar(&self) -> impl Iterator<Item = &AppWindow> {
        self.windows.iter().filter(|w| w.is_taskbar_visible())
    }

    /// Taskbar "pressed" state: focused and not minimized
    pub fn is_pressed(&self, id: WindowId) -> bool {
        self.active_window == Some(id)
            && self
                .window(id)
                .is_some_and(|w| w.is_open && !w.is_minimized)
    }
}
