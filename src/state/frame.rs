// Window frames: per-mount drag state and the mapping from frame
// interactions to controller requests

use super::window::WindowId;
use super::DesktopController;
use crate::config::CascadeConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Decorative menu bar shown under every title bar
pub const MENU_BAR: [&str; 4] = ["File", "Edit", "View", "Help"];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Raw interaction reported by a frame in the view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FrameInput {
    /// Press anywhere on the frame
    PointerDown,
    /// Direct-manipulation move by a delta
    Drag { dx: f64, dy: f64 },
    Minimize,
    /// Rendered for parity with the reference chrome; does nothing
    Maximize,
    Close,
}

/// What a frame asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    Focus,
    Minimize,
    Close,
}

impl FrameRequest {
    pub fn apply(self, desktop: &mut DesktopController, id: WindowId) {
        match self {
            FrameRequest::Focus => desktop.focus_window(id),
            FrameRequest::Minimize => desktop.minimize_window(id),
            FrameRequest::Close => desktop.close_window(id),
        }
    }
}

/// One frame instance, alive while its window is on screen
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMount {
    pub mount_id: Uuid,
    pub origin: Point,
    pub offset: Point,
}

impl FrameMount {
    pub fn position(&self) -> Point {
        self.origin.offset(self.offset.x, self.offset.y)
    }
}

/// Owns the frames currently on screen. Positions live here and nowhere
/// else, so they vanish when a window leaves the screen layer.
pub struct FrameHost {
    cascade: CascadeConfig,
    mounts: BTreeMap<WindowId, FrameMount>,
}

impl FrameHost {
    pub fn new(cascade: CascadeConfig) -> Self {
        Self {
            cascade,
            mounts: BTreeMap::new(),
        }
    }

    /// Cascade slot for the k-th visible window
    pub fn cascade_origin(&self, index: usize) -> Point {
        let shift = index as f64 * self.cascade.step;
        Point::new(self.cascade.origin_x + shift, self.cascade.origin_y + shift)
    }

    /// Bring mounts in line with the controller's screen layer.
    /// New frames take the cascade slot of their current index; existing ones keep theirs.
    pub fn sync(&mut self, desktop: &DesktopController) {
        let visible: Vec<WindowId> = desktop.screen_layer().map(|w| w.id).collect();

        self.mounts.retain(|id, mount| {
            let keep = visible.contains(id);
            if !keep {
                debug!("[FRAME] unmount {} ({})", id, mount.mount_id);
            }
            keep
        });

        for (index, id) in visible.iter().enumerate() {
            if self.mounts.contains_key(id) {
                continue;
            }
            let mount = FrameMount {
                mount_id: Uuid::new_v4(),
                origin: self.cascade_origin(index),
                offset: Point::default(),
            };
            debug!("[FRAME] mount {} ({}) at {:?}", id, mount.mount_id, mount.origin);
            self.mounts.insert(*id, mount);
        }
    }

    /// Handle an interaction on a mounted frame. Unmounted frames ignore input.
    pub fn interact(&mut self, id: WindowId, input: FrameInput) -> Option<FrameRequest> {
        let Some(mount) = self.mounts.get_mut(&id) else {
            debug!("[FRAME] {:?} on unmounted {}", input, id);
            return None;
        };

        match input {
            FrameInput::PointerDown => Some(FrameRequest::Focus),
            FrameInput::Drag { dx, dy } => {
                mount.offset = mount.offset.offset(dx, dy);
                Some(FrameRequest::Focus)
            }
            FrameInput::Minimize => Some(FrameRequest::Minimize),
            FrameInput::Close => Some(FrameRequest::Close),
            FrameInput::Maximize => {
                debug!("[FRAME] maximize on {} is decorative", id);
                None
            }
        }
    }

    pub fn mount(&self, id: WindowId) -> Option<&FrameMount> {
        self.mounts.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesktopConfig;

    fn setup() -> (DesktopController, FrameHost) {
        let config = DesktopConfig::default();
        let desktop = DesktopController::new(&config);
        let mut frames = FrameHost::new(config.cascade);
        frames.sync(&desktop);
        (desktop, frames)
    }

    fn dispatch(
        desktop: &mut DesktopController,
        frames: &mut FrameHost,
        id: WindowId,
        input: FrameInput,
    ) {
        if let Some(request) = frames.interact(id, input) {
            request.apply(desktop, id);
        }
        frames.sync(desktop);
    }

    #[test]
    fn test_cascade_offsets() {
        let (mut desktop, mut frames) = setup();
        desktop.toggle_window(WindowId::Projects);
        desktop.toggle_window(WindowId::Contact);
        frames.sync(&desktop);

        assert_eq!(frames.mount(WindowId::About).unwrap().origin, Point::new(100.0, 100.0));
        assert_eq!(frames.mount(WindowId::Projects).unwrap().origin, Point::new(140.0, 140.0));
        assert_eq!(frames.mount(WindowId::Contact).unwrap().origin, Point::new(180.0, 180.0));
    }

    #[test]
    fn test_drag_moves_and_focuses() {
        let (mut desktop, mut frames) = setup();
        desktop.toggle_window(WindowId::Cv);
        frames.sync(&desktop);

        dispatch(&mut desktop, &mut frames, WindowId::About, FrameInput::Drag { dx: 15.0, dy: -5.0 });
        dispatch(&mut desktop, &mut frames, WindowId::About, FrameInput::Drag { dx: 5.0, dy: 0.0 });

        assert_eq!(frames.mount(WindowId::About).unwrap().position(), Point::new(120.0, 95.0));
        assert_eq!(desktop.active_window(), Some(WindowId::About));
    }

    #[test]
    fn test_pointer_down_focuses() {
        let (mut desktop, mut frames) = setup();
        desktop.toggle_window(WindowId::Music);
        frames.sync(&desktop);

        dispatch(&mut desktop, &mut frames, WindowId::About, FrameInput::PointerDown);
        assert!(desktop.is_active(WindowId::About));
        assert!(!desktop.is_active(WindowId::Music));
    }

    #[test]
    fn test_reopen_resets_position() {
        let (mut desktop, mut frames) = setup();
        let first_mount = frames.mount(WindowId::About).unwrap().mount_id;
        dispatch(&mut desktop, &mut frames, WindowId::About, FrameInput::Drag { dx: 50.0, dy: 50.0 });

        dispatch(&mut desktop, &mut frames, WindowId::About, FrameInput::Close);
        assert!(frames.mount(WindowId::About).is_none());

        desktop.toggle_window(WindowId::About);
        frames.sync(&desktop);
        let mount = frames.mount(WindowId::About).unwrap();
        assert_ne!(mount.mount_id, first_mount);
        assert_eq!(mount.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_minimize_unmounts_frame() {
        let (mut desktop, mut frames) = setup();
        dispatch(&mut desktop, &mut frames, WindowId::About, FrameInput::Drag { dx: 10.0, dy: 10.0 });
        dispatch(&mut desktop, &mut frames, WindowId::About, FrameInput::Minimize);

        assert!(desktop.window(WindowId::About).unwrap().is_minimized);
        assert!(frames.mount(WindowId::About).is_none());

        desktop.focus_window(WindowId::About);
        frames.sync(&desktop);
        assert_eq!(frames.mount(WindowId::About).unwrap().offset, Point::default());
    }

    #[test]
    fn test_existing_frames_keep_their_slot() {
        let (mut desktop, mut frames) = setup();
        desktop.toggle_window(WindowId::Projects);
        frames.sync(&desktop);
        desktop.close_window(WindowId::About);
        desktop.toggle_window(WindowId::Music);
        frames.sync(&desktop);

        // Projects mounted second and keeps that slot; Music mounts at index 1 now
        assert_eq!(frames.mount(WindowId::Projects).unwrap().origin, Point::new(140.0, 140.0));
        assert_eq!(frames.mount(WindowId::Music).unwrap().origin, Point::new(140.0, 140.0));
    }

    #[test]
    fn test_maximize_is_a_no_op() {
        let (mut desktop, mut frames) = setup();
        desktop.toggle_window(WindowId::Cv);
        frames.sync(&desktop);

        assert_eq!(frames.interact(WindowId::About, FrameInput::Maximize), None);
        dispatch(&mut desktop, &mut frames, WindowId::About, FrameInput::Maximize);
        assert_eq!(desktop.active_window(), Some(WindowId::Cv));
        assert!(desktop.window(WindowId::About).unwrap().is_screen_visible());
    }

    #[test]
    fn test_input_on_unmounted_frame_is_ignored() {
        let (mut desktop, mut frames) = setup();
        assert_eq!(frames.interact(WindowId::Contact, FrameInput::PointerDown), None);
        dispatch(&mut desktop, &mut frames, WindowId::Contact, FrameInput::Close);
        assert_eq!(desktop.active_window(), Some(WindowId::About));
    }

    #[test]
    fn test_frame_input_wire_format() {
        let drag: FrameInput = serde_json::from_str(r#"{"kind":"drag","dx":3,"dy":-2.5}"#).unwrap();
        assert_eq!(drag, FrameInput::Drag { dx: 3.0, dy: -2.5 });
        let down: FrameInput = serde_json::from_str(r#"{"kind":"pointer-down"}"#).unwrap();
        assert_eq!(down, FrameInput::PointerDown);
    }
}
