use crate::config::DesktopConfig;
use crate::error::Result;
use crate::links::DesktopMedia;
use crate::state::frame::{FrameHost, FrameInput};
use crate::state::snapshot::DesktopSnapshot;
use crate::state::window::WindowId;
use crate::state::DesktopController;
use chrono::{DateTime, Local};
use tracing::debug;

/// Controller plus the frames it drives. Every mutation goes through here so
/// frames are re-synced before the view sees a snapshot.
pub struct Desktop {
    controller: DesktopController,
    frames: FrameHost,
    clock_format: String,
    media: DesktopMedia,
}

impl Desktop {
    pub fn new(config: &DesktopConfig) -> Self {
        let controller = DesktopController::new(config);
        let mut frames = FrameHost::new(config.cascade);
        frames.sync(&controller);

        Self {
            controller,
            frames,
            clock_format: config.clock.format.clone(),
            media: DesktopMedia::new(config.ambience),
        }
    }

    pub fn controller(&self) -> &DesktopController {
        &self.controller
    }

    pub fn frames(&self) -> &FrameHost {
        &self.frames
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot::capture(&self.controller, &self.frames, &self.clock_format, &self.media)
    }

    /// Apply a controller operation that doesn't target a window
    pub fn update<F>(&mut self, op: F) -> DesktopSnapshot
    where
        F: FnOnce(&mut DesktopController),
    {
        op(&mut self.controller);
        self.frames.sync(&self.controller);
        self.snapshot()
    }

    /// Apply a window operation to a raw id from the view. Unknown ids follow
    /// the configured policy: ignored (snapshot unchanged) or rejected.
    pub fn with_window<F>(&mut self, raw: &str, op: F) -> Result<DesktopSnapshot>
    where
        F: FnOnce(&mut DesktopController, WindowId),
    {
        if let Some(id) = self.controller.lookup(raw)? {
            op(&mut self.controller, id);
            self.frames.sync(&self.controller);
        }
        Ok(self.snapshot())
    }

    /// Route a frame interaction: the frame updates its own position, then
    /// whatever it requests is applied to the controller
    pub fn frame_input(&mut self, raw: &str, input: FrameInput) -> Result<DesktopSnapshot> {
        if let Some(id) = self.controller.lookup(raw)? {
            if let Some(request) = self.frames.interact(id, input) {
                debug!("[FRAME] {} requests {:?}", id, request);
                request.apply(&mut self.controller, id);
            }
            self.frames.sync(&self.controller);
        }
        Ok(self.snapshot())
    }

    /// Record a clock tick and return the formatted taskbar time
    pub fn tick(&mut self, now: DateTime<Local>) -> String {
        self.controller.tick(now);
        now.format(&self.clock_format).to_string()
    }
}
