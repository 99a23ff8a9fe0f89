use super::frame::{FrameHost, Point, MENU_BAR};
use super::shell::{desktop_icons, start_menu, DesktopIcon, StartMenu};
use super::window::{Glyph, WindowId};
use super::DesktopController;
use crate::i18n::{self, Language};
use crate::links::DesktopMedia;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Everything a frame needs to draw itself
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameView {
    pub id: WindowId,
    pub mount_id: Uuid,
    pub title: &'static str,
    pub icon: Glyph,
    pub is_active: bool,
    pub position: Point,
    pub menu_bar: [&'static str; 4],
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarButton {
    pub id: WindowId,
    pub title: &'static str,
    pub icon: Glyph,
    pub pressed: bool,
}

/// Read-only projection of the whole desktop, handed to the view after every change
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSnapshot {
    pub language: Language,
    pub labels: BTreeMap<&'static str, &'static str>,
    pub clock: String,
    pub desktop_icons: Vec<DesktopIcon>,
    pub frames: Vec<FrameView>,
    pub taskbar: Vec<TaskbarButton>,
    pub start_menu_open: bool,
    pub start_menu: StartMenu,
    pub media: DesktopMedia,
}

impl DesktopSnapshot {
    /// Project the controller through the frame host. Frames must be synced first.
    pub fn capture(
        desktop: &DesktopController,
        frames: &FrameHost,
        clock_format: &str,
        media: &DesktopMedia,
    ) -> Self {
        let language = desktop.language();

        let frames = desktop
            .screen_layer()
            .filter_map(|w| {
                let mount = frames.mount(w.id)?;
                Some(FrameView {
                    id: w.id,
                    mount_id: mount.mount_id,
                    title: desktop.title(w.id),
                    icon: w.icon,
                    is_active: desktop.is_active(w.id),
                    position: mount.position(),
                    menu_bar: MENU_BAR,
                })
            })
            .collect();

        let taskbar = desktop
            .taskbar()
            .map(|w| TaskbarButton {
                id: w.id,
                title: desktop.title(w.id),
                icon: w.icon,
                pressed: desktop.is_pressed(w.id),
            })
            .collect();

        Self {
            language,
            labels: i18n::labels(language),
            clock: desktop.clock_time().format(clock_format).to_string(),
            desktop_icons: desktop_icons(language),
            frames,
            taskbar,
            start_menu_open: desktop.is_start_menu_open(),
            start_menu: start_menu(language),
            media: media.clone(),
        }
    }
}
