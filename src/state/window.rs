use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one desktop application. The set is closed and fixed at startup.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum WindowId {
    About,
    Projects,
    Contact,
    Cv,
    Music,
}

impl WindowId {
    /// Collection order. Rendering and the taskbar both follow it.
    pub const ALL: [WindowId; 5] = [
        WindowId::About,
        WindowId::Projects,
        WindowId::Contact,
        WindowId::Cv,
        WindowId::Music,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WindowId::About => "about",
            WindowId::Projects => "projects",
            WindowId::Contact => "contact",
            WindowId::Cv => "cv",
            WindowId::Music => "music",
        }
    }

    /// Parse from the id string the view sends
    pub fn from_str(s: &str) -> Option<Self> {
        WindowId::ALL.into_iter().find(|id| id.as_str() == s)
    }

    pub fn glyph(self) -> Glyph {
        match self {
            WindowId::About => Glyph::User,
            WindowId::Projects => Glyph::FolderCode,
            WindowId::Contact => Glyph::Mail,
            WindowId::Cv => Glyph::FileText,
            WindowId::Music => Glyph::Music,
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic icon reference. The view maps these onto its icon set.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    User,
    FolderCode,
    Mail,
    FileText,
    Music,
    Terminal,
    Monitor,
    Image,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppWindow {
    pub id: WindowId,
    pub icon: Glyph,
    pub is_open: bool,      // Listed in the taskbar
    pub is_minimized: bool, // Hidden from screen, still in the taskbar
}

impl AppWindow {
    pub fn new(id: WindowId, is_open: bool) -> Self {
        Self {
            id,
            icon: id.glyph(),
            is_open,
            is_minimized: false,
        }
    }

    pub fn is_screen_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    pub fn is_taskbar_visible(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_id_parsing() {
        assert_eq!(WindowId::from_str("cv"), Some(WindowId::Cv));
        assert_eq!(WindowId::from_str("music"), Some(WindowId::Music));
        assert_eq!(WindowId::from_str("terminal"), None);
        assert_eq!(WindowId::from_str("About"), None);
    }

    #[test]
    fn test_minimized_flag_has_no_effect_when_closed() {
        let mut window = AppWindow::new(WindowId::Projects, false);
        window.is_minimized = true;
        assert!(!window.is_screen_visible());
        window.is_minimized = false;
        assert!(!window.is_screen_visible());
        assert!(!window.is_taskbar_visible());
    }

    #[test]
    fn test_minimized_window_stays_in_taskbar() {
        let mut window = AppWindow::new(WindowId::Music, true);
        window.is_minimized = true;
        assert!(!window.is_screen_visible());
        assert!(window.is_taskbar_visible());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(AppWindow::new(WindowId::Projects, true)).unwrap();
        assert_eq!(json["id"], "projects");
        assert_eq!(json["icon"], "folder-code");
        assert_eq!(json["isOpen"], true);
        assert_eq!(json["isMinimized"], false);
    }
}
