// Static desktop furniture: the icon column and the start menu

use super::window::{Glyph, WindowId};
use crate::i18n::{translate, Language, Phrase};
use serde::{Deserialize, Serialize};

/// Start menu entries. Only `Music` is wired to a window; the rest are
/// decorative, since the desktop has no real mail, documents or power control.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StartEntry {
    Email,
    Internet,
    Documents,
    Pictures,
    Music,
    ControlPanel,
    Run,
    LogOff,
    TurnOff,
}

impl StartEntry {
    pub fn target(self) -> Option<WindowId> {
        match self {
            StartEntry::Music => Some(WindowId::Music),
            _ => None,
        }
    }

    fn phrase(self) -> Phrase {
        match self {
            StartEntry::Email => Phrase::Email,
            StartEntry::Internet => Phrase::Internet,
            StartEntry::Documents => Phrase::Documents,
            StartEntry::Pictures => Phrase::Pictures,
            StartEntry::Music => Phrase::Music,
            StartEntry::ControlPanel => Phrase::ControlPanel,
            StartEntry::Run => Phrase::Run,
            StartEntry::LogOff => Phrase::LogOff,
            StartEntry::TurnOff => Phrase::TurnOff,
        }
    }

    fn glyph(self) -> Option<Glyph> {
        match self {
            StartEntry::Email => Some(Glyph::Mail),
            StartEntry::Internet | StartEntry::ControlPanel => Some(Glyph::Monitor),
            StartEntry::Documents => Some(Glyph::FileText),
            StartEntry::Pictures => Some(Glyph::Image),
            StartEntry::Music => Some(Glyph::Music),
            StartEntry::Run => Some(Glyph::Terminal),
            StartEntry::LogOff | StartEntry::TurnOff => None,
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartMenuItem {
    pub entry: StartEntry,
    pub label: &'static str,
    pub icon: Option<Glyph>,
    pub separator_before: bool,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartMenu {
    pub user: &'static str,
    pub left: Vec<StartMenuItem>,
    pub right: Vec<StartMenuItem>,
    pub footer: Vec<StartMenuItem>,
}

const LEFT: [StartEntry; 5] = [
    StartEntry::Email,
    StartEntry::Internet,
    StartEntry::Documents,
    StartEntry::Pictures,
    StartEntry::Music,
];
const RIGHT: [StartEntry; 2] = [StartEntry::ControlPanel, StartEntry::Run];
const FOOTER: [StartEntry; 2] = [StartEntry::LogOff, StartEntry::TurnOff];

pub fn start_menu(language: Language) -> StartMenu {
    let item = |entry: &StartEntry| StartMenuItem {
        entry: *entry,
        label: translate(language, entry.phrase()),
        icon: entry.glyph(),
        separator_before: *entry == StartEntry::Documents,
    };

    StartMenu {
        user: translate(language, Phrase::Guest),
        left: LEFT.iter().map(item).collect(),
        right: RIGHT.iter().map(item).collect(),
        footer: FOOTER.iter().map(item).collect(),
    }
}

/// One icon in the desktop column. Icons without a target (the terminal) do nothing.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesktopIcon {
    pub label: &'static str,
    pub icon: Glyph,
    pub target: Option<WindowId>,
}

pub fn desktop_icons(language: Language) -> Vec<DesktopIcon> {
    let window = |id: WindowId, phrase: Phrase| DesktopIcon {
        label: translate(language, phrase),
        icon: id.glyph(),
        target: Some(id),
    };

    vec![
        window(WindowId::About, Phrase::About),
        window(WindowId::Projects, Phrase::Projects),
        window(WindowId::Cv, Phrase::Cv),
        window(WindowId::Contact, Phrase::Contact),
        DesktopIcon {
            label: "Terminal",
            icon: Glyph::Terminal,
            target: None,
        },
        window(WindowId::Music, Phrase::Music),
    ]
}
