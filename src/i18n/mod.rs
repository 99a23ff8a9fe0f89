// Localisation for the desktop chrome: window titles, icon labels and menu entries

mod tables;

use crate::error::DesktopError;
use crate::state::window::WindowId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The two locales the taskbar toggle switches between
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Pt,
}

impl Language {
    /// The locale the taskbar toggle switches to
    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl FromStr for Language {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            _ => Err(DesktopError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Every translatable string the shell hands to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    About,
    Projects,
    Contact,
    Cv,
    Start,
    Guest,
    LogOff,
    TurnOff,
    Email,
    Internet,
    Documents,
    Pictures,
    Music,
    ControlPanel,
    Run,
    Skills,
    Experience,
    Education,
    Languages,
    Summary,
    Send,
    Subject,
    To,
    Placeholder,
    AboutTitle,
    ProjectsTitle,
    ContactTitle,
    CvTitle,
    MusicTitle,
}

impl Phrase {
    pub const ALL: [Phrase; 29] = [
        Phrase::About,
        Phrase::Projects,
        Phrase::Contact,
        Phrase::Cv,
        Phrase::Start,
        Phrase::Guest,
        Phrase::LogOff,
        Phrase::TurnOff,
        Phrase::Email,
        Phrase::Internet,
        Phrase::Documents,
        Phrase::Pictures,
        Phrase::Music,
        Phrase::ControlPanel,
        Phrase::Run,
        Phrase::Skills,
        Phrase::Experience,
        Phrase::Education,
        Phrase::Languages,
        Phrase::Summary,
        Phrase::Send,
        Phrase::Subject,
        Phrase::To,
        Phrase::Placeholder,
        Phrase::AboutTitle,
        Phrase::ProjectsTitle,
        Phrase::ContactTitle,
        Phrase::CvTitle,
        Phrase::MusicTitle,
    ];

    /// Key the frontend looks labels up by
    pub fn key(self) -> &'static str {
        match self {
            Phrase::About => "about",
            Phrase::Projects => "projects",
            Phrase::Contact => "contact",
            Phrase::Cv => "cv",
            Phrase::Start => "start",
            Phrase::Guest => "guest",
            Phrase::LogOff => "logoff",
            Phrase::TurnOff => "turnoff",
            Phrase::Email => "email",
            Phrase::Internet => "internet",
            Phrase::Documents => "documents",
            Phrase::Pictures => "pictures",
            Phrase::Music => "music",
            Phrase::ControlPanel => "controlPanel",
            Phrase::Run => "run",
            Phrase::Skills => "skills",
            Phrase::Experience => "experience",
            Phrase::Education => "education",
            Phrase::Languages => "languages",
            Phrase::Summary => "summary",
            Phrase::Send => "send",
            Phrase::Subject => "subject",
            Phrase::To => "to",
            Phrase::Placeholder => "placeholder",
            Phrase::AboutTitle => "aboutTitle",
            Phrase::ProjectsTitle => "projectsTitle",
            Phrase::ContactTitle => "contactTitle",
            Phrase::CvTitle => "cvTitle",
            Phrase::MusicTitle => "musicTitle",
        }
    }
}

pub fn translate(language: Language, phrase: Phrase) -> &'static str {
    match language {
        Language::En => tables::en(phrase),
        Language::Pt => tables::pt(phrase),
    }
}

/// Title bar text for a window. Always derived, never stored.
pub fn window_title(language: Language, id: WindowId) -> &'static str {
    let phrase = match id {
        WindowId::About => Phrase::AboutTitle,
        WindowId::Projects => Phrase::ProjectsTitle,
        WindowId::Contact => Phrase::ContactTitle,
        WindowId::Cv => Phrase::CvTitle,
        WindowId::Music => Phrase::MusicTitle,
    };
    translate(language, phrase)
}

/// Full label table for one locale, keyed the way the frontend reads it
pub fn labels(language: Language) -> BTreeMap<&'static str, &'static str> {
    Phrase::ALL
        .iter()
        .map(|phrase| (phrase.key(), translate(language, *phrase)))
        .collect()
}
