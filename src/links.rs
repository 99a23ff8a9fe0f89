// Outbound links reachable from window content. The set is fixed; the view
// names a link by id and never passes a raw URL.

use serde::{Deserialize, Serialize};

/// Desktop wallpaper, loaded by the view as a plain static resource
pub const WALLPAPER_URL: &str = "https://picsum.photos/seed/xp-bliss/1920/1080";

/// Hidden autoplaying ambience track embedded behind the desktop
pub const AMBIENCE_EMBED_URL: &str = "https://www.youtube.com/embed/7nQ2oiVqKHw?autoplay=1&mute=0";

/// Static media the view embeds. `ambience` is `None` when disabled in config.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopMedia {
    pub wallpaper: &'static str,
    pub ambience: Option<&'static str>,
}

impl DesktopMedia {
    pub fn new(ambience: bool) -> Self {
        Self {
            wallpaper: WALLPAPER_URL,
            ambience: ambience.then_some(AMBIENCE_EMBED_URL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkId {
    Github,
    Linkedin,
    PasswordGenerator,
    FileOrganizer,
    ColdNight,
    BikeRide,
}

impl LinkId {
    pub const ALL: [LinkId; 6] = [
        LinkId::Github,
        LinkId::Linkedin,
        LinkId::PasswordGenerator,
        LinkId::FileOrganizer,
        LinkId::ColdNight,
        LinkId::BikeRide,
    ];

    pub fn url(self) -> &'static str {
        match self {
            LinkId::Github => "https://github.com/cloudhadock-coder",
            LinkId::Linkedin => "https://www.linkedin.com/in/leonardo-hernandez-briones-9b1aa7300/",
            LinkId::PasswordGenerator => "https://github.com/cloudhadock-coder/Password",
            LinkId::FileOrganizer => "https://github.com/cloudhadock-coder/organizer",
            LinkId::ColdNight => {
                "https://www.mureka.ai/song-detail/UZ9NXuXo37f8JjqqHbmQNu?is_from_share=1"
            }
            LinkId::BikeRide => {
                "https://www.mureka.ai/song-detail/SfMkv6bMetQ9NSnQAdsLk3?is_from_share=1"
            }
        }
    }
}
