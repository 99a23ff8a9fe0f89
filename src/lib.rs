// Retro desktop portfolio: the desktop state core, and (with the `shell`
// feature) the Tauri host that serves it to the web view.

// Clock ticker for the taskbar
pub mod clock;

// Startup configuration
pub mod config;

// Controller + frames aggregate used by the shell commands
pub mod desktop;

pub mod error;

// Localisation tables
pub mod i18n;

// Fixed outbound link table
pub mod links;

// Desktop state management
pub mod state;

// Tauri host
#[cfg(feature = "shell")]
mod shell;

#[cfg(feature = "shell")]
pub use shell::run;

pub use config::DesktopConfig;
pub use desktop::Desktop;
pub use error::DesktopError;
