//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets and site settings are loaded at compile time using
//! `include_str!`.

use serde::Deserialize;

use crate::core::ConfigError;
use crate::models::{FileId, TerminalTab};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Bundled editor file contents.
pub mod files {
    pub const ABOUT: &str = include_str!("../assets/files/about_me.py");
    pub const SKILLS: &str = include_str!("../assets/files/skills.json");
    pub const PROJECTS: &str = include_str!("../assets/files/projects.py");
    pub const CONTACT: &str = include_str!("../assets/files/contact.txt");
}

/// Raw site settings.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Workspace folder name shown at the top of the sidebar.
pub const APP_NAME: &str = "yoav-eliav-portfolio";

/// Default delay between typed characters in milliseconds.
pub const TYPING_SPEED_MS: u32 = 20;

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query below which the sidebar collapses into a top strip.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Terminal panel size limits in pixels.
pub mod layout {
    /// Smallest height the terminal panel can be dragged to.
    pub const MIN_TERMINAL_HEIGHT: f64 = 80.0;
    /// Space always left for the editor above the terminal.
    pub const MIN_EDITOR_HEIGHT: f64 = 140.0;
}

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Site Settings
// =============================================================================

/// Settings read from `assets/site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub editor: EditorConfig,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Delay between typed characters in milliseconds.
    pub typing_speed_ms: u32,
    /// File typed out on first load.
    pub intro_file: FileId,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: TYPING_SPEED_MS,
            intro_file: FileId::About,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Tab selected on load.
    pub default_tab: TerminalTab,
    /// Lines printed in the `terminal` tab.
    pub status: Vec<String>,
    /// Greeting card in the `local` tab.
    pub local: LocalMessage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalMessage {
    pub title: String,
    pub subtitle: String,
}

impl Default for LocalMessage {
    fn default() -> Self {
        Self {
            title: "HELLO".to_string(),
            subtitle: "Thanks for exploring the site :)".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse settings from TOML. Missing keys fall back to defaults.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load the bundled settings.
    ///
    /// A malformed file is logged to the console and replaced by defaults.
    pub fn load() -> Self {
        Self::parse(SITE_TOML).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("{}; using defaults", e).into());
            Self::default()
        })
    }
}
