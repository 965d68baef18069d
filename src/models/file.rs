//! Editor file types: the closed set of bundled files and their tab labels.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::files;
use crate::core::error::EditorError;

/// One of the bundled portfolio files shown in the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileId {
    #[default]
    About,
    Skills,
    Projects,
    Contact,
}

impl FileId {
    /// All files in sidebar order.
    pub const ALL: [FileId; 4] = [Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// Stable identifier used in markup and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// File content with leading whitespace removed, so line 1 is the
    /// first visible line.
    pub fn source_text(self) -> &'static str {
        let raw = match self {
            Self::About => files::ABOUT,
            Self::Skills => files::SKILLS,
            Self::Projects => files::PROJECTS,
            Self::Contact => files::CONTACT,
        };
        clean_text(raw)
    }

    pub fn tab_label(self) -> TabLabel {
        TabLabel::lookup(self.as_str())
    }

    /// Prism language name for the code element's `language-*` class.
    pub fn language(self) -> &'static str {
        match self {
            Self::About | Self::Projects => "python",
            Self::Skills => "json",
            Self::Contact => "none",
        }
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileId {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EditorError::UnknownFile(s.to_string()))
    }
}

/// Strip leading whitespace from bundled content.
pub fn clean_text(text: &str) -> &str {
    text.trim_start()
}

/// Icon shown next to a file name in the sidebar and the tab bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileIcon {
    Python,
    Json,
    Hash,
}

/// Tab bar label for the active file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabLabel {
    pub name: &'static str,
    pub icon: Option<FileIcon>,
}

impl TabLabel {
    const fn new(name: &'static str, icon: FileIcon) -> Self {
        Self {
            name,
            icon: Some(icon),
        }
    }

    /// Look up a label by raw identifier.
    ///
    /// Unknown identifiers yield an empty name and no icon.
    pub fn lookup(id: &str) -> Self {
        match id {
            "about" => Self::new("about_me.py", FileIcon::Python),
            "skills" => Self::new("skills.json", FileIcon::Json),
            "projects" => Self::new("projects.py", FileIcon::Python),
            "contact" => Self::new("contact.txt", FileIcon::Hash),
            _ => Self::default(),
        }
    }
}
