//! Terminal panel types.

use serde::Deserialize;

/// Tabs of the bottom terminal panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalTab {
    /// Static status output.
    #[default]
    Terminal,
    /// Greeting card.
    Local,
}

impl TerminalTab {
    pub const ALL: [TerminalTab; 2] = [Self::Terminal, Self::Local];

    /// Label shown on the tab.
    pub fn title(self) -> &'static str {
        match self {
            Self::Terminal => "TERMINAL",
            Self::Local => "LOCAL",
        }
    }
}
