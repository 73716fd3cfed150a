use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FortuneStick — Pre-authored pool entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickKind {
    Luck,
    Warning,
    Love,
    Wealth,
    Career,
}

impl StickKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StickKind::Luck => "luck",
            StickKind::Warning => "warning",
            StickKind::Love => "love",
            StickKind::Wealth => "wealth",
            StickKind::Career => "career",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StickKind::Luck => "🍀",
            StickKind::Warning => "⚠️",
            StickKind::Love => "💕",
            StickKind::Wealth => "💰",
            StickKind::Career => "💼",
        }
    }
}

impl fmt::Display for StickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneStick {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StickKind,
    pub title: String,
    pub content: String,
    pub humor: String,
    pub advice: String,
    pub blessing: String,
}

// ---------------------------------------------------------------------------
// DrawRecord — One draw retained in a session's history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub stick: FortuneStick,
    pub drawn_at: DateTime<Local>,
}

impl DrawRecord {
    /// `HH:MM` of the draw, as shown next to history entries.
    pub fn time_label(&self) -> String {
        self.drawn_at.format("%H:%M").to_string()
    }
}
