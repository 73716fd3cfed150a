//! Plain-text share summaries and the share-or-copy fallback.
//!
//! The platform share capability and the clipboard are external
//! collaborators, modelled as the [`ShareTarget`] and [`Clipboard`] traits.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CompatibilityResult, Fortune, FortuneStick, ZodiacInfo};

// ---------------------------------------------------------------------------
// ShareMessage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
    /// Page link appended when the message falls back to the clipboard.
    pub url: Option<String>,
}

impl ShareMessage {
    /// Text placed on the clipboard when native sharing is unavailable.
    pub fn clipboard_text(&self) -> String {
        match &self.url {
            Some(url) => format!("{} {}", self.text, url),
            None => self.text.clone(),
        }
    }
}

pub fn fortune_message(info: &ZodiacInfo, fortune: &Fortune, url: Option<&str>) -> ShareMessage {
    ShareMessage {
        title: format!("My {} fortune", info.name_en),
        text: format!(
            "{} {} fortune ({}): overall score {}!",
            info.symbol,
            info.name_en,
            fortune.period,
            fortune.overall()
        ),
        url: url.map(str::to_string),
    }
}

pub fn compatibility_message(
    first: &ZodiacInfo,
    second: &ZodiacInfo,
    result: &CompatibilityResult,
    url: Option<&str>,
) -> ShareMessage {
    ShareMessage {
        title: "Zodiac match result".to_string(),
        text: format!(
            "{} & {} compatibility: {} points!",
            first.name_en, second.name_en, result.overall
        ),
        url: url.map(str::to_string),
    }
}

/// Stick messages never carry the page link.
pub fn stick_message(stick: &FortuneStick) -> ShareMessage {
    ShareMessage {
        title: "My fortune stick of the day".to_string(),
        text: format!(
            "Today's fortune stick: {}\n{}\n{}",
            stick.title, stick.content, stick.blessing
        ),
        url: None,
    }
}

// ---------------------------------------------------------------------------
// Share / clipboard seam
// ---------------------------------------------------------------------------

/// A native share sheet or similar platform capability.
pub trait ShareTarget {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, message: &ShareMessage) -> Result<()>;
}

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareOutcome {
    /// Handed to the native share target.
    Shared,
    /// Copied to the clipboard; the caller should notify the user.
    Copied,
}

/// Share natively when possible, otherwise copy to the clipboard.
///
/// A native target that is absent, reports itself unavailable, or fails
/// while sharing falls through to the clipboard.
pub fn share_or_copy(
    native: Option<&dyn ShareTarget>,
    clipboard: &dyn Clipboard,
    message: &ShareMessage,
) -> Result<ShareOutcome> {
    if let Some(target) = native.filter(|t| t.is_available()) {
        match target.share(message) {
            Ok(()) => return Ok(ShareOutcome::Shared),
            Err(e) => {
                tracing::warn!(error = %e, "Native share failed; copying to clipboard instead");
            }
        }
    }

    clipboard.copy(&message.clipboard_text())?;
    Ok(ShareOutcome::Copied)
}
