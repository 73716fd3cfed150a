use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::zodiac::ZodiacSign;
use crate::error::AlmanacError;

// ---------------------------------------------------------------------------
// FortunePeriod
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortunePeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl FortunePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FortunePeriod::Daily => "daily",
            FortunePeriod::Weekly => "weekly",
            FortunePeriod::Monthly => "monthly",
        }
    }
}

impl fmt::Display for FortunePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FortunePeriod {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(FortunePeriod::Daily),
            "weekly" | "week" => Ok(FortunePeriod::Weekly),
            "monthly" | "month" => Ok(FortunePeriod::Monthly),
            _ => Err(AlmanacError::InvalidInput(format!("Unknown fortune period: '{}'", s))),
        }
    }
}

// ---------------------------------------------------------------------------
// FortuneCategory / ScoreTier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneCategory {
    Career,
    Wealth,
    Love,
    Health,
}

impl FortuneCategory {
    pub const ALL: [FortuneCategory; 4] = [
        FortuneCategory::Career,
        FortuneCategory::Wealth,
        FortuneCategory::Love,
        FortuneCategory::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FortuneCategory::Career => "career",
            FortuneCategory::Wealth => "wealth",
            FortuneCategory::Love => "love",
            FortuneCategory::Health => "health",
        }
    }
}

/// Text tier a score falls into; each tier has its own text pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn for_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => ScoreTier::Excellent,
            70..=84 => ScoreTier::Good,
            55..=69 => ScoreTier::Fair,
            _ => ScoreTier::Poor,
        }
    }
}

// ---------------------------------------------------------------------------
// Fortune
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReading {
    pub score: u8,
    pub description: String,
    pub humor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuckyCharm {
    pub number: u32,
    pub color: String,
    pub direction: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fortune {
    pub sign: ZodiacSign,
    #[serde(rename = "type")]
    pub period: FortunePeriod,
    pub date: String,
    pub career: CategoryReading,
    pub wealth: CategoryReading,
    pub love: CategoryReading,
    pub health: CategoryReading,
    pub lucky: LuckyCharm,
    pub advice: String,
}

impl Fortune {
    pub fn reading(&self, category: FortuneCategory) -> &CategoryReading {
        match category {
            FortuneCategory::Career => &self.career,
            FortuneCategory::Wealth => &self.wealth,
            FortuneCategory::Love => &self.love,
            FortuneCategory::Health => &self.health,
        }
    }

    /// Rounded mean of the four category scores.
    pub fn overall(&self) -> u8 {
        let sum: u32 = FortuneCategory::ALL
            .iter()
            .map(|c| self.reading(*c).score as u32)
            .sum();
        ((sum as f64) / 4.0).round() as u8
    }
}
