use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AlmanacError;

// ---------------------------------------------------------------------------
// ZodiacSign
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All twelve signs in calendar order, starting from aries.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    /// Position in [`ZodiacSign::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacSign {
    type Err = AlmanacError;

    /// Parses a lower- or mixed-case sign id (`"aries"`, `"Leo"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.as_str() == wanted)
            .ok_or_else(|| AlmanacError::InvalidInput(format!("Unknown zodiac sign: '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }

    /// The element traditionally paired with this one (fire/air, earth/water).
    pub fn complement(&self) -> Element {
        match self {
            Element::Fire => Element::Air,
            Element::Air => Element::Fire,
            Element::Earth => Element::Water,
            Element::Water => Element::Earth,
        }
    }

    /// The element traditionally at odds with this one (fire/water, earth/air).
    pub fn opposite(&self) -> Element {
        match self {
            Element::Fire => Element::Water,
            Element::Water => Element::Fire,
            Element::Earth => Element::Air,
            Element::Air => Element::Earth,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| AlmanacError::InvalidInput(format!("Unknown element: '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// ZodiacInfo — Static reference record for one sign
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacInfo {
    pub id: ZodiacSign,
    pub name: String,
    pub name_en: String,
    pub symbol: String,
    pub date_range: String,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
    pub element: Element,
    pub ruling_planet: String,
    #[serde(default)]
    pub qualities: Vec<String>,
    #[serde(default)]
    pub positive_traits: Vec<String>,
    #[serde(default)]
    pub negative_traits: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub compatible: Vec<ZodiacSign>,
    #[serde(default)]
    pub incompatible: Vec<ZodiacSign>,
    #[serde(default)]
    pub lucky: LuckyTraits,
}

impl ZodiacInfo {
    /// Whether `(month, day)` falls inside this sign's inclusive range.
    ///
    /// Ranges whose start month is later than their end month wrap the year
    /// boundary and match either tail. No calendar validation happens here.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let date = (month, day);
        let start = (self.start_month, self.start_day);
        let end = (self.end_month, self.end_day);

        if self.wraps_year() {
            date >= start || date <= end
        } else {
            date >= start && date <= end
        }
    }

    pub fn wraps_year(&self) -> bool {
        (self.start_month, self.start_day) > (self.end_month, self.end_day)
    }

    pub fn is_compatible_with(&self, other: ZodiacSign) -> bool {
        self.compatible.contains(&other)
    }

    pub fn is_incompatible_with(&self, other: ZodiacSign) -> bool {
        self.incompatible.contains(&other)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub food: Vec<String>,
    #[serde(default)]
    pub fashion: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LuckyTraits {
    #[serde(default)]
    pub numbers: Vec<u32>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub days: Vec<String>,
}
