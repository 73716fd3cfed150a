use serde::{Deserialize, Serialize};
use std::fmt;

use super::zodiac::{Element, ZodiacSign};

// ---------------------------------------------------------------------------
// Relation — Elemental relationship between two signs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Both signs share an element.
    Same,
    /// Fire with air, earth with water.
    Complementary,
    /// Fire with earth, air with water.
    Neutral,
    /// Fire with water, earth with air.
    Opposing,
}

impl Relation {
    pub fn between(a: Element, b: Element) -> Self {
        if a == b {
            Relation::Same
        } else if a.complement() == b {
            Relation::Complementary
        } else if a.opposite() == b {
            Relation::Opposing
        } else {
            Relation::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Same => "same",
            Relation::Complementary => "complementary",
            Relation::Neutral => "neutral",
            Relation::Opposing => "opposing",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompatibilityResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub sign1: ZodiacSign,
    pub sign2: ZodiacSign,
    pub relation: Relation,
    pub overall: u8,
    pub love: u8,
    pub friendship: u8,
    pub career: u8,
    pub bonds: Vec<String>,
    pub conflicts: Vec<String>,
    pub advice: Vec<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_covers_every_element_pair() {
        assert_eq!(Relation::between(Element::Fire, Element::Fire), Relation::Same);
        assert_eq!(Relation::between(Element::Fire, Element::Air), Relation::Complementary);
        assert_eq!(Relation::between(Element::Water, Element::Earth), Relation::Complementary);
        assert_eq!(Relation::between(Element::Fire, Element::Water), Relation::Opposing);
        assert_eq!(Relation::between(Element::Air, Element::Earth), Relation::Opposing);
        assert_eq!(Relation::between(Element::Fire, Element::Earth), Relation::Neutral);
        assert_eq!(Relation::between(Element::Water, Element::Air), Relation::Neutral);
    }

    #[test]
    fn relation_is_symmetric() {
        for a in Element::ALL {
            for b in Element::ALL {
                assert_eq!(Relation::between(a, b), Relation::between(b, a));
            }
        }
    }
}
