use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::compatibility::Relation;
use super::fortune::{FortuneCategory, ScoreTier};

// ---------------------------------------------------------------------------
// TextPools — Pre-authored fragments the generators choose from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPools {
    pub fortune: FortuneTexts,
    pub compatibility: CompatibilityTexts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortuneTexts {
    /// Weighted score bands; a band is picked by weight, then a score inside it.
    pub bands: Vec<ScoreBand>,
    pub categories: HashMap<FortuneCategory, HashMap<ScoreTier, TierTexts>>,
    pub colors: Vec<String>,
    pub directions: Vec<String>,
    pub items: Vec<String>,
    pub advice: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub min: u8,
    pub max: u8,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierTexts {
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub humor: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityTexts {
    pub bonds: HashMap<Relation, Vec<String>>,
    pub conflicts: HashMap<Relation, Vec<String>>,
    pub advice: HashMap<Relation, Vec<String>>,
    /// Extra bond for pairs that list each other as compatible.
    pub destined_bond: String,
    /// Extra bond for a sign paired with itself.
    pub mirror_bond: String,
    pub descriptions: HashMap<ScoreTier, String>,
}

impl CompatibilityTexts {
    pub fn bonds_for(&self, relation: Relation) -> &[String] {
        self.bonds.get(&relation).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn conflicts_for(&self, relation: Relation) -> &[String] {
        self.conflicts.get(&relation).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn advice_for(&self, relation: Relation) -> &[String] {
        self.advice.get(&relation).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FortuneTexts {
    pub fn tier(&self, category: FortuneCategory, tier: ScoreTier) -> Option<&TierTexts> {
        self.categories.get(&category).and_then(|tiers| tiers.get(&tier))
    }
}
