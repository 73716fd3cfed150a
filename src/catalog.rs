//! Reference data loader.
//!
//! Loads the zodiac table, the fortune-stick pool and the text pools from
//! JSON. Documents are embedded in the crate; a data directory may override
//! any of them file by file. Everything is validated once at load time and
//! then held read-only for the lifetime of the [`Catalog`].

use crate::config;
use crate::error::{AlmanacError, Result};
use crate::models::{
    FortuneCategory, FortuneStick, Relation, ScoreTier, TextPools, ZodiacInfo, ZodiacSign,
};
use crate::queries::compatibility;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only reference tables shared by every query interface.
pub struct Catalog {
    /// Directory consulted before the embedded documents, if any.
    pub data_dir: Option<PathBuf>,
    /// Indexed by [`ZodiacSign::index`].
    signs: Vec<ZodiacInfo>,
    sticks: Vec<FortuneStick>,
    texts: TextPools,
}

impl Catalog {
    /// Load the embedded reference data.
    pub fn embedded() -> Result<Self> {
        Self::load(None)
    }

    /// Load reference data, preferring files found in `data_dir`.
    ///
    /// Files missing from the directory fall back to the embedded copy.
    /// Fails with [`AlmanacError::InvalidData`] if any table breaks its
    /// invariants (see [`Catalog::validate`]).
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir.as_deref();

        let mut signs: Vec<ZodiacInfo> = serde_json::from_str(&read_document(dir, "zodiac")?)?;
        let sticks: Vec<FortuneStick> = serde_json::from_str(&read_document(dir, "sticks")?)?;
        let texts: TextPools = serde_json::from_str(&read_document(dir, "texts")?)?;

        signs.sort_by_key(|info| info.id);

        let catalog = Self {
            data_dir,
            signs,
            sticks,
            texts,
        };
        catalog.validate()?;

        tracing::info!(
            signs = catalog.signs.len(),
            sticks = catalog.sticks.len(),
            "Reference catalog loaded"
        );
        Ok(catalog)
    }

    /// Static record for a sign.
    pub fn info(&self, sign: ZodiacSign) -> &ZodiacInfo {
        &self.signs[sign.index()]
    }

    /// All sign records in calendar order.
    pub fn signs(&self) -> &[ZodiacInfo] {
        &self.signs
    }

    pub fn sticks(&self) -> &[FortuneStick] {
        &self.sticks
    }

    pub fn texts(&self) -> &TextPools {
        &self.texts
    }

    /// Linear scan of the date ranges; first matching sign wins.
    ///
    /// Performs no calendar validation; callers wanting fail-fast behaviour
    /// use [`SignQuery::by_date`](crate::queries::SignQuery::by_date).
    pub fn classify(&self, month: u32, day: u32) -> Option<ZodiacSign> {
        self.signs
            .iter()
            .find(|info| info.contains(month, day))
            .map(|info| info.id)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check every table invariant the generators rely on.
    pub fn validate(&self) -> Result<()> {
        self.validate_signs()?;
        self.validate_partition()?;
        self.validate_sticks()?;
        self.validate_texts()
    }

    fn validate_signs(&self) -> Result<()> {
        if self.signs.len() != ZodiacSign::ALL.len() {
            return Err(AlmanacError::InvalidData(format!(
                "Expected {} zodiac records, found {}",
                ZodiacSign::ALL.len(),
                self.signs.len()
            )));
        }

        for (expected, info) in ZodiacSign::ALL.iter().zip(&self.signs) {
            if info.id != *expected {
                return Err(AlmanacError::InvalidData(format!(
                    "Missing or duplicated zodiac record for '{}'",
                    expected
                )));
            }
            if info.incompatible.contains(&info.id) {
                return Err(AlmanacError::InvalidData(format!(
                    "'{}' lists itself as incompatible",
                    info.id
                )));
            }
            if NaiveDate::from_ymd_opt(2024, info.start_month, info.start_day).is_none()
                || NaiveDate::from_ymd_opt(2024, info.end_month, info.end_day).is_none()
            {
                return Err(AlmanacError::InvalidData(format!(
                    "'{}' has an impossible range boundary",
                    info.id
                )));
            }
        }
        Ok(())
    }

    /// Every day of a leap year must fall in exactly one range.
    fn validate_partition(&self) -> Result<()> {
        let Some(first) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
            return Ok(());
        };

        for date in first.iter_days().take_while(|d| d.year() == 2024) {
            let matches: Vec<ZodiacSign> = self
                .signs
                .iter()
                .filter(|info| info.contains(date.month(), date.day()))
                .map(|info| info.id)
                .collect();

            if matches.len() != 1 {
                return Err(AlmanacError::InvalidData(format!(
                    "Date {:02}-{:02} matches {} signs ({:?}); ranges must partition the year",
                    date.month(),
                    date.day(),
                    matches.len(),
                    matches
                )));
            }
        }
        Ok(())
    }

    fn validate_sticks(&self) -> Result<()> {
        if self.sticks.is_empty() {
            return Err(AlmanacError::InvalidData("Fortune-stick pool is empty".into()));
        }

        let mut seen = HashSet::new();
        for stick in &self.sticks {
            if !seen.insert(stick.id.as_str()) {
                return Err(AlmanacError::InvalidData(format!(
                    "Duplicate fortune-stick id '{}'",
                    stick.id
                )));
            }
        }
        Ok(())
    }

    fn validate_texts(&self) -> Result<()> {
        let fortune = &self.texts.fortune;

        if fortune.bands.is_empty() || fortune.bands.iter().all(|b| b.weight == 0) {
            return Err(AlmanacError::InvalidData("No weighted score bands".into()));
        }
        if let Some(band) = fortune.bands.iter().find(|b| b.min > b.max || b.max > 100) {
            return Err(AlmanacError::InvalidData(format!(
                "Score band {}..={} is outside 0..=100",
                band.min, band.max
            )));
        }

        for category in FortuneCategory::ALL {
            for tier in [ScoreTier::Excellent, ScoreTier::Good, ScoreTier::Fair, ScoreTier::Poor] {
                let ok = fortune
                    .tier(category, tier)
                    .map(|t| !t.descriptions.is_empty() && !t.humor.is_empty())
                    .unwrap_or(false);
                if !ok {
                    return Err(AlmanacError::InvalidData(format!(
                        "Missing {:?} texts for {}",
                        tier,
                        category.as_str()
                    )));
                }
            }
        }

        for (name, pool) in [
            ("colors", &fortune.colors),
            ("directions", &fortune.directions),
            ("items", &fortune.items),
            ("advice", &fortune.advice),
        ] {
            if pool.is_empty() {
                return Err(AlmanacError::InvalidData(format!("Empty fortune {} pool", name)));
            }
        }

        let compat = &self.texts.compatibility;
        for tier in [ScoreTier::Excellent, ScoreTier::Good, ScoreTier::Fair, ScoreTier::Poor] {
            if compat.descriptions.get(&tier).filter(|d| !d.is_empty()).is_none() {
                return Err(AlmanacError::InvalidData(format!(
                    "Missing {:?} compatibility description",
                    tier
                )));
            }
        }
        for relation in [
            Relation::Same,
            Relation::Complementary,
            Relation::Neutral,
            Relation::Opposing,
        ] {
            for (name, pool, needed) in [
                ("bonds", compat.bonds_for(relation), compatibility::BOND_COUNT),
                (
                    "conflicts",
                    compat.conflicts_for(relation),
                    compatibility::LISTED_CONFLICT_COUNT,
                ),
                ("advice", compat.advice_for(relation), compatibility::ADVICE_COUNT),
            ] {
                if pool.len() < needed {
                    return Err(AlmanacError::InvalidData(format!(
                        "Compatibility {} for relation '{}' has {} entries, needs {}",
                        name,
                        relation,
                        pool.len(),
                        needed
                    )));
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read a named document from `dir` if present, else the embedded copy.
fn read_document(dir: Option<&Path>, name: &str) -> Result<String> {
    let files = config::data_files();
    let filename = files
        .get(name)
        .ok_or_else(|| AlmanacError::NotFound(format!("Unknown data document: {}", name)))?;

    if let Some(dir) = dir {
        let path = dir.join(filename);
        if path.exists() {
            tracing::debug!(path = %path.display(), "Loading reference data override");
            return Ok(fs::read_to_string(&path)?);
        }
        tracing::debug!(
            path = %path.display(),
            "No override found; using embedded reference data"
        );
    }

    config::embedded_data(name)
        .map(str::to_string)
        .ok_or_else(|| AlmanacError::NotFound(format!("No embedded data for: {}", name)))
}
