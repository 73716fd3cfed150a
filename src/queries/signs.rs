//! Sign lookups and the date-to-sign classifier.

use chrono::{Datelike, NaiveDate};

use crate::catalog::Catalog;
use crate::error::{AlmanacError, Result};
use crate::models::{Element, ZodiacInfo, ZodiacSign};

// ---------------------------------------------------------------------------
// SignQuery
// ---------------------------------------------------------------------------

/// Query interface over the static zodiac table.
pub struct SignQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> SignQuery<'a> {
    /// Create a new `SignQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Classify a birth date given as month and day.
    ///
    /// Feb 29 is accepted. Fails with [`AlmanacError::InvalidInput`] for a
    /// month outside 1..=12 or a day the month does not have.
    pub fn by_date(&self, month: u32, day: u32) -> Result<ZodiacSign> {
        // 2024 is a leap year, so every real birthday validates.
        if NaiveDate::from_ymd_opt(2024, month, day).is_none() {
            return Err(AlmanacError::InvalidInput(format!(
                "Not a calendar date: month {} day {}",
                month, day
            )));
        }

        let sign = self.catalog.classify(month, day).ok_or_else(|| {
            AlmanacError::InvalidData(format!(
                "No zodiac range covers month {} day {}",
                month, day
            ))
        })?;

        tracing::debug!(month, day, sign = %sign, "Classified birth date");
        Ok(sign)
    }

    /// Classify a full calendar date (the year is ignored).
    pub fn by_naive_date(&self, date: NaiveDate) -> Result<ZodiacSign> {
        self.by_date(date.month(), date.day())
    }

    /// Record for a sign.
    pub fn info(&self, sign: ZodiacSign) -> &'a ZodiacInfo {
        self.catalog.info(sign)
    }

    /// Look up a sign record by id, English name or display name.
    ///
    /// Fails with [`AlmanacError::NotFound`] when nothing matches.
    pub fn get(&self, key: &str) -> Result<&'a ZodiacInfo> {
        let wanted = key.trim();
        if let Ok(sign) = wanted.parse::<ZodiacSign>() {
            return Ok(self.catalog.info(sign));
        }

        self.catalog
            .signs()
            .iter()
            .find(|info| info.name == wanted || info.name_en.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AlmanacError::NotFound(format!("Zodiac sign '{}' not found", key)))
    }

    /// All twelve records in calendar order.
    pub fn all(&self) -> &'a [ZodiacInfo] {
        self.catalog.signs()
    }

    /// The three signs of an element, in calendar order.
    pub fn by_element(&self, element: Element) -> Vec<&'a ZodiacInfo> {
        self.catalog
            .signs()
            .iter()
            .filter(|info| info.element == element)
            .collect()
    }

    /// Records of the signs a sign lists as compatible.
    pub fn compatible_with(&self, sign: ZodiacSign) -> Vec<&'a ZodiacInfo> {
        self.info(sign)
            .compatible
            .iter()
            .map(|s| self.catalog.info(*s))
            .collect()
    }

    /// Records of the signs a sign lists as incompatible.
    pub fn incompatible_with(&self, sign: ZodiacSign) -> Vec<&'a ZodiacInfo> {
        self.info(sign)
            .incompatible
            .iter()
            .map(|s| self.catalog.info(*s))
            .collect()
    }
}
