//! Fortune generation from the fortune text pools.

use chrono::{Datelike, Days, Local, NaiveDate};
use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{
    CategoryReading, Fortune, FortuneCategory, FortunePeriod, LuckyCharm, ScoreTier, ZodiacSign,
};
use crate::oracle;

// ---------------------------------------------------------------------------
// FortuneQuery
// ---------------------------------------------------------------------------

/// Generates fresh [`Fortune`] records.
///
/// Nothing here is deterministic: calling again is a re-roll. Pass a seeded
/// generator to [`generate_with`](Self::generate_with) for repeatable output.
pub struct FortuneQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> FortuneQuery<'a> {
    /// Create a new `FortuneQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Today's daily fortune for a sign.
    pub fn generate(&self, sign: ZodiacSign) -> Fortune {
        self.generate_for(sign, FortunePeriod::Daily, Local::now().date_naive())
    }

    /// A fortune for the given period, labelled relative to `date`.
    pub fn generate_for(
        &self,
        sign: ZodiacSign,
        period: FortunePeriod,
        date: NaiveDate,
    ) -> Fortune {
        self.generate_with(&mut rand::thread_rng(), sign, period, date)
    }

    /// Generate a fortune drawing all randomness from `rng`.
    ///
    /// Category scores are rolled independently from the weighted score
    /// bands; each category then picks a description and a humor line from
    /// the pool of the tier its score falls in.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sign: ZodiacSign,
        period: FortunePeriod,
        date: NaiveDate,
    ) -> Fortune {
        let career = self.reading(rng, FortuneCategory::Career);
        let wealth = self.reading(rng, FortuneCategory::Wealth);
        let love = self.reading(rng, FortuneCategory::Love);
        let health = self.reading(rng, FortuneCategory::Health);
        let lucky = self.lucky_charm(rng, sign);
        let advice = pick_text(rng, &self.catalog.texts().fortune.advice);

        let fortune = Fortune {
            sign,
            period,
            date: period_label(period, date),
            career,
            wealth,
            love,
            health,
            lucky,
            advice,
        };

        tracing::debug!(
            sign = %sign,
            period = %period,
            overall = fortune.overall(),
            "Generated fortune"
        );
        fortune
    }

    fn reading<R: Rng + ?Sized>(&self, rng: &mut R, category: FortuneCategory) -> CategoryReading {
        let texts = &self.catalog.texts().fortune;
        let score = oracle::roll_score(rng, &texts.bands);
        let tier = ScoreTier::for_score(score);

        let (description, humor) = match texts.tier(category, tier) {
            Some(pool) => (pick_text(rng, &pool.descriptions), pick_text(rng, &pool.humor)),
            None => (String::new(), String::new()),
        };

        CategoryReading {
            score,
            description,
            humor,
        }
    }

    /// Lucky attributes; the color pool includes the sign's own lucky colors.
    fn lucky_charm<R: Rng + ?Sized>(&self, rng: &mut R, sign: ZodiacSign) -> LuckyCharm {
        let texts = &self.catalog.texts().fortune;

        let mut colors = texts.colors.clone();
        colors.extend(self.catalog.info(sign).lucky.colors.iter().cloned());

        LuckyCharm {
            number: rng.gen_range(1..=99),
            color: pick_text(rng, &colors),
            direction: pick_text(rng, &texts.directions),
            item: pick_text(rng, &texts.items),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Label a fortune period relative to `date`.
///
/// - daily: `2026-10-19`
/// - weekly: the ISO week containing `date`, `2026-10-19 ~ 2026-10-25`
/// - monthly: `2026-10`
pub fn period_label(period: FortunePeriod, date: NaiveDate) -> String {
    match period {
        FortunePeriod::Daily => date.format("%Y-%m-%d").to_string(),
        FortunePeriod::Weekly => {
            let offset = date.weekday().num_days_from_monday() as u64;
            let monday = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
            let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
            format!("{} ~ {}", monday.format("%Y-%m-%d"), sunday.format("%Y-%m-%d"))
        }
        FortunePeriod::Monthly => date.format("%Y-%m").to_string(),
    }
}

fn pick_text<R: Rng + ?Sized>(rng: &mut R, pool: &[String]) -> String {
    oracle::pick(rng, pool).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_label_spans_monday_to_sunday() {
        // 2026-10-21 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        assert_eq!(
            period_label(FortunePeriod::Weekly, date),
            "2026-10-19 ~ 2026-10-25"
        );
    }

    #[test]
    fn weekly_label_crosses_year_end() {
        // 2026-01-01 is a Thursday
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(
            period_label(FortunePeriod::Weekly, date),
            "2025-12-29 ~ 2026-01-04"
        );
    }

    #[test]
    fn daily_and_monthly_labels() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(period_label(FortunePeriod::Daily, date), "2024-02-29");
        assert_eq!(period_label(FortunePeriod::Monthly, date), "2024-02");
    }
}
