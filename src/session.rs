//! Caller-side state for the daily fortune-stick draw.

use chrono::{DateTime, Local, NaiveDate};
use rand::Rng;

use crate::config;
use crate::error::{AlmanacError, Result};
use crate::models::DrawRecord;
use crate::queries::StickQuery;

/// Tracks the daily draw quota and the history of one viewing session.
///
/// The remaining count resets the first time a draw happens on a later day
/// than the one the session was last counting. History is kept for the
/// whole session, newest first.
#[derive(Debug, Clone)]
pub struct StickSession {
    quota: u32,
    remaining: u32,
    day: NaiveDate,
    history: Vec<DrawRecord>,
}

impl Default for StickSession {
    fn default() -> Self {
        Self::new(config::DAILY_DRAW_QUOTA)
    }
}

impl StickSession {
    /// Open a session for today with the given daily quota.
    pub fn new(quota: u32) -> Self {
        Self::opened_on(quota, Local::now().date_naive())
    }

    /// Open a session counting draws for `day`.
    pub fn opened_on(quota: u32, day: NaiveDate) -> Self {
        Self {
            quota,
            remaining: quota,
            day,
            history: Vec::new(),
        }
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    /// Draws left for the day being counted.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Day the remaining count applies to.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Every draw of the session, newest first.
    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    /// The most recent draw, if any.
    pub fn latest(&self) -> Option<&DrawRecord> {
        self.history.first()
    }

    /// Draw now with the thread-local random source.
    pub fn draw(&mut self, sticks: &StickQuery<'_>) -> Result<&DrawRecord> {
        self.draw_at(&mut rand::thread_rng(), sticks, Local::now())
    }

    /// Draw at the given instant using `rng`.
    ///
    /// Fails with [`AlmanacError::QuotaExhausted`] once the day's quota is
    /// spent; the history is left untouched in that case.
    pub fn draw_at<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        sticks: &StickQuery<'_>,
        now: DateTime<Local>,
    ) -> Result<&DrawRecord> {
        let today = now.date_naive();
        if today > self.day {
            tracing::debug!(from = %self.day, to = %today, "New day; draw quota reset");
            self.day = today;
            self.remaining = self.quota;
        }

        if self.remaining == 0 {
            tracing::warn!(quota = self.quota, "Draw refused; daily quota spent");
            return Err(AlmanacError::QuotaExhausted { quota: self.quota });
        }

        let stick = sticks.draw_with(rng)?.clone();
        self.remaining -= 1;
        self.history.insert(
            0,
            DrawRecord {
                stick,
                drawn_at: now,
            },
        );

        Ok(&self.history[0])
    }
}
