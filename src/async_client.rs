//! Async wrapper around [`Almanac`] for use in async runtimes (Tokio, etc.).
//!
//! Runs generation on the blocking thread pool via
//! [`tokio::task::spawn_blocking`] and applies the presentation reveal
//! delays with [`tokio::time::sleep`], so an interactive front end can show
//! its "reading the stars" pause without blocking the event loop.
//!
//! # Example
//!
//! ```no_run
//! use zodiac_almanac::{AsyncAlmanac, ZodiacSign};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let almanac = AsyncAlmanac::builder().build().await.unwrap();
//!
//!     let sign = almanac.reveal_sign(7, 23).await.unwrap();
//!     let result = almanac.reveal_match(sign, ZodiacSign::Aries).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;

use crate::config;
use crate::error::{AlmanacError, Result};
use crate::models::{CompatibilityResult, DrawRecord, Fortune, FortunePeriod, ZodiacSign};
use crate::session::StickSession;
use crate::wallpaper::WallpaperConfig;
use crate::Almanac;

// ---------------------------------------------------------------------------
// AsyncAlmanacBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncAlmanac`] instance.
pub struct AsyncAlmanacBuilder {
    data_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    daily_quota: u32,
    reveal_delays: bool,
}

impl Default for AsyncAlmanacBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            output_dir: None,
            daily_quota: config::DAILY_DRAW_QUOTA,
            reveal_delays: true,
        }
    }
}

impl AsyncAlmanacBuilder {
    /// Read reference data files from `path` before the embedded copies.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Directory wallpapers are saved into.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Stick draws allowed per day in sessions opened by this almanac.
    pub fn daily_quota(mut self, quota: u32) -> Self {
        self.daily_quota = quota;
        self
    }

    /// Enable or disable the reveal pauses. Defaults to `true`.
    pub fn reveal_delays(mut self, enabled: bool) -> Self {
        self.reveal_delays = enabled;
        self
    }

    /// Build the async almanac, loading the catalog on the blocking pool.
    pub async fn build(self) -> Result<AsyncAlmanac> {
        let reveal_delays = self.reveal_delays;
        let almanac = tokio::task::spawn_blocking(move || {
            let mut builder = Almanac::builder().daily_quota(self.daily_quota);
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            if let Some(dir) = self.output_dir {
                builder = builder.output_dir(dir);
            }
            builder.build()
        })
        .await
        .map_err(|e| AlmanacError::Task(format!("Task join error: {e}")))??;

        Ok(AsyncAlmanac {
            inner: Arc::new(almanac),
            reveal_delays,
        })
    }
}

// ---------------------------------------------------------------------------
// AsyncAlmanac
// ---------------------------------------------------------------------------

/// Async wrapper around [`Almanac`].
///
/// The catalog is immutable, so the wrapped almanac is shared through an
/// [`Arc`] without locking. Stick sessions stay with the caller.
pub struct AsyncAlmanac {
    inner: Arc<Almanac>,
    reveal_delays: bool,
}

impl AsyncAlmanac {
    /// Create a new builder for configuring the async almanac.
    pub fn builder() -> AsyncAlmanacBuilder {
        AsyncAlmanacBuilder::default()
    }

    /// Borrow the wrapped synchronous almanac.
    pub fn almanac(&self) -> &Almanac {
        &self.inner
    }

    /// Run a sync almanac operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Almanac) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let almanac = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&almanac))
            .await
            .map_err(|e| AlmanacError::Task(format!("Task join error: {e}")))?
    }

    async fn pause(&self, delay: Duration) {
        if self.reveal_delays {
            tokio::time::sleep(delay).await;
        }
    }

    /// Classify a birthday after the sign-lookup pause.
    ///
    /// Invalid dates fail straight away, without pausing.
    pub async fn reveal_sign(&self, month: u32, day: u32) -> Result<ZodiacSign> {
        let sign = self.inner.signs().by_date(month, day)?;
        self.pause(config::SIGN_REVEAL_DELAY).await;
        Ok(sign)
    }

    /// Generate a fortune for today's period label after the fortune pause.
    pub async fn reveal_fortune(&self, sign: ZodiacSign, period: FortunePeriod) -> Result<Fortune> {
        let today = Local::now().date_naive();
        let fortune = self
            .run(move |a| Ok(a.fortunes().generate_for(sign, period, today)))
            .await?;
        self.pause(config::FORTUNE_REVEAL_DELAY).await;
        Ok(fortune)
    }

    /// Score a pair after the compatibility pause.
    pub async fn reveal_match(
        &self,
        sign1: ZodiacSign,
        sign2: ZodiacSign,
    ) -> Result<CompatibilityResult> {
        let result = self
            .run(move |a| Ok(a.compatibility().score(sign1, sign2)))
            .await?;
        self.pause(config::MATCH_REVEAL_DELAY).await;
        Ok(result)
    }

    /// Draw a stick into `session` after the shaking pause.
    ///
    /// An exhausted quota is reported immediately.
    pub async fn reveal_stick(&self, session: &mut StickSession) -> Result<DrawRecord> {
        if session.remaining() == 0 && session.day() >= Local::now().date_naive() {
            return Err(AlmanacError::QuotaExhausted {
                quota: session.quota(),
            });
        }
        self.pause(config::STICK_REVEAL_DELAY).await;
        let record = session.draw(&self.inner.sticks())?;
        Ok(record.clone())
    }

    /// Render and save a wallpaper on the blocking pool.
    pub async fn save_wallpaper(&self, config: WallpaperConfig) -> Result<PathBuf> {
        self.run(move |a| a.save_wallpaper(&config)).await
    }

    /// Open a fresh draw session with the configured quota.
    pub fn session(&self) -> StickSession {
        self.inner.session()
    }
}
