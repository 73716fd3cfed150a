//! Zodiac almanac for Rust.
//!
//! Classifies birth dates into Western zodiac signs and serves the
//! playful features built on top of them: randomized fortunes, pairwise
//! compatibility scores, a daily-limited fortune-stick draw, and themed
//! wallpaper rendering. Reference data ships embedded in the crate and is
//! validated once when the [`Almanac`] is built.
//!
//! # Quick start
//!
//! ```no_run
//! use zodiac_almanac::{Almanac, ZodiacSign};
//!
//! let almanac = Almanac::builder().build().unwrap();
//!
//! // Classify a birthday
//! let sign = almanac.signs().by_date(3, 21).unwrap();
//! assert_eq!(sign, ZodiacSign::Aries);
//!
//! // Today's fortune and a match score
//! let fortune = almanac.fortunes().generate(sign);
//! let result = almanac.compatibility().score(sign, ZodiacSign::Leo);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod oracle;
pub mod queries;
pub mod session;
pub mod share;
pub mod wallpaper;

#[cfg(feature = "async")]
pub use async_client::AsyncAlmanac;
pub use catalog::Catalog;
pub use error::{AlmanacError, Result};
pub use models::{
    CompatibilityResult, Element, Fortune, FortuneCategory, FortunePeriod, FortuneStick,
    Relation, StickKind, ZodiacInfo, ZodiacSign,
};
pub use session::StickSession;
pub use wallpaper::{Resolution, Theme, WallpaperConfig, WallpaperPlan};

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// AlmanacBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`Almanac`] instance.
///
/// Use [`Almanac::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AlmanacBuilder::build) to load the data.
pub struct AlmanacBuilder {
    data_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    daily_quota: u32,
}

impl Default for AlmanacBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            output_dir: None,
            daily_quota: config::DAILY_DRAW_QUOTA,
        }
    }
}

impl AlmanacBuilder {
    /// Read reference data files from `path` before the embedded copies.
    ///
    /// Any of `zodiac.json`, `sticks.json` and `texts.json` found there
    /// replaces its embedded counterpart.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Directory wallpapers are saved into.
    ///
    /// Defaults to a `zodiac-almanac` folder under the user's pictures
    /// directory.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Stick draws allowed per day in sessions opened by this almanac.
    ///
    /// Defaults to 3.
    pub fn daily_quota(mut self, quota: u32) -> Self {
        self.daily_quota = quota;
        self
    }

    /// Load and validate the reference data.
    pub fn build(self) -> Result<Almanac> {
        let catalog = Catalog::load(self.data_dir)?;
        Ok(Almanac {
            catalog,
            output_dir: self.output_dir.unwrap_or_else(config::default_output_dir),
            daily_quota: self.daily_quota,
        })
    }
}

// ---------------------------------------------------------------------------
// Almanac
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Owns the validated [`Catalog`] and hands out lightweight query
/// interfaces that borrow from it.
pub struct Almanac {
    catalog: Catalog,
    output_dir: PathBuf,
    daily_quota: u32,
}

impl Almanac {
    /// Create a new builder for configuring the almanac.
    pub fn builder() -> AlmanacBuilder {
        AlmanacBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Sign classification and reference lookups.
    pub fn signs(&self) -> queries::SignQuery<'_> {
        queries::SignQuery::new(&self.catalog)
    }

    /// Fortune generation.
    pub fn fortunes(&self) -> queries::FortuneQuery<'_> {
        queries::FortuneQuery::new(&self.catalog)
    }

    /// Pairwise compatibility scoring.
    pub fn compatibility(&self) -> queries::CompatibilityQuery<'_> {
        queries::CompatibilityQuery::new(&self.catalog)
    }

    /// The fortune-stick pool. Draws here are unlimited; use
    /// [`session()`](Self::session) for the daily quota.
    pub fn sticks(&self) -> queries::StickQuery<'_> {
        queries::StickQuery::new(&self.catalog)
    }

    /// Open a fresh draw session for today with the configured quota.
    pub fn session(&self) -> StickSession {
        StickSession::new(self.daily_quota)
    }

    /// Wallpaper layout and rendering.
    pub fn wallpaper(&self) -> wallpaper::WallpaperRenderer<'_> {
        wallpaper::WallpaperRenderer::new(&self.catalog)
    }

    /// Render a wallpaper and save it to the output directory.
    pub fn save_wallpaper(&self, config: &WallpaperConfig) -> Result<PathBuf> {
        self.wallpaper().export(config, &self.output_dir)
    }

    // -- Metadata ----------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn daily_quota(&self) -> u32 {
        self.daily_quota
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Almanac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = match &self.catalog.data_dir {
            Some(dir) => dir.display().to_string(),
            None => "embedded".to_string(),
        };
        write!(
            f,
            "Almanac(data={}, signs={}, sticks={}, output_dir={}, daily_quota={})",
            data,
            self.catalog.signs().len(),
            self.catalog.sticks().len(),
            self.output_dir.display(),
            self.daily_quota
        )
    }
}
