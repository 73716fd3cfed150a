//! Fortune-stick draws from the pre-authored pool.

use rand::Rng;

use crate::catalog::Catalog;
use crate::error::{AlmanacError, Result};
use crate::models::{FortuneStick, StickKind};
use crate::oracle;

/// Query interface over the fortune-stick pool.
///
/// Draws are uniform and with replacement. Quota and history belong to the
/// caller; see [`StickSession`](crate::session::StickSession).
pub struct StickQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> StickQuery<'a> {
    /// Create a new `StickQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The whole pool in authored order.
    pub fn pool(&self) -> &'a [FortuneStick] {
        self.catalog.sticks()
    }

    /// Find a stick by id.
    pub fn get(&self, id: &str) -> Result<&'a FortuneStick> {
        self.pool()
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AlmanacError::NotFound(format!("Fortune stick '{}' not found", id)))
    }

    /// All sticks of one kind.
    pub fn by_kind(&self, kind: StickKind) -> Vec<&'a FortuneStick> {
        self.pool().iter().filter(|s| s.kind == kind).collect()
    }

    /// Draw one stick with the thread-local random source.
    pub fn draw(&self) -> Result<&'a FortuneStick> {
        self.draw_with(&mut rand::thread_rng())
    }

    /// Draw one stick using `rng`.
    pub fn draw_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a FortuneStick> {
        let stick = oracle::pick(rng, self.pool())
            .ok_or_else(|| AlmanacError::InvalidData("Fortune-stick pool is empty".into()))?;
        tracing::debug!(id = %stick.id, kind = %stick.kind, "Drew fortune stick");
        Ok(stick)
    }
}
