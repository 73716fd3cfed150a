//! Sign-pair compatibility scoring.
//!
//! Scores start from the elemental relation of the two signs, are adjusted
//! by the signs' own compatible/incompatible lists, then perturbed and
//! clamped to `0..=100`. All deterministic inputs are symmetric in the two
//! signs and random draws happen in a fixed order, so `(a, b)` and `(b, a)`
//! give identical scores and texts for the same random source.

use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{CompatibilityResult, Relation, ScoreTier, ZodiacSign};
use crate::oracle;

const COMPATIBLE_BONUS: i32 = 8;
const INCOMPATIBLE_PENALTY: i32 = 10;
const OVERALL_SPREAD: i32 = 8;
const CATEGORY_SPREAD: i32 = 10;
pub(crate) const BOND_COUNT: usize = 2;
/// Conflicts drawn for a pair on either sign's incompatible list; others get one.
pub(crate) const LISTED_CONFLICT_COUNT: usize = 2;
pub(crate) const ADVICE_COUNT: usize = 2;

fn base_score(relation: Relation) -> i32 {
    match relation {
        Relation::Same => 80,
        Relation::Complementary => 72,
        Relation::Neutral => 58,
        Relation::Opposing => 45,
    }
}

/// Per-relation offsets for (love, friendship, career).
fn category_offsets(relation: Relation) -> (i32, i32, i32) {
    match relation {
        Relation::Same => (4, 6, -2),
        Relation::Complementary => (6, 4, 0),
        Relation::Neutral => (-4, 2, 6),
        Relation::Opposing => (5, -6, -4),
    }
}

// ---------------------------------------------------------------------------
// CompatibilityQuery
// ---------------------------------------------------------------------------

/// Scores pairs of signs.
pub struct CompatibilityQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> CompatibilityQuery<'a> {
    /// Create a new `CompatibilityQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Elemental relation between two signs.
    pub fn relation(&self, sign1: ZodiacSign, sign2: ZodiacSign) -> Relation {
        Relation::between(
            self.catalog.info(sign1).element,
            self.catalog.info(sign2).element,
        )
    }

    /// Whether either sign lists the other as compatible.
    pub fn listed_compatible(&self, sign1: ZodiacSign, sign2: ZodiacSign) -> bool {
        self.catalog.info(sign1).is_compatible_with(sign2)
            || self.catalog.info(sign2).is_compatible_with(sign1)
    }

    /// Whether either sign lists the other as incompatible.
    pub fn listed_incompatible(&self, sign1: ZodiacSign, sign2: ZodiacSign) -> bool {
        self.catalog.info(sign1).is_incompatible_with(sign2)
            || self.catalog.info(sign2).is_incompatible_with(sign1)
    }

    /// The unperturbed overall score: elemental base plus list adjustments.
    ///
    /// Random perturbation is centred on this value before clamping.
    pub fn expected_overall(&self, sign1: ZodiacSign, sign2: ZodiacSign) -> i32 {
        base_score(self.relation(sign1, sign2)) + self.affinity(sign1, sign2)
    }

    /// Score a pair with the thread-local random source.
    pub fn score(&self, sign1: ZodiacSign, sign2: ZodiacSign) -> CompatibilityResult {
        self.score_with(&mut rand::thread_rng(), sign1, sign2)
    }

    /// Score a pair drawing all randomness from `rng`.
    pub fn score_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sign1: ZodiacSign,
        sign2: ZodiacSign,
    ) -> CompatibilityResult {
        let relation = self.relation(sign1, sign2);
        let centre = self.expected_overall(sign1, sign2);
        let (love_off, friendship_off, career_off) = category_offsets(relation);

        let overall = oracle::clamp_score(centre + oracle::jitter(rng, OVERALL_SPREAD));
        let love = oracle::clamp_score(centre + love_off + oracle::jitter(rng, CATEGORY_SPREAD));
        let friendship =
            oracle::clamp_score(centre + friendship_off + oracle::jitter(rng, CATEGORY_SPREAD));
        let career =
            oracle::clamp_score(centre + career_off + oracle::jitter(rng, CATEGORY_SPREAD));

        let texts = &self.catalog.texts().compatibility;

        let mut bonds = Vec::new();
        if sign1 == sign2 {
            bonds.push(texts.mirror_bond.clone());
        }
        if self.listed_compatible(sign1, sign2) {
            bonds.push(texts.destined_bond.clone());
        }
        bonds.extend(owned(oracle::pick_distinct(rng, texts.bonds_for(relation), BOND_COUNT)));

        let conflict_count = if self.listed_incompatible(sign1, sign2) {
            LISTED_CONFLICT_COUNT
        } else {
            1
        };
        let conflicts = owned(oracle::pick_distinct(
            rng,
            texts.conflicts_for(relation),
            conflict_count,
        ));
        let advice = owned(oracle::pick_distinct(rng, texts.advice_for(relation), ADVICE_COUNT));

        let description = texts
            .descriptions
            .get(&ScoreTier::for_score(overall))
            .cloned()
            .unwrap_or_default();

        tracing::debug!(
            sign1 = %sign1,
            sign2 = %sign2,
            relation = %relation,
            overall,
            "Scored compatibility"
        );

        CompatibilityResult {
            sign1,
            sign2,
            relation,
            overall,
            love,
            friendship,
            career,
            bonds,
            conflicts,
            advice,
            description,
        }
    }

    fn affinity(&self, sign1: ZodiacSign, sign2: ZodiacSign) -> i32 {
        let mut adjustment = 0;
        if self.listed_compatible(sign1, sign2) {
            adjustment += COMPATIBLE_BONUS;
        }
        if self.listed_incompatible(sign1, sign2) {
            adjustment -= INCOMPATIBLE_PENALTY;
        }
        adjustment
    }
}

fn owned(picked: Vec<&String>) -> Vec<String> {
    picked.into_iter().cloned().collect()
}
