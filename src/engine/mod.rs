//! Matching engine: gate evaluation, rate resolution and the catalog-wide
//! entry point

mod gates;
mod rates;
mod scoring;

pub use gates::{evaluate_tier, TierEvaluation};
pub use rates::{monthly_payment, resolve_rate, ResolvedRate};
pub use scoring::{PenaltyRule, ScoringConfig};

use chrono::NaiveDate;
use rayon::prelude::*;
use thiserror::Error;

use crate::catalog::LenderProduct;
use crate::profile::{ClientProfile, DerivedMetrics};
use crate::ranking::{rank, MatchResult};

/// Errors surfaced to the caller of a matching run.
///
/// Only profile problems are fatal. Malformed catalog records degrade to
/// permissive criteria, missing rate coverage silently excludes the tier, and
/// an empty catalog or result set is a valid outcome rather than an error.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid client profile: {0}")]
    InvalidProfile(String),
}

/// Matching engine configured with a scoring policy
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    scoring: ScoringConfig,
}

impl MatchEngine {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Evaluate a profile against the full catalog and return ranked matches.
    ///
    /// Each lender-tier pair is a pure function of (profile, tier, now), so
    /// the catalog fans out across a worker pool and collects with no shared
    /// state. One bad tier never stops the rest of the catalog.
    pub fn match_catalog(
        &self,
        profile: &ClientProfile,
        catalog: &[LenderProduct],
        now: NaiveDate,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let metrics = DerivedMetrics::derive(profile, now)?;

        let pairs: Vec<(&LenderProduct, &crate::catalog::Tier)> = catalog
            .iter()
            .flat_map(|lender| lender.tiers.iter().map(move |tier| (lender, tier)))
            .collect();

        let results: Vec<MatchResult> = pairs
            .into_par_iter()
            .filter_map(|(lender, tier)| self.evaluate_pair(lender, tier, profile, &metrics))
            .collect();

        Ok(rank(results))
    }

    /// Evaluate one lender-tier pair end to end: gates, then rate resolution,
    /// then result assembly. `None` when the tier is ineligible or no rate
    /// band covers the client.
    fn evaluate_pair(
        &self,
        lender: &LenderProduct,
        tier: &crate::catalog::Tier,
        profile: &ClientProfile,
        metrics: &DerivedMetrics,
    ) -> Option<MatchResult> {
        let evaluation = evaluate_tier(lender, tier, profile, metrics, &self.scoring);
        if !evaluation.eligible {
            return None;
        }

        // Bounds and rate availability are independent checks: a tier that
        // passed the gates still drops out when no band covers the LTV.
        let resolved = resolve_rate(&tier.rates, profile.preferred_fixed_term, metrics.ltv)?;
        let payment = monthly_payment(metrics.loan_amount, resolved.rate, metrics.term_years);

        Some(MatchResult::new(
            lender, tier, &evaluation, &resolved, payment,
        ))
    }
}

/// Convenience entry point with the default scoring policy
pub fn match_catalog(
    profile: &ClientProfile,
    catalog: &[LenderProduct],
    now: NaiveDate,
) -> Result<Vec<MatchResult>, MatchError> {
    MatchEngine::default().match_catalog(profile, catalog, now)
}
