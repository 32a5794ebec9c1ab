//! Match results and the ranking pass.
//!
//! A `MatchResult` is a snapshot: constructed once per evaluation run and
//! persisted as-is, so re-running the match later with updated criteria never
//! retroactively changes a previously quoted result.

use serde::{Deserialize, Serialize};

use crate::catalog::{LenderProduct, Tier};
use crate::engine::{ResolvedRate, TierEvaluation};
use crate::profile::FixedTerm;

/// One matched (or evaluated) lender tier with its score and rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub lender_name: String,
    pub tier_name: String,

    /// Match score, 0-100; ranked output only contains scores above zero
    pub score: i32,

    /// Positive reasons in gate order, for UI display
    pub reasons: Vec<String>,

    /// Rejection reasons; empty for tiers that passed every gate
    pub rejections: Vec<String>,

    /// Selected annual rate in percent
    pub rate: f64,

    /// Fixed-rate term the selected rate belongs to
    pub term: FixedTerm,

    /// Product/incentive label of the selected rate entry, when present
    pub product: Option<String>,

    /// Projected monthly payment over the requested mortgage term
    pub monthly_payment: f64,

    // Tier bounds carried for display alongside the match
    pub max_ltv: f64,
    pub min_loan: Option<f64>,
    pub max_loan: Option<f64>,
}

impl MatchResult {
    /// Assemble a result for a tier that passed the gates and resolved a rate
    pub fn new(
        lender: &LenderProduct,
        tier: &Tier,
        evaluation: &TierEvaluation,
        resolved: &ResolvedRate,
        monthly_payment: f64,
    ) -> Self {
        let base = 100 + evaluation.score_delta;
        Self {
            lender_name: lender.lender_name.clone(),
            tier_name: tier.name.clone(),
            score: base.clamp(0, 100),
            reasons: evaluation.reasons.clone(),
            rejections: evaluation.rejections.clone(),
            rate: resolved.rate,
            term: resolved.term,
            product: resolved.product.clone(),
            monthly_payment,
            max_ltv: tier.max_ltv,
            min_loan: tier.min_loan,
            max_loan: tier.max_loan,
        }
    }
}

/// Order results best-first and drop zero-score entries.
///
/// Primary key score descending, secondary key rate ascending (cheaper wins
/// ties). The sort is stable, so identical inputs always produce identical
/// output order.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.retain(|r| r.score > 0);
    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.rate.partial_cmp(&b.rate).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| a.lender_name.cmp(&b.lender_name))
            .then_with(|| a.tier_name.cmp(&b.tier_name))
    });
    results
}
