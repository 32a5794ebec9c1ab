//! Match-score policy: per-category penalties, caps and bonuses.
//!
//! The constants here are business policy, not engine structure. `Default`
//! carries the panel's current values; a different policy deserializes from
//! JSON without touching the evaluator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::CreditCategory;

/// Score penalty applied when a category passes its gates but events exist
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRule {
    /// Points deducted per counted event
    pub per_event: i32,

    /// Ceiling on the total deduction for the category; `None` = uncapped
    pub cap: Option<i32>,
}

impl PenaltyRule {
    pub fn new(per_event: i32, cap: Option<i32>) -> Self {
        Self { per_event, cap }
    }

    /// Total deduction for `count` events: `min(cap, count * per_event)`
    pub fn deduction(&self, count: usize) -> i32 {
        let raw = self.per_event.saturating_mul(count as i32);
        match self.cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }
}

/// Full scoring policy for a matching run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Starting score before deltas are applied
    pub base_score: i32,

    /// Per-category penalty rules; categories without an entry deduct nothing
    pub penalties: BTreeMap<CreditCategory, PenaltyRule>,

    /// Deduction for self-employed applicants on tiers that accept them
    pub self_employed_penalty: i32,

    /// Bonus for a profile with zero adverse events across every category
    pub clean_profile_bonus: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let mut penalties = BTreeMap::new();
        penalties.insert(CreditCategory::Ccj, PenaltyRule::new(5, Some(20)));
        penalties.insert(CreditCategory::Default, PenaltyRule::new(5, Some(20)));
        penalties.insert(CreditCategory::SecuredArrears, PenaltyRule::new(5, Some(20)));
        penalties.insert(
            CreditCategory::UnsecuredArrears,
            PenaltyRule::new(5, Some(20)),
        );
        penalties.insert(CreditCategory::Bankruptcy, PenaltyRule::new(15, Some(15)));
        penalties.insert(CreditCategory::Iva, PenaltyRule::new(10, Some(10)));
        penalties.insert(CreditCategory::Dmp, PenaltyRule::new(10, Some(10)));
        penalties.insert(CreditCategory::PaydayLoan, PenaltyRule::new(3, None));
        penalties.insert(CreditCategory::Repossession, PenaltyRule::new(15, Some(15)));

        Self {
            base_score: 100,
            penalties,
            self_employed_penalty: 5,
            clean_profile_bonus: 10,
        }
    }
}

impl ScoringConfig {
    /// Score delta (negative) for a category with `count` counted events
    pub fn category_delta(&self, category: CreditCategory, count: usize) -> i32 {
        match self.penalties.get(&category) {
            Some(rule) => -rule.deduction(count),
            None => 0,
        }
    }
}
