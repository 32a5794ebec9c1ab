//! Lender catalog data structures: products, tiers, rate entries and
//! declarative override rules

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::criteria::EligibilityCriteria;
use crate::profile::{CreditCategory, DerivedMetrics, FixedTerm};

/// One row of a tier's rate table: an annual rate for a fixed-term product
/// within an LTV band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Fixed-rate product term this entry prices
    pub term: FixedTerm,

    /// LTV band ceiling in percent; the entry covers any client LTV up to
    /// and including this value
    pub ltv_band: f64,

    /// Annual interest rate in percent
    pub rate: f64,

    /// Product/incentive label ("2-year fixed fee-free", ...)
    #[serde(default)]
    pub product: Option<String>,
}

/// Predicate half of an override rule, evaluated against derived metrics.
///
/// Serde-tagged so predicates live in catalog data, not code; a new
/// institution quirk is a new document field, not an engine branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverridePredicate {
    /// Client LTV must be at least this (named high-LTV product variants)
    LtvAtLeast { pct: f64 },
    /// Client LTV must not exceed this
    LtvAtMost { pct: f64 },
    /// Loan amount must be at least this
    LoanAtLeast { amount: f64 },
    /// Loan amount must not exceed this
    LoanAtMost { amount: f64 },
    /// Property value must be at least this
    PropertyValueAtLeast { amount: f64 },
}

impl OverridePredicate {
    pub fn is_satisfied(&self, metrics: &DerivedMetrics) -> bool {
        match self {
            OverridePredicate::LtvAtLeast { pct } => metrics.ltv >= *pct,
            OverridePredicate::LtvAtMost { pct } => metrics.ltv <= *pct,
            OverridePredicate::LoanAtLeast { amount } => metrics.loan_amount >= *amount,
            OverridePredicate::LoanAtMost { amount } => metrics.loan_amount <= *amount,
            OverridePredicate::PropertyValueAtLeast { amount } => {
                metrics.property_value >= *amount
            }
        }
    }
}

/// A rule outside the generic criteria schema, attached to a tier or an
/// institution. An unsatisfied predicate disqualifies the tier with the
/// attached rejection string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub predicate: OverridePredicate,
    pub rejection: String,
}

/// A named product tier within a lending institution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tier {
    /// Tier name ("Tandem Three (T3)", "AAA", ...)
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Maximum loan-to-value in percent
    pub max_ltv: f64,

    /// Minimum loan-to-value, for products that only exist at high LTV
    #[serde(default)]
    pub min_ltv: Option<f64>,

    #[serde(default)]
    pub min_loan: Option<f64>,

    #[serde(default)]
    pub max_loan: Option<f64>,

    #[serde(default)]
    pub min_property_value: Option<f64>,

    /// Whether self-employed applicants are accepted; `None` = no restriction
    #[serde(default)]
    pub accepts_self_employed: Option<bool>,

    /// Adverse-credit criteria keyed by category. A missing category means
    /// no additional restriction, not "not accepted".
    #[serde(default)]
    pub criteria: BTreeMap<CreditCategory, EligibilityCriteria>,

    /// Rate table entries
    #[serde(default)]
    pub rates: Vec<RateEntry>,

    /// Tier-level override rules, evaluated after the bounds gates
    #[serde(default)]
    pub overrides: Vec<OverrideRule>,
}

impl Tier {
    /// Criteria for a category; absent entries read as permissive
    pub fn criteria_for(&self, category: CreditCategory) -> EligibilityCriteria {
        self.criteria
            .get(&category)
            .cloned()
            .unwrap_or_else(EligibilityCriteria::permissive)
    }
}

/// A lending institution offering one or more product tiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderProduct {
    pub lender_name: String,

    /// "Adverse Credit Specialist", "High Street", ...
    #[serde(default)]
    pub lender_type: Option<String>,

    /// Institution-level override rules, applied to every tier
    #[serde(default)]
    pub overrides: Vec<OverrideRule>,

    pub tiers: Vec<Tier>,
}
