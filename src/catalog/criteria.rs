//! Per-category eligibility criteria.
//!
//! Every restriction is optional: a missing criteria entry, or a missing
//! field within one, means "no additional restriction". That is distinct from
//! `accepts_clients: false`, which is a hard gate. Catalog documents arrive
//! from several institutions with uneven shapes, so `normalize` accepts raw
//! JSON leniently and falls back to the permissive default rather than
//! failing the whole catalog over one malformed entry.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Window default applied when a criteria entry gives a count limit without
/// naming the lookback period
pub const DEFAULT_PERIOD_MONTHS: u32 = 12;

/// Eligibility rules one lender tier applies to one credit-event category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityCriteria {
    /// Hard gate: false means applicants with any event in this category are
    /// declined outright
    pub accepts_clients: bool,

    /// Maximum counted events inside the rolling window; `None` = unlimited
    pub max_in_period: Option<u32>,

    /// Rolling window length in months for `max_in_period`
    pub period_months: Option<u32>,

    /// Stricter limit inside a narrower recent window ("3 in 24 months
    /// provided 0 in the last 3")
    pub recent_max: Option<u32>,

    /// Narrow window length in months for `recent_max`
    pub recent_period_months: Option<u32>,

    /// Events with amount strictly below this are exempt from counting
    pub min_balance: f64,

    /// Sub-types ignored outright regardless of amount ("utilities", ...)
    pub exempt_subtypes: Vec<String>,

    /// Every counted event must be satisfied/settled
    pub must_be_satisfied: bool,

    /// Minimum months since the event was satisfied
    pub min_months_since_satisfied: Option<u32>,

    /// Minimum months since discharge (bankruptcy/IVA style categories)
    pub min_months_since_discharge: Option<u32>,

    /// Minimum years since discharge; fractional years compare against
    /// days / 365.25
    pub min_years_since_discharge: Option<f64>,

    /// Maximum events that may still be unsettled/active (payday loans)
    pub max_currently_active: Option<u32>,
}

impl Default for EligibilityCriteria {
    fn default() -> Self {
        Self::permissive()
    }
}

impl EligibilityCriteria {
    /// No additional restriction beyond accepting the category
    pub fn permissive() -> Self {
        Self {
            accepts_clients: true,
            max_in_period: None,
            period_months: None,
            recent_max: None,
            recent_period_months: None,
            min_balance: 0.0,
            exempt_subtypes: Vec::new(),
            must_be_satisfied: false,
            min_months_since_satisfied: None,
            min_months_since_discharge: None,
            min_years_since_discharge: None,
            max_currently_active: None,
        }
    }

    /// Window length to use with `max_in_period`
    pub fn window_months(&self) -> u32 {
        self.period_months.unwrap_or(DEFAULT_PERIOD_MONTHS)
    }

    /// True when a sub-type string matches one of the exempt sub-types
    /// (case-insensitive substring match, so "Utilities arrears" matches
    /// an "utilit" entry)
    pub fn subtype_exempt(&self, subtype: Option<&str>) -> bool {
        let Some(subtype) = subtype else {
            return false;
        };
        let lowered = subtype.to_lowercase();
        self.exempt_subtypes
            .iter()
            .any(|exempt| lowered.contains(&exempt.to_lowercase()))
    }

    /// Normalize a raw criteria document into the canonical shape.
    ///
    /// Institutions nest criteria unevenly and occasionally with wrong-typed
    /// fields; anything unreadable degrades to the permissive default with a
    /// warning instead of an error, so one partial record never sinks the
    /// catalog.
    pub fn normalize(raw: &Value, context: &str) -> Self {
        let Some(obj) = raw.as_object() else {
            if !raw.is_null() {
                warn!("{context}: criteria is not an object; treating as permissive");
            }
            return Self::permissive();
        };

        let mut criteria = Self::permissive();
        criteria.accepts_clients = obj
            .get("acceptsClients")
            .and_then(Value::as_bool)
            .unwrap_or(true);
        criteria.max_in_period = read_u32(obj.get("maxInPeriod"));
        criteria.period_months = read_u32(obj.get("periodMonths"));
        criteria.recent_max = read_u32(obj.get("recentMax"));
        criteria.recent_period_months = read_u32(obj.get("recentPeriodMonths"));
        criteria.min_balance = obj
            .get("minBalance")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        criteria.exempt_subtypes = obj
            .get("exemptSubtypes")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        criteria.must_be_satisfied = obj
            .get("mustBeSatisfied")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        criteria.min_months_since_satisfied = read_u32(obj.get("minMonthsSinceSatisfied"));
        criteria.min_months_since_discharge = read_u32(obj.get("minMonthsSinceDischarge"));
        criteria.min_years_since_discharge =
            obj.get("minYearsSinceDischarge").and_then(Value::as_f64);
        criteria.max_currently_active = read_u32(obj.get("maxCurrentlyActive"));

        for key in obj.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) && key != "notes" {
                warn!("{context}: unrecognised criteria field '{key}' ignored");
            }
        }

        criteria
    }
}

const KNOWN_KEYS: &[&str] = &[
    "acceptsClients",
    "maxInPeriod",
    "periodMonths",
    "recentMax",
    "recentPeriodMonths",
    "minBalance",
    "exemptSubtypes",
    "mustBeSatisfied",
    "minMonthsSinceSatisfied",
    "minMonthsSinceDischarge",
    "minYearsSinceDischarge",
    "maxCurrentlyActive",
];

fn read_u32(value: Option<&Value>) -> Option<u32> {
    value.and_then(Value::as_u64).map(|v| v as u32)
}
