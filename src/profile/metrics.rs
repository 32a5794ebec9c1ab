//! Derived metrics: loan amount, LTV, income and event ages.
//!
//! Everything here is a pure function of `(profile, now)`; `now` is always an
//! explicit parameter so evaluation stays deterministic and testable.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::warn;

use crate::engine::MatchError;
use crate::profile::{ClientProfile, CreditCategory};

/// Average month length in days, matching the sourcing convention used by
/// lender criteria windows ("3 in 24 months")
const DAYS_PER_MONTH: f64 = 30.44;

/// Whole months elapsed between `date` and `now`.
///
/// `None` when the event date is missing: the event is treated as infinitely
/// old and never counts against the client.
pub fn months_since(date: Option<NaiveDate>, now: NaiveDate) -> Option<u32> {
    let date = date?;
    let days = (now - date).num_days();
    if days < 0 {
        return Some(0);
    }
    Some((days as f64 / DAYS_PER_MONTH).floor() as u32)
}

/// Years elapsed between `date` and `now`, fractional
pub fn years_since(date: NaiveDate, now: NaiveDate) -> f64 {
    (now - date).num_days().max(0) as f64 / 365.25
}

/// Metrics derived once per evaluation run and shared by every tier check
#[derive(Debug, Clone)]
pub struct DerivedMetrics {
    /// Property value the LTV is measured against
    pub property_value: f64,

    /// Property value minus deposit
    pub loan_amount: f64,

    /// Loan as a percentage of property value, full precision
    pub ltv: f64,

    /// Total declared annual income
    pub total_income: f64,

    /// Requested mortgage term in years
    pub term_years: u32,

    /// Months since registration for every event, keyed by (category, index
    /// within category). `None` = date missing, never counts in a window.
    pub event_ages: HashMap<(CreditCategory, usize), Option<u32>>,

    /// Evaluation date the ages were computed against
    pub now: NaiveDate,
}

impl DerivedMetrics {
    /// Compute all derived metrics for a profile at `now`.
    ///
    /// Fails with `InvalidProfile` when the property value or resulting loan
    /// amount is non-positive; this aborts the whole matching run.
    pub fn derive(profile: &ClientProfile, now: NaiveDate) -> Result<Self, MatchError> {
        if profile.property_value <= 0.0 {
            return Err(MatchError::InvalidProfile(format!(
                "property value must be positive, got £{:.2}",
                profile.property_value
            )));
        }

        let loan_amount = profile.property_value - profile.deposit;
        if loan_amount <= 0.0 {
            return Err(MatchError::InvalidProfile(format!(
                "loan amount must be positive, got £{:.2} (deposit covers the property)",
                loan_amount
            )));
        }

        let ltv = loan_amount / profile.property_value * 100.0;

        let mut event_ages = HashMap::new();
        for (&category, events) in &profile.credit_events {
            for (idx, event) in events.iter().enumerate() {
                let age = months_since(event.date_registered, now);
                if age.is_none() {
                    warn!(
                        "{} event #{} has no registration date; treating as too old to count",
                        category.label(),
                        idx
                    );
                }
                event_ages.insert((category, idx), age);
            }
        }

        Ok(Self {
            property_value: profile.property_value,
            loan_amount,
            ltv,
            total_income: profile.basic_salary + profile.other_income,
            term_years: profile.term_years,
            event_ages,
            now,
        })
    }

    /// LTV rounded to one decimal place for display and reason strings
    pub fn ltv_display(&self) -> f64 {
        (self.ltv * 10.0).round() / 10.0
    }

    /// Age in months of one event, as computed at derivation time
    pub fn event_age(&self, category: CreditCategory, idx: usize) -> Option<u32> {
        self.event_ages.get(&(category, idx)).copied().flatten()
    }
}
