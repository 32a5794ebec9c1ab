//! Client profile data structures matching the completed fact-find format

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_term_years() -> u32 {
    25
}

/// Adverse credit categories recognised by lender criteria.
///
/// Serde names match the keys used in the lender catalog documents
/// (`tierCriteria.ccjs`, `tierCriteria.paydayLoans`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditCategory {
    #[serde(rename = "ccjs")]
    Ccj,
    #[serde(rename = "defaults")]
    Default,
    #[serde(rename = "securedArrears")]
    SecuredArrears,
    #[serde(rename = "unsecuredArrears")]
    UnsecuredArrears,
    #[serde(rename = "bankruptcy")]
    Bankruptcy,
    #[serde(rename = "iva")]
    Iva,
    #[serde(rename = "dmp")]
    Dmp,
    #[serde(rename = "paydayLoans")]
    PaydayLoan,
    #[serde(rename = "repossessions")]
    Repossession,
}

impl CreditCategory {
    /// Human-readable label used in match/rejection reason strings
    pub fn label(&self) -> &'static str {
        match self {
            CreditCategory::Ccj => "CCJs",
            CreditCategory::Default => "defaults",
            CreditCategory::SecuredArrears => "secured arrears",
            CreditCategory::UnsecuredArrears => "unsecured arrears",
            CreditCategory::Bankruptcy => "bankruptcy",
            CreditCategory::Iva => "IVA",
            CreditCategory::Dmp => "DMP",
            CreditCategory::PaydayLoan => "payday loans",
            CreditCategory::Repossession => "repossession",
        }
    }
}

/// Employment status of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Contractor,
    Retired,
}

impl Default for EmploymentStatus {
    fn default() -> Self {
        EmploymentStatus::Employed
    }
}

/// Preferred fixed-rate product term, used to key into lender rate tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FixedTerm {
    #[serde(rename = "2yr")]
    TwoYear,
    #[serde(rename = "3yr")]
    ThreeYear,
    #[serde(rename = "5yr")]
    FiveYear,
}

impl Default for FixedTerm {
    fn default() -> Self {
        FixedTerm::FiveYear
    }
}

impl FixedTerm {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixedTerm::TwoYear => "2yr",
            FixedTerm::ThreeYear => "3yr",
            FixedTerm::FiveYear => "5yr",
        }
    }
}

/// A single adverse credit record from the fact-find
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditEvent {
    /// Outstanding or original amount in pounds
    pub amount: f64,

    /// Registration date; absent when the applicant could not supply one
    #[serde(default)]
    pub date_registered: Option<NaiveDate>,

    /// Whether the event has been satisfied/settled
    #[serde(default)]
    pub settled: bool,

    /// Settlement date, when settled
    #[serde(default)]
    pub date_settled: Option<NaiveDate>,

    /// Free-text sub-type ("utilities", "telecom", ...) used by
    /// category-specific exemptions
    #[serde(default)]
    pub subtype: Option<String>,
}

impl CreditEvent {
    /// The date lender discharge-age criteria measure from: settlement date
    /// when present, registration date otherwise
    pub fn discharge_date(&self) -> Option<NaiveDate> {
        self.date_settled.or(self.date_registered)
    }
}

/// A completed client application profile.
///
/// Built from the most recent completed fact-find record; the engine treats
/// it as an immutable snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Purchase price / valuation of the property in pounds
    pub property_value: f64,

    /// Deposit the client is putting down
    pub deposit: f64,

    /// Requested mortgage term in years
    #[serde(default = "default_term_years")]
    pub term_years: u32,

    /// Preferred fixed-rate product term
    #[serde(default)]
    pub preferred_fixed_term: FixedTerm,

    /// Basic annual salary
    #[serde(default)]
    pub basic_salary: f64,

    /// Other annual income (bonus, overtime, second job)
    #[serde(default)]
    pub other_income: f64,

    /// Employment status
    #[serde(default)]
    pub employment: EmploymentStatus,

    /// Adverse credit events grouped by category.
    /// BTreeMap so iteration order (and therefore reason ordering) is fixed.
    #[serde(default)]
    pub credit_events: BTreeMap<CreditCategory, Vec<CreditEvent>>,
}

impl ClientProfile {
    /// Events for one category; absent categories read as empty
    pub fn events(&self, category: CreditCategory) -> &[CreditEvent] {
        self.credit_events
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when the profile has no adverse credit at all
    pub fn is_clean(&self) -> bool {
        self.credit_events.values().all(|events| events.is_empty())
    }

    pub fn is_self_employed(&self) -> bool {
        matches!(self.employment, EmploymentStatus::SelfEmployed)
    }
}
