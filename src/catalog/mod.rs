//! Lender product catalog: data structures, criteria and loading

mod criteria;
mod data;
pub mod loader;

pub use criteria::{EligibilityCriteria, DEFAULT_PERIOD_MONTHS};
pub use data::{LenderProduct, OverridePredicate, OverrideRule, RateEntry, Tier};
pub use loader::{load_catalog, load_profile, load_rate_sheet, parse_catalog};
