//! Client profile data structures and derived metrics

mod data;
mod metrics;

pub use data::{ClientProfile, CreditCategory, CreditEvent, EmploymentStatus, FixedTerm};
pub use metrics::{months_since, years_since, DerivedMetrics};
