//! Sourcing Engine - deterministic lender matching for adverse-credit mortgages
//!
//! This library provides:
//! - Metric derivation (loan amount, LTV, adverse-event ages) from client profiles
//! - Per-tier eligibility gating against lender adverse-credit criteria
//! - LTV-banded rate resolution and monthly payment amortization
//! - Scored, ranked, explainable match results
//! - Catalog/profile loading and snapshot persistence interfaces

pub mod catalog;
pub mod engine;
pub mod profile;
pub mod ranking;
pub mod runner;
pub mod store;

// Re-export commonly used types
pub use catalog::{EligibilityCriteria, LenderProduct, RateEntry, Tier};
pub use engine::{match_catalog, MatchEngine, MatchError, ScoringConfig};
pub use profile::{ClientProfile, CreditCategory, CreditEvent, DerivedMetrics, FixedTerm};
pub use ranking::MatchResult;
pub use runner::SourcingRunner;
