//! Sourcing runner for efficient repeated matching.
//!
//! Pre-loads the catalog once, then allows running many matching passes for
//! different profiles or evaluation dates without re-reading files.

use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;
use log::info;

use crate::catalog::{load_catalog, LenderProduct};
use crate::engine::{MatchEngine, MatchError, ScoringConfig};
use crate::profile::ClientProfile;
use crate::ranking::MatchResult;
use crate::store::{MatchStore, ProfileStore};

/// Pre-loaded sourcing runner
#[derive(Debug, Clone, Default)]
pub struct SourcingRunner {
    catalog: Vec<LenderProduct>,
    engine: MatchEngine,
}

impl SourcingRunner {
    /// Create a runner over an already-loaded catalog with default scoring
    pub fn new(catalog: Vec<LenderProduct>) -> Self {
        Self {
            catalog,
            engine: MatchEngine::default(),
        }
    }

    /// Create a runner by loading the catalog from a JSON file
    pub fn from_json(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self::new(load_catalog(path)?))
    }

    /// Create a runner with a specific scoring policy
    pub fn with_scoring(catalog: Vec<LenderProduct>, scoring: ScoringConfig) -> Self {
        Self {
            catalog,
            engine: MatchEngine::new(scoring),
        }
    }

    /// Run one matching pass
    pub fn run(
        &self,
        profile: &ClientProfile,
        now: NaiveDate,
    ) -> Result<Vec<MatchResult>, MatchError> {
        self.engine.match_catalog(profile, &self.catalog, now)
    }

    /// Run the same evaluation date across several profiles
    pub fn run_batch(
        &self,
        profiles: &[ClientProfile],
        now: NaiveDate,
    ) -> Result<Vec<Vec<MatchResult>>, MatchError> {
        profiles.iter().map(|p| self.run(p, now)).collect()
    }

    /// Fetch a client's latest profile, match it, and persist the snapshot.
    ///
    /// The store write overwrites any previous snapshot for the client.
    pub fn source_and_save<P, M>(
        &self,
        profiles: &P,
        matches: &M,
        client_id: &str,
        now: NaiveDate,
    ) -> Result<Vec<MatchResult>, Box<dyn Error>>
    where
        P: ProfileStore,
        M: MatchStore,
    {
        let profile = profiles.get_client_profile(client_id)?;
        let results = self.run(&profile, now)?;
        info!(
            "matched {} of {} lenders for client {}",
            results.len(),
            self.catalog.len(),
            client_id
        );
        matches.save_matches(client_id, &results, now)?;
        Ok(results)
    }

    pub fn catalog(&self) -> &[LenderProduct] {
        &self.catalog
    }
}
