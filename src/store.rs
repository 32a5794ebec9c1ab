//! External collaborator interfaces.
//!
//! The engine itself does no I/O: the catalog store, profile store and match
//! store are thin wrappers owned by the surrounding application. The core
//! treats catalog reads as snapshots and match writes as overwriting the
//! previous snapshot for the client; result history is a presentation-layer
//! concern.

use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::catalog::LenderProduct;
use crate::profile::ClientProfile;
use crate::ranking::MatchResult;

/// Read access to the active lender-product catalog
pub trait CatalogStore {
    /// The full active catalog as a snapshot, not a cursor
    fn list_lender_products(&self) -> Result<Vec<LenderProduct>, Box<dyn Error>>;
}

/// Read access to completed client intake records
pub trait ProfileStore {
    /// The most recently completed intake record for a client
    fn get_client_profile(&self, client_id: &str) -> Result<ClientProfile, Box<dyn Error>>;
}

/// Write access for match snapshots
pub trait MatchStore {
    /// Persist a snapshot for later display, overwriting any prior snapshot
    /// for this client
    fn save_matches(
        &self,
        client_id: &str,
        matches: &[MatchResult],
        saved_at: NaiveDate,
    ) -> Result<(), Box<dyn Error>>;
}

/// A saved match snapshot
#[derive(Debug, Clone)]
pub struct MatchSnapshot {
    pub matches: Vec<MatchResult>,
    pub saved_at: NaiveDate,
}

/// In-memory store backing tests and embedded use
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: Vec<LenderProduct>,
    profiles: HashMap<String, ClientProfile>,
    snapshots: Mutex<HashMap<String, MatchSnapshot>>,
}

impl MemoryStore {
    pub fn new(catalog: Vec<LenderProduct>) -> Self {
        Self {
            catalog,
            profiles: HashMap::new(),
            snapshots: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert_profile(&mut self, client_id: &str, profile: ClientProfile) {
        self.profiles.insert(client_id.to_string(), profile);
    }

    pub fn snapshot(&self, client_id: &str) -> Option<MatchSnapshot> {
        self.snapshots
            .lock()
            .expect("snapshot lock poisoned")
            .get(client_id)
            .cloned()
    }
}

impl CatalogStore for MemoryStore {
    fn list_lender_products(&self) -> Result<Vec<LenderProduct>, Box<dyn Error>> {
        Ok(self.catalog.clone())
    }
}

impl ProfileStore for MemoryStore {
    fn get_client_profile(&self, client_id: &str) -> Result<ClientProfile, Box<dyn Error>> {
        self.profiles
            .get(client_id)
            .cloned()
            .ok_or_else(|| format!("no completed profile for client '{client_id}'").into())
    }
}

impl MatchStore for MemoryStore {
    fn save_matches(
        &self,
        client_id: &str,
        matches: &[MatchResult],
        saved_at: NaiveDate,
    ) -> Result<(), Box<dyn Error>> {
        self.snapshots
            .lock()
            .map_err(|_| "snapshot lock poisoned")?
            .insert(
                client_id.to_string(),
                MatchSnapshot {
                    matches: matches.to_vec(),
                    saved_at,
                },
            );
        Ok(())
    }
}
