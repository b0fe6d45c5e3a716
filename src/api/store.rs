//! Saved scenario storage.
//!
//! Handlers reach storage through the [`ScenarioStore`] trait so the
//! in-memory store can be swapped for a persistent one.

use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::SavedScenario;

/// Storage for named household scenarios.
pub trait ScenarioStore: Send + Sync {
    /// Returns every saved scenario in the order it was saved.
    fn list(&self) -> Vec<SavedScenario>;

    /// Stores a scenario.
    fn save(&self, scenario: SavedScenario);

    /// Removes the scenario with the given id.
    ///
    /// Returns `ScenarioNotFound` if no scenario has that id.
    fn delete(&self, id: Uuid) -> EngineResult<()>;
}

/// A [`ScenarioStore`] that keeps scenarios in process memory.
///
/// # Example
///
/// ```
/// use childcare_calculator::api::{InMemoryScenarioStore, ScenarioStore};
/// use childcare_calculator::models::{HouseholdParameters, SavedScenario};
///
/// let store = InMemoryScenarioStore::new();
/// let scenario = SavedScenario::new("Baseline", HouseholdParameters::default());
/// let id = scenario.id;
///
/// store.save(scenario);
/// assert_eq!(store.list().len(), 1);
///
/// store.delete(id).unwrap();
/// assert!(store.list().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryScenarioStore {
    scenarios: RwLock<Vec<SavedScenario>>,
}

impl InMemoryScenarioStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioStore for InMemoryScenarioStore {
    fn list(&self) -> Vec<SavedScenario> {
        self.scenarios
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, scenario: SavedScenario) {
        self.scenarios
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(scenario);
    }

    fn delete(&self, id: Uuid) -> EngineResult<()> {
        let mut scenarios = self
            .scenarios
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let position = scenarios
            .iter()
            .position(|scenario| scenario.id == id)
            .ok_or_else(|| EngineError::ScenarioNotFound { id: id.to_string() })?;

        scenarios.remove(position);
        Ok(())
    }
}
