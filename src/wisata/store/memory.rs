use super::{AttractionStore, Scan};
use crate::error::{Result, WisataError};
use crate::model::{Attraction, AttractionPatch};
use std::cell::Cell;

/// In-memory storage for testing.
///
/// Records live in a `Vec` so scans come back in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Attraction>,
    simulate_unavailable: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StoreUnavailable`.
    pub fn set_simulate_unavailable(&self, simulate: bool) {
        self.simulate_unavailable.set(simulate);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_available(&self) -> Result<()> {
        if self.simulate_unavailable.get() {
            return Err(WisataError::StoreUnavailable(
                "Simulated backend outage".to_string(),
            ));
        }
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl AttractionStore for InMemoryStore {
    fn create(&mut self, record: &Attraction) -> Result<()> {
        self.check_available()?;
        if self.position(&record.id).is_some() {
            return Err(WisataError::AlreadyExists(record.id.clone()));
        }
        self.records.push(record.clone());
        Ok(())
    }

    fn put(&mut self, record: &Attraction) -> Result<()> {
        self.check_available()?;
        match self.position(&record.id) {
            Some(pos) => self.records[pos] = record.clone(),
            None => self.records.push(record.clone()),
        }
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Attraction> {
        self.check_available()?;
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| WisataError::NotFound(id.to_string()))
    }

    fn update(&mut self, id: &str, patch: &AttractionPatch) -> Result<Attraction> {
        self.check_available()?;
        let pos = self
            .position(id)
            .ok_or_else(|| WisataError::NotFound(id.to_string()))?;
        let record = &mut self.records[pos];
        patch.apply_to(record);
        Ok(record.clone())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.check_available()?;
        let pos = self
            .position(id)
            .ok_or_else(|| WisataError::NotFound(id.to_string()))?;
        self.records.remove(pos);
        Ok(())
    }

    fn scan(&self) -> Result<Scan<'_>> {
        self.check_available()?;
        Ok(Box::new(self.records.iter().cloned()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Axis;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with(mut self, record: Attraction) -> Self {
            self.store.create(&record).unwrap();
            self
        }

        /// The three-record catalog used across the query tests:
        /// two coastal nature beaches and one urban museum.
        pub fn with_sample_catalog(self) -> Self {
            self.with(
                Attraction::with_id("r1", "Beach X")
                    .rated(4.5)
                    .located(-6.2, 106.8)
                    .classed(Axis::Environment, "coastal")
                    .classed(Axis::Category, "nature"),
            )
            .with(
                Attraction::with_id("r2", "Beach Y")
                    .rated(4.8)
                    .located(-6.3, 106.9)
                    .classed(Axis::Environment, "coastal")
                    .classed(Axis::Category, "nature"),
            )
            .with(
                Attraction::with_id("r3", "Museum Z")
                    .rated(4.2)
                    .located(-6.1, 106.7)
                    .classed(Axis::Environment, "urban")
                    .classed(Axis::Category, "culture"),
            )
        }

        pub fn with_unrated(self, id: &str, name: &str) -> Self {
            self.with(Attraction::with_id(id, name))
        }
    }
}
