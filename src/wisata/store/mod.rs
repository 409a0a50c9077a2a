//! # Storage Layer
//!
//! This module defines the storage abstraction for the catalog. The
//! [`AttractionStore`] trait is the only capability the rest of the crate
//! needs from persistence: create, put, get, update, delete and a full scan.
//!
//! ## Why a trait
//!
//! Storage is injected rather than reached through a global handle:
//! - commands and the API are generic over it
//! - tests run against [`memory::InMemoryStore`] with no filesystem
//! - another document backend only has to implement six methods
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the whole catalog in one JSON document
//!   (`wisata.json`), rewritten atomically on every mutation.
//! - [`memory::InMemoryStore`]: in-process storage for tests, with a switch
//!   to simulate an unavailable backend.
//!
//! ## Write policy
//!
//! - `create` is strict and fails with `AlreadyExists` on a duplicate id.
//! - `put` is the upsert.
//! - `update` merges an [`AttractionPatch`]; absent fields are left alone.
//! - `delete` fails with `NotFound` when the id is absent. Idempotent delete
//!   is offered one level up, in `commands::delete`.
//!
//! ## Scans
//!
//! [`AttractionStore::scan`] yields every record once. Order is whatever the
//! backend holds; both bundled backends keep insertion order, which is what
//! the query engine's stable tie-breaking refers to as "scan order".
//! There are no secondary indexes: every query is a full scan.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── wisata.json    # JSON array of attraction records
//! └── config.json    # WisataConfig
//! ```

use crate::error::Result;
use crate::model::{Attraction, AttractionPatch};

pub mod fs;
pub mod memory;

/// A single pass over the catalog.
pub type Scan<'a> = Box<dyn Iterator<Item = Attraction> + 'a>;

/// Abstract interface for attraction storage.
pub trait AttractionStore {
    /// Insert a new record; fails if the id is taken.
    fn create(&mut self, record: &Attraction) -> Result<()>;

    /// Insert or replace a record wholesale.
    fn put(&mut self, record: &Attraction) -> Result<()>;

    /// Get a record by id.
    fn get(&self, id: &str) -> Result<Attraction>;

    /// Merge the supplied fields into a stored record and return the result.
    fn update(&mut self, id: &str, patch: &AttractionPatch) -> Result<Attraction>;

    /// Remove a record.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Iterate over every record.
    fn scan(&self) -> Result<Scan<'_>>;
}
