//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for catalog operations, whatever front end is driving them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Fills in defaults** from [`WisataConfig`] (result limits, match mode,
//!   distance metric, photo endpoint)
//! - **Normalizes inputs** (raw coordinates → [`GeoPoint`], axis/value pairs
//!   → [`AxisFilter`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and `query/`
//! - **I/O to the terminal**: no stdout, stderr or formatting
//!
//! ## Generic Over AttractionStore
//!
//! `WisataApi<S: AttractionStore>`:
//! - Production: `WisataApi<FileStore>`
//! - Testing: `WisataApi<InMemoryStore>`
//!
//! API tests check dispatch and defaulting, not the algorithms underneath.

use crate::commands;
use crate::config::WisataConfig;
use crate::error::Result;
use crate::ingest::PlaceCandidate;
use crate::model::{Attraction, AttractionPatch, Axis, GeoPoint};
use crate::query::AxisFilter;
use crate::store::AttractionStore;
use std::path::{Path, PathBuf};

/// The main API facade for catalog operations.
pub struct WisataApi<S: AttractionStore> {
    store: S,
    config: WisataConfig,
    data_dir: PathBuf,
}

impl<S: AttractionStore> WisataApi<S> {
    pub fn new(store: S, config: WisataConfig, data_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            data_dir,
        }
    }

    pub fn create(&mut self, record: Attraction) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, record)
    }

    pub fn import(
        &mut self,
        candidates: Vec<PlaceCandidate>,
        classes: &AttractionPatch,
    ) -> Result<commands::CmdResult> {
        commands::import::run(
            &mut self.store,
            candidates,
            &self.config.photo_url_base,
            classes,
        )
    }

    pub fn get(&self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, ids)
    }

    pub fn update(&mut self, id: &str, patch: AttractionPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete(&mut self, ids: &[String], missing_ok: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids, missing_ok)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Look up by the supplied `(axis, value)` pairs; `None` values are
    /// treated as not supplied.
    pub fn find(&self, pairs: &[(Axis, Option<String>)]) -> Result<commands::CmdResult> {
        let filters = pairs
            .iter()
            .filter_map(|(axis, value)| value.as_ref().map(|v| AxisFilter::new(*axis, v.clone())))
            .collect();
        commands::find::run(&self.store, filters, self.config.match_mode)
    }

    pub fn top(&self, limit: Option<usize>) -> Result<commands::CmdResult> {
        commands::top::run(&self.store, limit.unwrap_or(self.config.top_limit))
    }

    pub fn nearest(
        &self,
        lat: Option<&str>,
        lng: Option<&str>,
        limit: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let origin = GeoPoint::parse(lat, lng)?;
        commands::nearest::run(
            &self.store,
            origin,
            limit.unwrap_or(self.config.nearest_limit),
            self.config.distance_metric,
        )
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn settings(&self) -> &WisataConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
