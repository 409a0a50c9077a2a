//! # Wisata Architecture
//!
//! Wisata is a **tourist-attraction catalog library**: it stores attraction
//! records and answers lookup and ranking queries over them. The bundled CLI
//! is one client of the library; an HTTP service would be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies config defaults       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                             │
//!                 ▼                             ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Query Engine (query/)        │ │  Storage Layer (store/)   │
//! │  - filter, rank, project      │ │  - AttractionStore trait  │
//! │  - pure, never mutates        │ │  - FileStore, InMemory    │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! A read goes: store scan → query engine filter/rank → projection →
//! `CmdResult`. Writes go straight from the command to the store.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types.
//! It never prints and never exits. Logging goes through `tracing`; the
//! binary decides where it ends up.
//!
//! ## Testing Strategy
//!
//! 1. **Query engine** (`query/*.rs`): the ranking and filtering properties.
//! 2. **Commands** (`commands/*.rs`): behaviour against `InMemoryStore`.
//! 3. **Store** (`store/*.rs`): persistence and error mapping.
//! 4. **CLI** (`tests/`): the binary end to end against a temp data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`query`]: Filtering, ranking, distance and projection
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Attraction`, `AttractionPatch`, `Axis`, `GeoPoint`
//! - [`ingest`]: Turning places-lookup candidates into records
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod model;
pub mod query;
pub mod store;
