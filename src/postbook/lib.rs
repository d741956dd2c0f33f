//! # Postbook Architecture
//!
//! Postbook is a **UI-agnostic record-keeping library** for a small set of
//! post-office customer entries, with a CLI client on top. The library owns
//! the data; the binary only parses arguments and formats output.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs)                               │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: add, amend, delete, show, search    │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (CSV, production), InMemoryStore (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The synchronization model
//!
//! The store owns the in-memory record set; every mutating command rewrites
//! the whole data file before returning, so memory and disk never drift for
//! longer than one operation. There is no locking and no partial-write
//! recovery: the crate is strictly single-user, single-threaded, and a
//! crash mid-save can truncate the file.
//!
//! ## Error model
//!
//! Recoverable problems (bad rows on load, lookups that miss, invalid input
//! values) become leveled messages and `tracing` entries and never abort an
//! operation. Only I/O failures propagate as `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, the `FIELDS` schema)
//! - [`validate`]: Field validators shared by load and entry
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
