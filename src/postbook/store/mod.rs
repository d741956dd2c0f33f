//! # Storage Layer
//!
//! The [`DataStore`] trait pairs the in-memory record set with the
//! persistent file behind it. There is exactly one reader and one writer per
//! process, so the store owns the active set outright and the trait exposes
//! it directly; callers that mutate must call [`DataStore::persist`] before
//! returning.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from the on-disk format
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production CSV-backed storage
//!   - Header row from the declared [`crate::model::FIELDS`] schema
//!   - One row per record, quoted as needed for embedded delimiters
//!   - Every save fully rewrites the file; there is no append path and no
//!     backup of the previous contents
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Snapshots the last persisted set so tests can assert what would
//!     have reached disk
//!
//! ## Load semantics
//!
//! Loading admits rows one at a time. A row is skipped (never merged, never
//! fatal) when its id was already admitted in the same pass or when it fails
//! deserialization or field validation. Each skip produces a [`Diagnostic`]
//! carrying the 1-indexed row number and the raw row content; diagnostics
//! are logged as they occur and returned in the [`LoadReport`]. Only an
//! unopenable file aborts the load.

use crate::error::Result;
use crate::model::Record;
use std::fmt;

pub mod fs;
pub mod memory;

/// A non-fatal notice recorded while loading the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A row whose id was already admitted earlier in the same load pass.
    DuplicateId { row: usize, id: u32, raw: String },
    /// A row that failed deserialization or field validation.
    CorruptRow { row: usize, raw: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateId { row, id, raw } => {
                write!(f, "duplicate id {} at row {}: {}", id, row, raw)
            }
            Diagnostic::CorruptRow { row, raw } => {
                write!(f, "corrupt data at row {}: {}", row, raw)
            }
        }
    }
}

/// Outcome of a [`DataStore::reload`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records admitted to the active set.
    pub loaded: usize,
    /// Rows skipped, in file order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Abstract interface for record storage.
///
/// Implementations own both the active record set and the backing storage
/// it is synchronized with.
pub trait DataStore {
    /// Replace the active set with the backing storage's contents.
    fn reload(&mut self) -> Result<LoadReport>;

    /// Rewrite the backing storage from the active set, replacing whatever
    /// was there before.
    fn persist(&mut self) -> Result<()>;

    /// The active set, in file order.
    fn records(&self) -> &[Record];

    /// Mutable access to the active set. Mutations are not durable until
    /// `persist` is called.
    fn records_mut(&mut self) -> &mut Vec<Record>;
}
