//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! postbook operations, regardless of the client driving them.
//!
//! The facade dispatches to the appropriate command and returns structured
//! `Result<CmdResult>` values. It holds no business logic, performs no
//! terminal I/O, and never formats output; that belongs to the commands
//! and the CLI respectively.
//!
//! `PostbookApi<S: DataStore>` is generic over the storage backend:
//! `PostbookApi<FileStore>` in production, `PostbookApi<InMemoryStore>` in
//! tests.

use crate::commands;
use crate::error::Result;
use crate::store::{DataStore, LoadReport};
use std::path::{Path, PathBuf};

pub struct PostbookApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> PostbookApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    /// Fill the active set from the backing file. Called once at startup;
    /// diagnostics are reported, not fatal.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.store.reload()
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_record(&self, id: u32) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn add_record(&mut self, draft: commands::RecordDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn amend_record(
        &mut self,
        id: u32,
        patch: &commands::RecordPatch,
    ) -> Result<commands::CmdResult> {
        commands::amend::run(&mut self.store, id, patch)
    }

    pub fn delete_record(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_records(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn init(&self, data_file: &Path) -> Result<commands::CmdResult> {
        commands::init::run(data_file)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RecordDraft, RecordPatch};
