//! # Persistence Layer
//!
//! Preferences and paste history go through the [`PrefStore`] trait, a
//! plain string key-value interface. The core never touches the
//! filesystem directly; callers inject a store.
//!
//! - [`fs::FileStore`]: production store, one JSON file per data dir.
//! - [`memory::InMemoryStore`]: test store, no persistence.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the smart-paste history list is stored.
pub const HISTORY_KEY: &str = "paste_history";

/// Abstract key-value persistence for preferences and history.
pub trait PrefStore {
    /// Save a value under a key (create or overwrite).
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Load the value for a key, or `None` if it was never saved.
    fn load(&self, key: &str) -> Result<Option<String>>;
}
