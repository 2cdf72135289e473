//! scat-storage
//!
//! Draft persistence for in-progress assessments: a timestamped envelope,
//! pluggable key/value stores and a debounced autosave manager with
//! staleness-aware recovery.

pub mod draft;
pub mod envelope;
pub mod error;
pub mod store;

pub use draft::{DraftManager, DraftSettings, DraftState, LegacyDrafts, PendingDraft, Recovery};
pub use store::{DraftStore, FileStore, MemoryStore};
