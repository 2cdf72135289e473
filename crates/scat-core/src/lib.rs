//! scat-core
//!
//! Pure domain types for the SCAT6 and SCOAT6 concussion instruments:
//! reference word/digit lists, the assessment record model, section access
//! and storage key conventions. No I/O; this is the shared vocabulary of
//! the scoring, persistence and export crates.

pub mod access;
pub mod error;
pub mod keys;
pub mod models;
pub mod reference;

pub use models::instrument::{Assessment, InstrumentKind};
pub use models::scat6::Scat6Record;
pub use models::scoat6::Scoat6Record;
