//! Clinic Registry - persisted patient records
//!
//! The registry is a single JSON array on disk. Every operation reloads the
//! whole file, mutates it in memory and rewrites it; nothing is cached between
//! calls and no record is ever handed out as a live reference.

pub mod record;
pub mod store;

pub use record::PatientRecord;
pub use store::RegistryStore;
