//! Serialization formats.

pub mod persistence;

pub use persistence::{SnapshotHeader, ir_from_bytes, ir_to_bytes};

#[cfg(feature = "crypto-hash")]
pub use persistence::ir_checksum;
