//! # IR Snapshot Format
//!
//! Binary encoding of a [`DialecticIR`] for export and for the directory
//! resolver. File I/O stays with the caller.
//!
//! Format: Header (5 bytes) + postcard-serialized IR.
//! - 4 bytes: Magic ("DIAL")
//! - 1 byte: Version
//!
//! Size and header are checked before the payload is decoded, and decoded
//! aggregates are validated like any other IR.

use crate::model::DialecticIR;
use crate::{DialecticError, primitives};

const HEADER_LEN: usize = 5;

/// The header preceding every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u8,
}

impl SnapshotHeader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            magic: *primitives::MAGIC_BYTES,
            version: primitives::FORMAT_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), DialecticError> {
        if &self.magic != primitives::MAGIC_BYTES {
            return Err(DialecticError::DeserializationError(
                "Invalid magic bytes".to_string(),
            ));
        }
        if self.version != primitives::FORMAT_VERSION {
            return Err(DialecticError::DeserializationError(format!(
                "Unsupported version: {} (expected {})",
                self.version,
                primitives::FORMAT_VERSION
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DialecticError> {
        let header: &[u8; HEADER_LEN] = bytes
            .get(..HEADER_LEN)
            .and_then(|h| h.try_into().ok())
            .ok_or_else(|| DialecticError::DeserializationError("Header too short".to_string()))?;
        let [m0, m1, m2, m3, version] = *header;
        Ok(Self {
            magic: [m0, m1, m2, m3],
            version,
        })
    }
}

impl Default for SnapshotHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode an aggregate as header + payload.
pub fn ir_to_bytes(ir: &DialecticIR) -> Result<Vec<u8>, DialecticError> {
    let payload =
        postcard::to_stdvec(ir).map_err(|e| DialecticError::SerializationError(e.to_string()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&SnapshotHeader::new().to_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode and validate a snapshot.
pub fn ir_from_bytes(bytes: &[u8]) -> Result<DialecticIR, DialecticError> {
    if bytes.len() > primitives::MAX_SNAPSHOT_SIZE {
        return Err(DialecticError::DeserializationError(format!(
            "Snapshot size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            primitives::MAX_SNAPSHOT_SIZE
        )));
    }

    SnapshotHeader::from_bytes(bytes)?.validate()?;

    let payload = bytes.get(HEADER_LEN..).unwrap_or_default();
    let ir: DialecticIR = postcard::from_bytes(payload).map_err(|e| {
        DialecticError::DeserializationError(format!("Failed to decode IR snapshot: {e}"))
    })?;
    ir.validate()?;
    Ok(ir)
}

/// BLAKE3 hex digest of the snapshot encoding.
///
/// Only available with the `crypto-hash` feature.
#[cfg(feature = "crypto-hash")]
pub fn ir_checksum(ir: &DialecticIR) -> Result<String, DialecticError> {
    let bytes = ir_to_bytes(ir)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus;

    #[test]
    fn header_roundtrip() {
        let header = SnapshotHeader::new();
        let restored = SnapshotHeader::from_bytes(&header.to_bytes()).expect("parse header");
        assert_eq!(restored, header);
    }

    #[test]
    fn snapshot_is_bit_exact() {
        let ir = corpus::becoming_ir();
        let first = ir_to_bytes(&ir).expect("encode");
        let decoded = ir_from_bytes(&first).expect("decode");
        assert_eq!(decoded, ir);
        assert_eq!(ir_to_bytes(&decoded).expect("encode"), first);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = ir_to_bytes(&corpus::becoming_ir()).expect("encode");
        bytes[0] = b'X';
        let err = ir_from_bytes(&bytes).expect_err("bad magic");
        assert!(err.to_string().contains("magic"));
    }

    #[test]
    fn rejects_future_version() {
        let mut bytes = ir_to_bytes(&corpus::becoming_ir()).expect("encode");
        bytes[4] = primitives::FORMAT_VERSION + 1;
        assert!(ir_from_bytes(&bytes).is_err());
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(ir_from_bytes(b"DIA").is_err());
        let bytes = ir_to_bytes(&corpus::becoming_ir()).expect("encode");
        assert!(ir_from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }

    #[cfg(feature = "crypto-hash")]
    #[test]
    fn checksum_is_stable() {
        let ir = corpus::becoming_ir();
        let a = ir_checksum(&ir).expect("checksum");
        let b = ir_checksum(&ir).expect("checksum");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }
}
