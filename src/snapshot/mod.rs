//! Session snapshots.
//!
//! This module provides serialization and deserialization for calculator
//! sessions, so a caller can capture a session (result register plus full
//! undo/redo history), ship it across a process boundary, and rebuild an
//! identical session later. The crate itself performs no I/O; what happens
//! to the encoded bytes is the caller's business.

use crate::core::{Calculator, History};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a complete calculator session.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use tally::{Calculator, Snapshot};
///
/// let mut calc = Calculator::new();
/// calc.add(Decimal::from(5)).unwrap();
/// calc.undo();
///
/// let json = Snapshot::capture(&calc).to_json().unwrap();
/// let restored = Snapshot::from_json(&json).unwrap().restore().unwrap();
///
/// assert_eq!(restored.result(), Decimal::ZERO);
/// assert!(restored.can_redo());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was captured
    pub timestamp: DateTime<Utc>,

    /// Result register at capture time
    pub result: Decimal,

    /// Complete undo/redo history at capture time
    pub history: History<Decimal>,
}

impl Snapshot {
    /// Capture the full state of a session.
    pub fn capture(calculator: &Calculator) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            result: calculator.result(),
            history: calculator.history().clone(),
        }
    }

    /// Rebuild a session from this snapshot.
    ///
    /// Rejects snapshots written by an incompatible format version.
    pub fn restore(&self) -> Result<Calculator, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(Calculator::from_parts(self.result, self.history.clone()))
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from binary.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}
