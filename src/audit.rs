//! Best-effort audit trail.
//!
//! Every successful write produces an [`AuditEntry`]. Sinks may fail; the
//! engine logs the failure and carries on, so an audit outage never fails the
//! business operation that triggered it.

use std::net::IpAddr;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Actor;

/// One audited change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// The kind of change, e.g. `CREATE`, `INSERT`, `UPSERT`.
    pub action: String,
    /// The entity type, e.g. `attendance_period`.
    pub entity: String,
    /// Id of the changed record.
    pub record_id: String,
    /// The actor who made the change.
    pub actor_id: String,
    /// Where the request came from.
    pub origin: Option<IpAddr>,
    /// The change itself.
    pub payload: serde_json::Value,
    /// When the change was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Builds an entry attributed to `actor`.
    pub fn new(
        action: &str,
        entity: &str,
        record_id: impl Into<String>,
        actor: &Actor,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            action: action.to_string(),
            entity: entity.to_string(),
            record_id: record_id.into(),
            actor_id: actor.employee_id.clone(),
            origin: actor.origin,
            payload,
            recorded_at: Utc::now(),
        }
    }
}

/// Destination for audit entries.
pub trait AuditSink: Send + Sync {
    /// Records one entry.
    fn record(&self, entry: AuditEntry) -> EngineResult<()>;
}

/// Emits audit entries as `tracing` events on the `audit` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: AuditEntry) -> EngineResult<()> {
        info!(
            target: "audit",
            action = %entry.action,
            entity = %entry.entity,
            record_id = %entry.record_id,
            actor_id = %entry.actor_id,
            origin = ?entry.origin,
            payload = %entry.payload,
            "audit"
        );
        Ok(())
    }
}

/// Keeps audit entries in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded entry, oldest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, entry: AuditEntry) -> EngineResult<()> {
        self.entries
            .lock()
            .map_err(|_| EngineError::Storage {
                message: "audit log lock poisoned".to_string(),
            })?
            .push(entry);
        Ok(())
    }
}
