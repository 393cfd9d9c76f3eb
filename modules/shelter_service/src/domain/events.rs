//! Domain events for the shelter service
//!
//! Every successful mutation of an RSL or staff record produces one event.
//! Publishing is best effort: a failed publish is logged and the mutation
//! still succeeds.

use crate::contract::model::{Rsl, Staff};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of record an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Rsl,
    Staff,
}

/// Domain event types for records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum RecordEvent {
    Created(RecordChange),
    Updated(RecordChange),
    Deleted(RecordChange),
}

/// Event payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordChange {
    pub resource: ResourceKind,
    pub id: Uuid,
    /// Human-readable label (RSL name, staff full name)
    pub label: String,
    pub timestamp: DateTime<Utc>,
}

impl RecordEvent {
    pub fn rsl_created(rsl: &Rsl) -> Self {
        RecordEvent::Created(RecordChange::rsl(rsl))
    }

    pub fn rsl_updated(rsl: &Rsl) -> Self {
        RecordEvent::Updated(RecordChange::rsl(rsl))
    }

    pub fn rsl_deleted(rsl: &Rsl) -> Self {
        RecordEvent::Deleted(RecordChange::rsl(rsl))
    }

    pub fn staff_created(staff: &Staff) -> Self {
        RecordEvent::Created(RecordChange::staff(staff))
    }

    pub fn staff_updated(staff: &Staff) -> Self {
        RecordEvent::Updated(RecordChange::staff(staff))
    }

    pub fn staff_deleted(staff: &Staff) -> Self {
        RecordEvent::Deleted(RecordChange::staff(staff))
    }

    pub fn action(&self) -> &'static str {
        match self {
            RecordEvent::Created(_) => "created",
            RecordEvent::Updated(_) => "updated",
            RecordEvent::Deleted(_) => "deleted",
        }
    }

    pub fn change(&self) -> &RecordChange {
        match self {
            RecordEvent::Created(c) | RecordEvent::Updated(c) | RecordEvent::Deleted(c) => c,
        }
    }
}

impl RecordChange {
    fn rsl(rsl: &Rsl) -> Self {
        Self {
            resource: ResourceKind::Rsl,
            id: rsl.id,
            label: rsl.name.clone(),
            timestamp: Utc::now(),
        }
    }

    fn staff(staff: &Staff) -> Self {
        Self {
            resource: ResourceKind::Staff,
            id: staff.id,
            label: format!("{} {}", staff.first_name, staff.last_name),
            timestamp: Utc::now(),
        }
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: RecordEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: RecordEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Log target used for audit lines
pub const AUDIT_TARGET: &str = "shelterconnect_audit";

/// Writes events as structured audit log lines
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: RecordEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(&event)?;
        let change = event.change();
        tracing::info!(
            target: AUDIT_TARGET,
            action = event.action(),
            resource = ?change.resource,
            id = %change.id,
            label = %change.label,
            payload = %payload,
            "record event"
        );
        Ok(())
    }
}
