//! Record of who changed which glider data and when.

use crate::info;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

/// One recorded edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    timestamp: DateTime<Utc>,
    username: String,
    event: String,
}

impl AuditEvent {
    pub fn new(username: &str, event: &str) -> Self {
        Self { timestamp: Utc::now(), username: String::from(username), event: String::from(event) }
    }

    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
    pub fn username(&self) -> &str { &self.username }
    pub fn event(&self) -> &str { &self.event }
}

/// Sink for edit events. Implementations must be usable through a shared reference.
pub trait AuditLog {
    fn log(&self, username: &str, event: &str);
    /// Events recorded so far, oldest first.
    fn events(&self) -> Vec<AuditEvent>;
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self { Self::default() }
}

impl AuditLog for MemoryAuditLog {
    fn log(&self, username: &str, event: &str) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(AuditEvent::new(username, event));
    }

    fn events(&self) -> Vec<AuditEvent> { self.events.lock().unwrap_or_else(PoisonError::into_inner).clone() }
}

/// Prints every event to the console and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAuditLog;

impl AuditLog for ConsoleAuditLog {
    fn log(&self, username: &str, event: &str) {
        info!("[AUDIT] {username}: {event}");
    }

    fn events(&self) -> Vec<AuditEvent> { Vec::new() }
}
