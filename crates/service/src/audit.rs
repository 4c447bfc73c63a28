use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use models::booking::BookingStatus;

/// Emitted after each successful mutation. Reads never audit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum AuditEvent {
    UserCreated { user_id: Uuid },
    UserUpdated { user_id: Uuid },
    UserDeleted { user_id: Uuid },
    BookingCreated { booking_id: Uuid, item_id: Uuid, booker_id: Uuid },
    BookingResolved { booking_id: Uuid, owner_id: Uuid, status: BookingStatus },
}

/// Observer for audit events. Auditing is an observable side effect, not
/// part of the functional contract, so sinks are infallible.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: &AuditEvent);
}

/// Default sink forwarding events to `tracing` under the `audit` target.
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: &AuditEvent) {
        match event {
            AuditEvent::UserCreated { user_id } => {
                info!(target: "audit", %user_id, "user_created");
            }
            AuditEvent::UserUpdated { user_id } => {
                info!(target: "audit", %user_id, "user_updated");
            }
            AuditEvent::UserDeleted { user_id } => {
                info!(target: "audit", %user_id, "user_deleted");
            }
            AuditEvent::BookingCreated { booking_id, item_id, booker_id } => {
                info!(target: "audit", %booking_id, %item_id, %booker_id, "booking_created");
            }
            AuditEvent::BookingResolved { booking_id, owner_id, status } => {
                info!(target: "audit", %booking_id, %owner_id, %status, "booking_resolved");
            }
        }
    }
}

/// Recording sink for tests and doc examples
pub mod mock {
    use std::sync::Mutex;

    use super::{AuditEvent, AuditSink};

    #[derive(Default)]
    pub struct RecordingAuditSink {
        events: Mutex<Vec<AuditEvent>>,
    }

    impl RecordingAuditSink {
        pub fn events(&self) -> Vec<AuditEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl AuditSink for RecordingAuditSink {
        fn record(&self, event: &AuditEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }
}
