use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::booking::BookingStatus;
use models::item::Item;
use models::user::User;

/// Booking request as submitted by the booker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub item_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Fully assembled booking record awaiting a store-assigned id.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub item: Item,
    pub booker: User,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
}
