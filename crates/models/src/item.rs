use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rental item. Owned and mutated by the item subsystem; this core only
/// reads it when placing bookings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub owner: Uuid,
    pub available: bool,
}
