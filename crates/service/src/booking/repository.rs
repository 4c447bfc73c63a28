use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use models::booking::{Booking, BookingStatus};
use models::item::Item;

use super::domain::CreateBooking;
use crate::errors::ServiceError;

/// Read-only view of the item store. Items are owned and mutated by the
/// item subsystem; this core only resolves them.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, ServiceError>;
}

/// Repository abstraction for booking persistence. Every query method
/// returns its results ordered by start time, newest first.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking; the store assigns the id.
    async fn create(&self, event: CreateBooking) -> Result<Booking, ServiceError>;
    async fn update(&self, booking: Booking) -> Result<Booking, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, ServiceError>;

    async fn all_by_booker(&self, booker_id: Uuid) -> Result<Vec<Booking>, ServiceError>;
    /// Bookings whose window ended before `now`.
    async fn past_by_booker(
        &self,
        booker_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, ServiceError>;
    /// Bookings whose window contains `now`, boundaries inclusive.
    async fn current_by_booker(
        &self,
        booker_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, ServiceError>;
    /// Bookings whose window starts after `now`.
    async fn future_by_booker(
        &self,
        booker_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, ServiceError>;
    async fn by_booker_and_status(
        &self,
        booker_id: Uuid,
        status: BookingStatus,
    ) -> Result<Vec<Booking>, ServiceError>;

    async fn all_by_item_owner(&self, owner_id: Uuid) -> Result<Vec<Booking>, ServiceError>;
    async fn past_by_item_owner(
        &self,
        owner_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, ServiceError>;
    async fn current_by_item_owner(
        &self,
        owner_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, ServiceError>;
    async fn future_by_item_owner(
        &self,
        owner_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, ServiceError>;
    async fn by_item_owner_and_status(
        &self,
        owner_id: Uuid,
        status: BookingStatus,
    ) -> Result<Vec<Booking>, ServiceError>;
}

/// Simple in-memory repositories for tests and doc examples
pub mod mock {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct MockItemRepository {
        items: Mutex<HashMap<Uuid, Item>>,
    }

    impl MockItemRepository {
        /// Seed an item as the item subsystem would have stored it.
        pub fn put(&self, item: Item) {
            self.items.lock().unwrap().insert(item.id, item);
        }
    }

    #[async_trait]
    impl ItemRepository for MockItemRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, ServiceError> {
            Ok(self.items.lock().unwrap().get(&id).cloned())
        }
    }

    #[derive(Default)]
    pub struct MockBookingRepository {
        bookings: Mutex<Vec<Booking>>,
    }

    impl MockBookingRepository {
        fn select(&self, pred: impl Fn(&Booking) -> bool) -> Vec<Booking> {
            let bookings = self.bookings.lock().unwrap();
            let mut hits: Vec<Booking> = bookings.iter().filter(|b| pred(b)).cloned().collect();
            hits.sort_by(|a, b| b.start.cmp(&a.start));
            hits
        }
    }

    #[async_trait]
    impl BookingRepository for MockBookingRepository {
        async fn create(&self, event: CreateBooking) -> Result<Booking, ServiceError> {
            let booking = Booking {
                id: Uuid::new_v4(),
                item: event.item,
                booker: event.booker,
                start: event.start,
                end: event.end,
                status: event.status,
            };
            self.bookings.lock().unwrap().push(booking.clone());
            Ok(booking)
        }

        async fn update(&self, booking: Booking) -> Result<Booking, ServiceError> {
            let mut bookings = self.bookings.lock().unwrap();
            match bookings.iter_mut().find(|b| b.id == booking.id) {
                Some(slot) => {
                    *slot = booking.clone();
                    Ok(booking)
                }
                None => Err(ServiceError::BookingNotFound(booking.id)),
            }
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, ServiceError> {
            Ok(self.bookings.lock().unwrap().iter().find(|b| b.id == id).cloned())
        }

        async fn all_by_booker(&self, booker_id: Uuid) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.booker.id == booker_id))
        }

        async fn past_by_booker(
            &self,
            booker_id: Uuid,
            now: DateTime<Utc>,
        ) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.booker.id == booker_id && b.is_past(now)))
        }

        async fn current_by_booker(
            &self,
            booker_id: Uuid,
            now: DateTime<Utc>,
        ) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.booker.id == booker_id && b.is_current(now)))
        }

        async fn future_by_booker(
            &self,
            booker_id: Uuid,
            now: DateTime<Utc>,
        ) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.booker.id == booker_id && b.is_future(now)))
        }

        async fn by_booker_and_status(
            &self,
            booker_id: Uuid,
            status: BookingStatus,
        ) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.booker.id == booker_id && b.status == status))
        }

        async fn all_by_item_owner(&self, owner_id: Uuid) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.item.owner == owner_id))
        }

        async fn past_by_item_owner(
            &self,
            owner_id: Uuid,
            now: DateTime<Utc>,
        ) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.item.owner == owner_id && b.is_past(now)))
        }

        async fn current_by_item_owner(
            &self,
            owner_id: Uuid,
            now: DateTime<Utc>,
        ) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.item.owner == owner_id && b.is_current(now)))
        }

        async fn future_by_item_owner(
            &self,
            owner_id: Uuid,
            now: DateTime<Utc>,
        ) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.item.owner == owner_id && b.is_future(now)))
        }

        async fn by_item_owner_and_status(
            &self,
            owner_id: Uuid,
            status: BookingStatus,
        ) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.select(|b| b.item.owner == owner_id && b.status == status))
        }
    }
}
