use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use common::pagination::Pagination;
use models::booking::{Booking, BookingState, BookingStatus};

use super::domain::{CreateBooking, NewBooking};
use super::repository::{BookingRepository, ItemRepository};
use crate::audit::{AuditEvent, AuditSink};
use crate::errors::ServiceError;
use crate::user::repository::UserRepository;

/// Booking workflow service: creation, owner approval, and state-filtered
/// listings.
pub struct BookingService<B, I, U>
where
    B: BookingRepository,
    I: ItemRepository,
    U: UserRepository,
{
    bookings: Arc<B>,
    items: Arc<I>,
    users: Arc<U>,
    audit: Arc<dyn AuditSink>,
}

impl<B, I, U> BookingService<B, I, U>
where
    B: BookingRepository,
    I: ItemRepository,
    U: UserRepository,
{
    pub fn new(bookings: Arc<B>, items: Arc<I>, users: Arc<U>, audit: Arc<dyn AuditSink>) -> Self {
        Self { bookings, items, users, audit }
    }

    /// Place a booking on an item. The booking starts out `Waiting` and
    /// snapshots the item and booker as they were at this moment.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use chrono::{Duration, Utc};
    /// use models::item::Item;
    /// use service::audit::TracingAuditSink;
    /// use service::booking::domain::NewBooking;
    /// use service::booking::repository::mock::{MockBookingRepository, MockItemRepository};
    /// use service::booking::BookingService;
    /// use service::user::repository::mock::MockUserRepository;
    /// use service::user::repository::UserRepository;
    /// let users = Arc::new(MockUserRepository::default());
    /// let items = Arc::new(MockItemRepository::default());
    /// let bookings = Arc::new(MockBookingRepository::default());
    /// let svc = BookingService::new(bookings, items.clone(), users.clone(), Arc::new(TracingAuditSink));
    /// let owner = tokio_test::block_on(users.create("Alice", "alice@example.com")).unwrap();
    /// let booker = tokio_test::block_on(users.create("Bob", "bob@example.com")).unwrap();
    /// let item = Item { id: uuid::Uuid::new_v4(), name: "drill".into(), owner: owner.id, available: true };
    /// items.put(item.clone());
    /// let start = Utc::now() + Duration::hours(1);
    /// let request = NewBooking { item_id: item.id, start, end: start + Duration::hours(2) };
    /// let booking = tokio_test::block_on(svc.add_booking(booker.id, request)).unwrap();
    /// assert_eq!(booking.booker.id, booker.id);
    /// ```
    #[instrument(skip(self, input), fields(booker_id = %requester_id, item_id = %input.item_id))]
    pub async fn add_booking(
        &self,
        requester_id: Uuid,
        input: NewBooking,
    ) -> Result<Booking, ServiceError> {
        if input.end <= input.start {
            return Err(ServiceError::Validation("booking end must be after its start".into()));
        }
        let booker = self
            .users
            .find_by_id(requester_id)
            .await?
            .ok_or(ServiceError::UserNotFound(requester_id))?;
        let item = self
            .items
            .find_by_id(input.item_id)
            .await?
            .ok_or(ServiceError::ItemNotFound(input.item_id))?;
        if item.owner == booker.id {
            return Err(ServiceError::AccessDenied("owners cannot book their own item".into()));
        }
        if !item.available {
            return Err(ServiceError::ItemUnavailable(item.id));
        }

        let created = self
            .bookings
            .create(CreateBooking {
                item,
                booker,
                start: input.start,
                end: input.end,
                status: BookingStatus::Waiting,
            })
            .await?;
        self.audit.record(&AuditEvent::BookingCreated {
            booking_id: created.id,
            item_id: created.item.id,
            booker_id: created.booker.id,
        });
        info!(booking_id = %created.id, "created booking");
        Ok(created)
    }

    /// Approve or reject a waiting booking. Only the item owner may do
    /// this, and only once: both outcomes are terminal.
    #[instrument(skip(self), fields(user_id = %user_id, booking_id = %booking_id))]
    pub async fn approve_booking(
        &self,
        user_id: Uuid,
        booking_id: Uuid,
        approved: bool,
    ) -> Result<Booking, ServiceError> {
        let mut booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or(ServiceError::BookingNotFound(booking_id))?;
        let owner = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound(user_id))?;
        if booking.item.owner != owner.id {
            return Err(ServiceError::AccessDenied(
                "only the item owner may approve or reject a booking".into(),
            ));
        }
        if booking.status != BookingStatus::Waiting {
            return Err(ServiceError::BookingUnavailable(booking_id));
        }

        booking.status = if approved { BookingStatus::Approved } else { BookingStatus::Rejected };
        let saved = self.bookings.update(booking).await?;
        self.audit.record(&AuditEvent::BookingResolved {
            booking_id: saved.id,
            owner_id: owner.id,
            status: saved.status,
        });
        info!(booking_id = %saved.id, status = %saved.status, "resolved booking");
        Ok(saved)
    }

    /// A booking is visible to the item owner and the booker, nobody else.
    pub async fn get_booking(&self, user_id: Uuid, booking_id: Uuid) -> Result<Booking, ServiceError> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or(ServiceError::BookingNotFound(booking_id))?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound(user_id))?;
        if booking.item.owner != user.id && booking.booker.id != user.id {
            return Err(ServiceError::AccessDenied(
                "only the item owner or the booker may view a booking".into(),
            ));
        }
        debug!(booking_id = %booking.id, "found booking");
        Ok(booking)
    }

    /// Bookings placed by `user_id`, filtered by `state`, newest first.
    pub async fn get_user_bookings(
        &self,
        user_id: Uuid,
        state: BookingState,
    ) -> Result<Vec<Booking>, ServiceError> {
        self.check_user(user_id).await?;
        let now = Utc::now();
        let bookings = match state {
            BookingState::All => self.bookings.all_by_booker(user_id).await?,
            BookingState::Past => self.bookings.past_by_booker(user_id, now).await?,
            BookingState::Current => self.bookings.current_by_booker(user_id, now).await?,
            BookingState::Future => self.bookings.future_by_booker(user_id, now).await?,
            BookingState::Waiting => {
                self.bookings.by_booker_and_status(user_id, BookingStatus::Waiting).await?
            }
            BookingState::Rejected => {
                self.bookings.by_booker_and_status(user_id, BookingStatus::Rejected).await?
            }
        };
        debug!(booker_id = %user_id, state = %state, count = bookings.len(), "listed bookings by booker");
        Ok(bookings)
    }

    /// Bookings on items owned by `user_id`, filtered by `state`, newest
    /// first.
    pub async fn get_user_items_bookings(
        &self,
        user_id: Uuid,
        state: BookingState,
    ) -> Result<Vec<Booking>, ServiceError> {
        self.check_user(user_id).await?;
        let now = Utc::now();
        let bookings = match state {
            BookingState::All => self.bookings.all_by_item_owner(user_id).await?,
            BookingState::Past => self.bookings.past_by_item_owner(user_id, now).await?,
            BookingState::Current => self.bookings.current_by_item_owner(user_id, now).await?,
            BookingState::Future => self.bookings.future_by_item_owner(user_id, now).await?,
            BookingState::Waiting => {
                self.bookings.by_item_owner_and_status(user_id, BookingStatus::Waiting).await?
            }
            BookingState::Rejected => {
                self.bookings.by_item_owner_and_status(user_id, BookingStatus::Rejected).await?
            }
        };
        debug!(owner_id = %user_id, state = %state, count = bookings.len(), "listed bookings by item owner");
        Ok(bookings)
    }

    /// Same sequence as [`Self::get_user_bookings`], sliced to one page.
    pub async fn get_user_bookings_paginated(
        &self,
        user_id: Uuid,
        state: BookingState,
        opts: Pagination,
    ) -> Result<Vec<Booking>, ServiceError> {
        let bookings = self.get_user_bookings(user_id, state).await?;
        Ok(opts.slice(bookings))
    }

    async fn check_user(&self, user_id: Uuid) -> Result<(), ServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound(user_id))?;
        Ok(())
    }
}
