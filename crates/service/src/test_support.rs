#![cfg(test)]
//! Shared fixtures for service tests, built on the in-memory repositories.

use std::sync::Arc;

use uuid::Uuid;

use models::item::Item;
use models::user::User;

use crate::audit::mock::RecordingAuditSink;
use crate::booking::repository::mock::{MockBookingRepository, MockItemRepository};
use crate::booking::BookingService;
use crate::user::repository::mock::MockUserRepository;
use crate::user::repository::UserRepository;
use crate::user::UserService;

pub struct UserFixture {
    pub service: UserService<MockUserRepository>,
    pub audit: Arc<RecordingAuditSink>,
}

pub fn user_fixture() -> UserFixture {
    common::utils::logging::init_logging_default();
    let repo = Arc::new(MockUserRepository::default());
    let audit = Arc::new(RecordingAuditSink::default());
    let service = UserService::new(repo, audit.clone());
    UserFixture { service, audit }
}

pub struct BookingFixture {
    pub service: BookingService<MockBookingRepository, MockItemRepository, MockUserRepository>,
    pub users: Arc<MockUserRepository>,
    pub items: Arc<MockItemRepository>,
    pub audit: Arc<RecordingAuditSink>,
}

impl BookingFixture {
    pub async fn seed_user(&self, name: &str, email: &str) -> User {
        self.users.create(name, email).await.unwrap()
    }

    /// Seed an item as the item subsystem would have stored it.
    pub fn seed_item(&self, owner: Uuid, available: bool) -> Item {
        let item = Item { id: Uuid::new_v4(), name: "cordless drill".into(), owner, available };
        self.items.put(item.clone());
        item
    }
}

pub fn booking_fixture() -> BookingFixture {
    common::utils::logging::init_logging_default();
    let users = Arc::new(MockUserRepository::default());
    let items = Arc::new(MockItemRepository::default());
    let bookings = Arc::new(MockBookingRepository::default());
    let audit = Arc::new(RecordingAuditSink::default());
    let service = BookingService::new(bookings, items.clone(), users.clone(), audit.clone());
    BookingFixture { service, users, items, audit }
}

/// Owner, booker, and one available item: the setup most booking tests need.
pub async fn rented_item_fixture() -> (BookingFixture, User, User, Item) {
    let fx = booking_fixture();
    let owner = fx.seed_user("Alice", "alice@example.com").await;
    let booker = fx.seed_user("Bob", "bob@example.com").await;
    let item = fx.seed_item(owner.id, true);
    (fx, owner, booker, item)
}
