use std::sync::Arc;

use chrono::{Duration, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use models::booking::BookingState;
use models::item::Item;
use service::audit::TracingAuditSink;
use service::booking::domain::NewBooking;
use service::booking::repository::mock::{MockBookingRepository, MockItemRepository};
use service::booking::BookingService;
use service::user::repository::mock::MockUserRepository;
use service::user::repository::UserRepository;

fn bench_state_filtering(c: &mut Criterion) {
    let users = Arc::new(MockUserRepository::default());
    let items = Arc::new(MockItemRepository::default());
    let bookings = Arc::new(MockBookingRepository::default());
    let svc = BookingService::new(bookings, items.clone(), users.clone(), Arc::new(TracingAuditSink));

    // seed a busy booker outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    let owner = rt.block_on(users.create("Owner", "owner@example.com")).unwrap();
    let booker = rt.block_on(users.create("Booker", "booker@example.com")).unwrap();
    let item = Item { id: uuid::Uuid::new_v4(), name: "drill".into(), owner: owner.id, available: true };
    items.put(item.clone());
    for i in 0..256i64 {
        let start = Utc::now() + Duration::hours(i - 128);
        let request = NewBooking { item_id: item.id, start, end: start + Duration::minutes(30) };
        let _ = rt.block_on(svc.add_booking(booker.id, request)).unwrap();
    }

    c.bench_function("booker_current_filter", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.get_user_bookings(booker.id, BookingState::Current)).unwrap();
        });
    });
}

criterion_group!(benches, bench_state_filtering);
criterion_main!(benches);
