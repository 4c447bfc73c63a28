use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::booking::{Booking, BookingState, BookingStatus};
use crate::item::Item;
use crate::user::User;

fn booking(start_offset: Duration, end_offset: Duration) -> Booking {
    let now = Utc::now();
    let owner = Uuid::new_v4();
    Booking {
        id: Uuid::new_v4(),
        item: Item {
            id: Uuid::new_v4(),
            name: "drill".into(),
            owner,
            available: true,
        },
        booker: User {
            id: Uuid::new_v4(),
            name: "Bob".into(),
            email: "bob@example.com".into(),
        },
        start: now + start_offset,
        end: now + end_offset,
        status: BookingStatus::Waiting,
    }
}

#[test]
fn window_predicates_partition_the_timeline() {
    let now = Utc::now();

    let past = booking(Duration::hours(-3), Duration::hours(-1));
    assert!(past.is_past(now));
    assert!(!past.is_current(now));
    assert!(!past.is_future(now));

    let current = booking(Duration::hours(-1), Duration::hours(1));
    assert!(!current.is_past(now));
    assert!(current.is_current(now));
    assert!(!current.is_future(now));

    let future = booking(Duration::hours(1), Duration::hours(3));
    assert!(!future.is_past(now));
    assert!(!future.is_current(now));
    assert!(future.is_future(now));
}

#[test]
fn window_boundaries_are_inclusive() {
    let b = booking(Duration::zero(), Duration::hours(2));
    assert!(b.is_current(b.start));
    assert!(b.is_current(b.end));
    assert!(!b.is_past(b.end));
    assert!(!b.is_future(b.start));
}

#[test]
fn state_parses_case_insensitively() {
    assert_eq!("ALL".parse::<BookingState>().unwrap(), BookingState::All);
    assert_eq!("current".parse::<BookingState>().unwrap(), BookingState::Current);
    assert_eq!("Future".parse::<BookingState>().unwrap(), BookingState::Future);
}

#[test]
fn state_rejects_unknown_values() {
    let err = "UNSUPPORTED".parse::<BookingState>().unwrap_err();
    assert!(err.to_string().contains("unknown state"));
}

#[test]
fn status_encodes_as_screaming_snake_case() {
    let encoded = serde_json::to_string(&BookingStatus::Waiting).unwrap();
    assert_eq!(encoded, "\"WAITING\"");
    assert_eq!(BookingStatus::Approved.to_string(), "APPROVED");
}
