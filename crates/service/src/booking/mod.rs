//! Booking module: three-layer structure (domain, repository, service).
//!
//! Creation and approval both run their guards before any write reaches
//! the store, so a failed call leaves no partial effects behind.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::BookingService;
