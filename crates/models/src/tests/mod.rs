/// Field validation tests for user input
pub mod validation_tests;

/// Booking window predicates and state parsing tests
pub mod booking_tests;
