//! Booking engine: price a bike, persist the booking, flag the bike and
//! accept payment confirmation.

pub mod domain;
pub mod pricing;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::BookingService;
