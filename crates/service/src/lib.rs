//! Business services for the bike marketplace: catalog, bookings, page
//! content, contact form, accounts and outbound mail.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod contact;
pub mod content;
pub mod errors;
pub mod media;
pub mod metrics;
pub mod notifier;
pub mod pagination;

pub use errors::{FieldErrors, ServiceError};
