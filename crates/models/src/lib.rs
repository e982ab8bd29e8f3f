pub mod errors;
pub mod db;
pub mod publish;
pub mod user;
pub mod user_credentials;
pub mod location;
pub mod buybike;
pub mod booking;
pub mod contact_submission;
pub mod content;

pub use publish::{published, Publishable};

#[cfg(test)]
mod tests;
