pub mod announcements;
pub mod auth;
pub mod chat;
pub mod orders;
pub mod points;
pub mod products;
pub mod returns;
pub mod validation;

pub use validation::ValidationError;
