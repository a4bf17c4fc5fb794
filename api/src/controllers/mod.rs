pub mod auth;
pub mod events;
pub mod favorites;
pub mod notifications;
pub mod orders;
pub mod status;
pub mod ticket_types;
pub mod users;
