mod coupons;
mod events;
mod favorites;
mod notifications;
mod orders;
mod ticket_types;
mod users;
