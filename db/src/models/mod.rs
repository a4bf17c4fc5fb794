pub use self::coupons::*;
pub use self::enums::*;
pub use self::events::*;
pub use self::favorites::*;
pub use self::for_display::*;
pub use self::notifications::*;
pub use self::order_items::*;
pub use self::orders::*;
pub use self::scopes::*;
pub use self::ticket_types::*;
pub use self::tickets::*;
pub use self::users::*;

mod coupons;
pub mod enums;
mod events;
mod favorites;
mod for_display;
mod notifications;
mod order_items;
mod orders;
pub mod scopes;
mod ticket_types;
mod tickets;
mod users;
