pub use self::display_ticket_type::*;
pub use self::event_list_item::*;
pub use self::event_show_result::*;
pub use self::path_parameters::*;
pub use self::register_request::*;

mod display_ticket_type;
mod event_list_item;
mod event_show_result;
mod path_parameters;
mod register_request;
