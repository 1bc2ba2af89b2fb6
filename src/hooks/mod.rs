pub mod use_connection;
pub mod use_notifications;
pub mod use_window_event;

pub use use_connection::*;
pub use use_notifications::*;
pub use use_window_event::*;
