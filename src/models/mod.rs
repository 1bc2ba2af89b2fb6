pub mod balance;
pub mod coin;
pub mod notification;
pub mod queue;
pub mod sync;
pub mod transaction;
pub mod user;

pub use balance::*;
pub use coin::*;
pub use notification::*;
pub use queue::*;
pub use sync::*;
pub use transaction::*;
pub use user::*;
