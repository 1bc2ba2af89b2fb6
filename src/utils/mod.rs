pub mod browser;
pub mod events;
pub mod format;
pub mod storage;

pub use browser::*;
pub use events::*;
pub use format::*;
pub use storage::*;
