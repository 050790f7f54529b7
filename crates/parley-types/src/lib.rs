pub mod menu;
pub mod page;
pub mod protocol;

pub use menu::*;
pub use page::*;
pub use protocol::*;
