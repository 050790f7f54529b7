pub mod controller;
pub mod shortcuts;
pub mod zoom;

pub use controller::PageController;
pub use shortcuts::shortcut_for;
