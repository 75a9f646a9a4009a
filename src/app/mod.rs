//! Application state and core logic

pub mod screen;
pub mod session;
pub mod state;

pub use screen::{AppCoordinator, MenuOption, Screen};
pub use state::App;
