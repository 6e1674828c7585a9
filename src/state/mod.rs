//! Application state module

mod app_state;
mod focus;
pub mod forms;
mod input;

pub use app_state::*;
pub use focus::*;
pub use input::*;
