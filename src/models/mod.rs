//! Data models

pub mod log;
pub mod security;
pub mod view;

pub use log::*;
pub use security::*;
pub use view::*;
