pub mod artifacts;
pub mod details;
pub mod list;
