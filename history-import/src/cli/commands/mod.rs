pub mod config;
pub mod preview;
