pub mod config;
pub mod exit;
pub mod info;
pub mod log;
pub mod time;
