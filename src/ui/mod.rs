pub mod input;
pub mod messages;
