pub mod clock;
pub mod logbook;
