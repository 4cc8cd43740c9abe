pub mod boat;
