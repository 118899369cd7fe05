pub mod controller;
pub mod envelope;
