//! Worker services.

pub mod dropout;

pub use dropout::DropoutSweepService;
