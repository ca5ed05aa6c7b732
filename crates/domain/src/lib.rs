//! Domain layer for the enrollment dropout worker.
//!
//! This crate contains:
//! - Domain models (Enrollment, Exam, Submission, Activity)
//! - Sweep reporting types

pub mod models;
