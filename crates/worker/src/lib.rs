//! Enrollment dropout worker.
//!
//! Transitions course enrollments past their deadline into `DROPOUT`,
//! skipping students with an in-progress exam or a submission waiting for
//! review, and records one audit activity per transition.

pub mod config;
pub mod error;
pub mod jobs;
pub mod logging;
pub mod services;
