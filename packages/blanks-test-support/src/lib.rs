//! Helpers shared by the backend's test binaries.

pub mod logging;
pub mod problem_details;
