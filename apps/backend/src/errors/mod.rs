//! Error codes shared by every HTTP error response.

pub mod error_code;

pub use error_code::ErrorCode;
