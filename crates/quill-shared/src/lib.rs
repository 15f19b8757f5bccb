//! # Quill Shared
//!
//! Request/response DTOs and the unified API envelope, shared between the
//! server and any Rust API clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse, FieldError};
