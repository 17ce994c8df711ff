//! Inquiries

pub mod data;
pub mod errors;
pub mod models;
pub mod samples;
pub mod service;
pub mod status;
pub mod store;

pub use errors::InquiriesServiceError;
pub use service::*;
