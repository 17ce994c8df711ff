//! Inquiries service errors.

use rust_decimal::Decimal;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::inquiries::{models::InquiryId, status::InquiryStatus};

/// Constraint violations on inquiry input, detected before any store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Submitting partner is required")]
    SubmittingPartnerRequired,

    #[error("Title must be at most {max} characters")]
    TitleTooLong { max: usize },

    #[error("Submitting partner must be at most {max} characters")]
    SubmittingPartnerTooLong { max: usize },

    #[error("Estimated value must be positive or zero")]
    NegativeEstimatedValue,

    #[error("Estimated value must have at most {max} decimal places")]
    EstimatedValueTooPrecise { max: u32 },

    #[error("Estimated value must be less than {limit}")]
    EstimatedValueTooLarge { limit: Decimal },

    #[error("Partner is required")]
    PartnerRequired,
}

#[derive(Debug, Error)]
pub enum InquiryStoreError {
    #[error("inquiry not found with id: {0}")]
    NotFound(InquiryId),

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for InquiryStoreError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

#[derive(Debug, Error)]
pub enum InquiriesServiceError {
    #[error("Inquiry not found with id: {0}")]
    NotFound(InquiryId),

    #[error("Invalid status: {status}. Valid statuses are: {valid}", valid = InquiryStatus::valid_values())]
    InvalidStatus { status: String },

    #[error("Cannot change status from {from} back to {to}")]
    IllegalTransition {
        from: InquiryStatus,
        to: InquiryStatus,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Store(#[source] InquiryStoreError),
}

impl From<InquiryStoreError> for InquiriesServiceError {
    fn from(error: InquiryStoreError) -> Self {
        match error {
            InquiryStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}
