//! Inquiry Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::inquiries::status::InquiryStatus;

/// Store-assigned inquiry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InquiryId(i64);

impl InquiryId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for InquiryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<InquiryId> for i64 {
    fn from(value: InquiryId) -> Self {
        value.0
    }
}

impl Display for InquiryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Inquiry Model
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub id: InquiryId,
    pub title: String,
    pub description: Option<String>,
    pub submitting_partner: String,
    pub estimated_value: Option<Decimal>,
    pub status: InquiryStatus,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Unsaved inquiry, handed to a store for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub title: String,
    pub description: Option<String>,
    pub submitting_partner: String,
    pub estimated_value: Option<Decimal>,
    pub status: InquiryStatus,
}

/// Inquiry counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InquiryStatistics {
    pub total: u64,
    pub pending: u64,
    pub verified: u64,
    pub rejected: u64,
}
