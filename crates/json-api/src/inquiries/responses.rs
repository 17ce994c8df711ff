//! Inquiry response bodies.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tradeverify_app::domain::inquiries::models::{Inquiry, InquiryStatistics};

/// A trade inquiry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InquiryResponse {
    /// Store-assigned identifier
    pub id: i64,

    /// Short summary of the inquiry
    pub title: String,

    /// Free-form details
    pub description: Option<String>,

    /// Partner organisation that submitted the inquiry
    pub submitting_partner: String,

    /// Estimated trade value
    #[serde(with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub estimated_value: Option<Decimal>,

    /// Verification status (`PENDING_VERIFICATION`, `VERIFIED`, `REJECTED`)
    pub status: String,

    /// The date and time the inquiry was submitted
    pub created_at: String,

    /// The date and time the inquiry was last changed
    pub updated_at: Option<String>,
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        InquiryResponse {
            id: inquiry.id.into_inner(),
            title: inquiry.title,
            description: inquiry.description,
            submitting_partner: inquiry.submitting_partner,
            estimated_value: inquiry.estimated_value,
            status: inquiry.status.to_string(),
            created_at: inquiry.created_at.to_string(),
            updated_at: inquiry.updated_at.as_ref().map(ToString::to_string),
        }
    }
}

/// A list of inquiries.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InquiriesResponse {
    /// The matching inquiries
    pub inquiries: Vec<InquiryResponse>,
}

impl From<Vec<Inquiry>> for InquiriesResponse {
    fn from(inquiries: Vec<Inquiry>) -> Self {
        InquiriesResponse {
            inquiries: inquiries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Inquiry counts per status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatisticsResponse {
    pub total: u64,
    pub pending: u64,
    pub verified: u64,
    pub rejected: u64,
}

impl From<InquiryStatistics> for StatisticsResponse {
    fn from(stats: InquiryStatistics) -> Self {
        StatisticsResponse {
            total: stats.total,
            pending: stats.pending,
            verified: stats.verified,
            rejected: stats.rejected,
        }
    }
}
