//! Inquiries Data

use rust_decimal::Decimal;

use crate::domain::inquiries::{
    errors::ValidationError,
    models::NewInquiry,
    status::InquiryStatus,
};

/// Longest title or partner name the `trade_inquiries` columns hold.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Fractional digits kept by the `NUMERIC(15, 2)` value column.
pub const MAX_VALUE_SCALE: u32 = 2;

/// Smallest value with more integer digits than `NUMERIC(15, 2)` allows.
// 10_000_000_000_000 (10^13), scale 0; `Decimal::new` is not const.
pub const ESTIMATED_VALUE_LIMIT: Decimal = Decimal::from_parts(1_316_134_912, 2_328, 0, false, 0);

/// Create Inquiry Data
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInquiry {
    pub title: String,
    pub description: Option<String>,
    pub submitting_partner: String,
    pub estimated_value: Option<Decimal>,
}

impl CreateInquiry {
    /// Check required fields, text lengths and the value range.
    ///
    /// # Errors
    ///
    /// Returns the first constraint the data violates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        if self.title.chars().count() > MAX_TEXT_LENGTH {
            return Err(ValidationError::TitleTooLong {
                max: MAX_TEXT_LENGTH,
            });
        }

        if self.submitting_partner.trim().is_empty() {
            return Err(ValidationError::SubmittingPartnerRequired);
        }

        if self.submitting_partner.chars().count() > MAX_TEXT_LENGTH {
            return Err(ValidationError::SubmittingPartnerTooLong {
                max: MAX_TEXT_LENGTH,
            });
        }

        if let Some(value) = self.estimated_value {
            validate_estimated_value(value)?;
        }

        Ok(())
    }

    /// Every new inquiry starts out pending verification.
    #[must_use]
    pub fn into_new_inquiry(self) -> NewInquiry {
        NewInquiry {
            title: self.title,
            description: self.description,
            submitting_partner: self.submitting_partner,
            estimated_value: self.estimated_value,
            status: InquiryStatus::PendingVerification,
        }
    }
}

fn validate_estimated_value(value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeEstimatedValue);
    }

    // Trailing zeros (1.500) still fit the column.
    if value.normalize().scale() > MAX_VALUE_SCALE {
        return Err(ValidationError::EstimatedValueTooPrecise {
            max: MAX_VALUE_SCALE,
        });
    }

    if value >= ESTIMATED_VALUE_LIMIT {
        return Err(ValidationError::EstimatedValueTooLarge {
            limit: ESTIMATED_VALUE_LIMIT,
        });
    }

    Ok(())
}
