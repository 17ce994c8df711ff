//! Inquiry status policy.
//!
//! Statuses are accepted case-insensitively and always stored in their
//! uppercase canonical form. The only forbidden transition is
//! `VERIFIED` → `PENDING_VERIFICATION`; every other pair, including a
//! transition to the current status, is allowed.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Verification status of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InquiryStatus {
    PendingVerification,
    Verified,
    Rejected,
}

impl InquiryStatus {
    /// Every status, in canonical order.
    pub const ALL: [Self; 3] = [Self::PendingVerification, Self::Verified, Self::Rejected];

    /// Canonical (uppercase) text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingVerification => "PENDING_VERIFICATION",
            Self::Verified => "VERIFIED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Comma separated list of the canonical status names.
    #[must_use]
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|status| status.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn can_transition_to(self, requested: Self) -> bool {
        !matches!((self, requested), (Self::Verified, Self::PendingVerification))
    }
}

impl Display for InquiryStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown inquiry status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for InquiryStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Whether `value` names a known status, ignoring case.
#[must_use]
pub fn is_valid_status(value: &str) -> bool {
    value.parse::<InquiryStatus>().is_ok()
}

/// Whether an inquiry in `current` may move to `requested`.
#[must_use]
pub fn can_transition(current: InquiryStatus, requested: InquiryStatus) -> bool {
    current.can_transition_to(requested)
}
