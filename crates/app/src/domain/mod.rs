//! Trade Verification Domain Concerns

pub mod inquiries;
