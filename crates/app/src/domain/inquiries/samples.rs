//! Sample inquiries for demos and local development.

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::inquiries::{
    errors::InquiryStoreError, models::NewInquiry, status::InquiryStatus, store::InquiryStore,
};

fn sample(
    title: &str,
    description: &str,
    partner: &str,
    value_cents: i64,
    status: InquiryStatus,
) -> NewInquiry {
    NewInquiry {
        title: title.to_string(),
        description: Some(description.to_string()),
        submitting_partner: partner.to_string(),
        estimated_value: Some(Decimal::new(value_cents, 2)),
        status,
    }
}

#[must_use]
pub fn sample_inquiries() -> Vec<NewInquiry> {
    vec![
        sample(
            "Inquiry for Kenyan Avocados",
            "Request for 500 tons of premium Hass avocados from Kenya for export to European markets. Quality certification and organic standards compliance required.",
            "KEPROBA",
            25_000_000,
            InquiryStatus::PendingVerification,
        ),
        sample(
            "Uganda Coffee Export Deal",
            "High-quality Arabica coffee beans from Ugandan highlands. Looking for certification and export facilitation for 200 tons.",
            "Ministry of Trade - Uganda",
            18_000_000,
            InquiryStatus::Verified,
        ),
        sample(
            "South African Wine Export",
            "Premium wine collection from Western Cape vineyards. Seeking certification for international distribution.",
            "SA Wine Exporters Association",
            7_500_000,
            InquiryStatus::PendingVerification,
        ),
        sample(
            "Ethiopian Textile Products",
            "Traditional Ethiopian textiles and garments for cultural export program. Hand-woven products with authentic designs.",
            "Ethiopian Textile Council",
            4_500_000,
            InquiryStatus::Rejected,
        ),
        sample(
            "Moroccan Argan Oil Bulk Order",
            "Certified organic argan oil from Morocco. Bulk order for international cosmetic manufacturers.",
            "Moroccan Argan Cooperative",
            12_000_000,
            InquiryStatus::PendingVerification,
        ),
    ]
}

/// Insert the sample inquiries when the store is empty.
///
/// Returns how many records were inserted, which is zero for a store that
/// already holds data.
///
/// # Errors
///
/// Returns an error when a store call fails. Records inserted before the
/// failure stay in place.
pub async fn seed_sample_inquiries(store: &dyn InquiryStore) -> Result<u64, InquiryStoreError> {
    if store.count().await? > 0 {
        info!("store already holds inquiries, skipping sample data");

        return Ok(0);
    }

    let mut inserted = 0;

    for inquiry in sample_inquiries() {
        store.insert(inquiry).await?;
        inserted += 1;
    }

    info!(inserted, "seeded sample inquiries");

    Ok(inserted)
}
