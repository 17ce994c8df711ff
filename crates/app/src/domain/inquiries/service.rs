//! Inquiries service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, instrument};

use crate::domain::inquiries::{
    data::CreateInquiry,
    errors::{InquiriesServiceError, ValidationError},
    models::{Inquiry, InquiryId, InquiryStatistics},
    status::InquiryStatus,
    store::InquiryStore,
};

#[derive(Clone)]
pub struct StoreInquiriesService {
    store: Arc<dyn InquiryStore>,
}

impl StoreInquiriesService {
    #[must_use]
    pub fn new(store: Arc<dyn InquiryStore>) -> Self {
        Self { store }
    }
}

fn parse_status(value: &str) -> Result<InquiryStatus, InquiriesServiceError> {
    value
        .parse::<InquiryStatus>()
        .map_err(|_| InquiriesServiceError::InvalidStatus {
            status: value.to_string(),
        })
}

#[async_trait]
impl InquiriesService for StoreInquiriesService {
    #[instrument(skip_all, fields(partner = %inquiry.submitting_partner))]
    async fn create_inquiry(
        &self,
        inquiry: CreateInquiry,
    ) -> Result<Inquiry, InquiriesServiceError> {
        inquiry.validate()?;

        let created = self.store.insert(inquiry.into_new_inquiry()).await?;

        info!(id = %created.id, "created inquiry");

        Ok(created)
    }

    async fn get_inquiries(
        &self,
        status: Option<String>,
    ) -> Result<Vec<Inquiry>, InquiriesServiceError> {
        match status.as_deref().filter(|status| !status.trim().is_empty()) {
            Some(status) => {
                let status = parse_status(status)?;

                Ok(self.store.find_by_status(status).await?)
            }
            None => Ok(self.store.find_all().await?),
        }
    }

    async fn get_inquiry_by_id(&self, id: InquiryId) -> Result<Inquiry, InquiriesServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(InquiriesServiceError::NotFound(id))
    }

    #[instrument(skip_all, fields(id = %id, status = %status))]
    async fn update_inquiry_status(
        &self,
        id: InquiryId,
        status: String,
    ) -> Result<Inquiry, InquiriesServiceError> {
        let mut inquiry = self.get_inquiry_by_id(id).await?;

        let requested = parse_status(&status)?;

        if !inquiry.status.can_transition_to(requested) {
            return Err(InquiriesServiceError::IllegalTransition {
                from: inquiry.status,
                to: requested,
            });
        }

        let previous = inquiry.status;

        inquiry.status = requested;

        let updated = self.store.update(inquiry).await?;

        info!(from = %previous, to = %requested, "updated inquiry status");

        Ok(updated)
    }

    async fn get_statistics(&self) -> Result<InquiryStatistics, InquiriesServiceError> {
        Ok(InquiryStatistics {
            total: self.store.count().await?,
            pending: self
                .store
                .count_by_status(InquiryStatus::PendingVerification)
                .await?,
            verified: self.store.count_by_status(InquiryStatus::Verified).await?,
            rejected: self.store.count_by_status(InquiryStatus::Rejected).await?,
        })
    }

    #[instrument(skip_all, fields(id = %id))]
    async fn delete_inquiry(&self, id: InquiryId) -> Result<(), InquiriesServiceError> {
        if !self.store.exists_by_id(id).await? {
            return Err(InquiriesServiceError::NotFound(id));
        }

        self.store.delete_by_id(id).await?;

        info!("deleted inquiry");

        Ok(())
    }

    async fn get_inquiries_by_partner(
        &self,
        partner: String,
    ) -> Result<Vec<Inquiry>, InquiriesServiceError> {
        if partner.trim().is_empty() {
            return Err(ValidationError::PartnerRequired.into());
        }

        Ok(self.store.find_by_submitting_partner(&partner).await?)
    }
}

#[automock]
#[async_trait]
pub trait InquiriesService: Send + Sync {
    /// Validate and persist a new inquiry. New inquiries always start out
    /// pending verification.
    async fn create_inquiry(
        &self,
        inquiry: CreateInquiry,
    ) -> Result<Inquiry, InquiriesServiceError>;

    /// List inquiries, optionally filtered by status (any case). A blank
    /// filter is treated as no filter. Filtered results are newest first.
    async fn get_inquiries(
        &self,
        status: Option<String>,
    ) -> Result<Vec<Inquiry>, InquiriesServiceError>;

    /// Retrieve a single inquiry.
    async fn get_inquiry_by_id(&self, id: InquiryId) -> Result<Inquiry, InquiriesServiceError>;

    /// Move an inquiry to a new status.
    async fn update_inquiry_status(
        &self,
        id: InquiryId,
        status: String,
    ) -> Result<Inquiry, InquiriesServiceError>;

    /// Per-status counts. The four counts are read separately.
    async fn get_statistics(&self) -> Result<InquiryStatistics, InquiriesServiceError>;

    /// Delete an inquiry.
    async fn delete_inquiry(&self, id: InquiryId) -> Result<(), InquiriesServiceError>;

    /// Inquiries submitted by a partner, matched ignoring case, newest first.
    async fn get_inquiries_by_partner(
        &self,
        partner: String,
    ) -> Result<Vec<Inquiry>, InquiriesServiceError>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::inquiries::{
        errors::InquiryStoreError,
        models::NewInquiry,
        store::{MemoryInquiryStore, MockInquiryStore},
    };

    use super::*;

    fn service() -> StoreInquiriesService {
        StoreInquiriesService::new(Arc::new(MemoryInquiryStore::new()))
    }

    fn create(title: &str, partner: &str) -> CreateInquiry {
        CreateInquiry {
            title: title.to_string(),
            description: None,
            submitting_partner: partner.to_string(),
            estimated_value: Some(Decimal::new(25_000_000, 2)),
        }
    }

    #[tokio::test]
    async fn kenyan_avocados_lifecycle() -> TestResult {
        let service = service();

        let created = service
            .create_inquiry(CreateInquiry {
                title: "Kenyan Avocados".to_string(),
                description: Some("Export verification".to_string()),
                submitting_partner: "KEPROBA".to_string(),
                estimated_value: Some(Decimal::new(25_000_000, 2)),
            })
            .await?;

        assert_eq!(created.status, InquiryStatus::PendingVerification);
        assert!(created.updated_at.is_none());

        let verified = service
            .update_inquiry_status(created.id, "verified".to_string())
            .await?;

        assert_eq!(verified.status, InquiryStatus::Verified);
        assert!(verified.updated_at.is_some());

        let result = service
            .update_inquiry_status(created.id, "pending_verification".to_string())
            .await;

        assert!(
            matches!(
                result,
                Err(InquiriesServiceError::IllegalTransition {
                    from: InquiryStatus::Verified,
                    to: InquiryStatus::PendingVerification,
                })
            ),
            "expected IllegalTransition, got {result:?}"
        );

        assert_eq!(
            service.get_inquiry_by_id(created.id).await?.status,
            InquiryStatus::Verified
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_with_blank_title_never_touches_the_store() -> TestResult {
        let mut store = MockInquiryStore::new();

        store.expect_insert().never();

        let service = StoreInquiriesService::new(Arc::new(store));

        let result = service.create_inquiry(create("", "X")).await;

        assert!(
            matches!(
                result,
                Err(InquiriesServiceError::Validation(
                    ValidationError::TitleRequired
                ))
            ),
            "expected Validation, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_with_negative_value_fails_validation() -> TestResult {
        let mut store = MockInquiryStore::new();

        store.expect_insert().never();

        let service = StoreInquiriesService::new(Arc::new(store));

        let mut inquiry = create("Coffee", "UCDA");
        inquiry.estimated_value = Some(Decimal::new(-100, 2));

        let result = service.create_inquiry(inquiry).await;

        assert!(
            matches!(
                result,
                Err(InquiriesServiceError::Validation(
                    ValidationError::NegativeEstimatedValue
                ))
            ),
            "expected Validation, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_beyond_column_limits_fails_validation_on_every_backend() -> TestResult {
        let mut store = MockInquiryStore::new();

        store.expect_insert().never();

        let service = StoreInquiriesService::new(Arc::new(store));

        let long_title = service
            .create_inquiry(create(&"t".repeat(256), "UCDA"))
            .await;

        assert!(
            matches!(
                long_title,
                Err(InquiriesServiceError::Validation(
                    ValidationError::TitleTooLong { .. }
                ))
            ),
            "expected TitleTooLong, got {long_title:?}"
        );

        let mut sub_cent = create("Coffee", "UCDA");
        sub_cent.estimated_value = Some(Decimal::new(4, 3));

        let sub_cent = service.create_inquiry(sub_cent).await;

        assert!(
            matches!(
                sub_cent,
                Err(InquiriesServiceError::Validation(
                    ValidationError::EstimatedValueTooPrecise { .. }
                ))
            ),
            "expected EstimatedValueTooPrecise, got {sub_cent:?}"
        );

        let memory = self::service();
        let mut huge = create("Coffee", "UCDA");
        huge.estimated_value = Some(Decimal::new(1_000_000_000_000_000, 0));

        let huge = memory.create_inquiry(huge).await;

        assert!(
            matches!(
                huge,
                Err(InquiriesServiceError::Validation(
                    ValidationError::EstimatedValueTooLarge { .. }
                ))
            ),
            "expected EstimatedValueTooLarge, got {huge:?}"
        );
        assert_eq!(memory.get_statistics().await?.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn create_always_persists_pending_status() -> TestResult {
        let mut store = MockInquiryStore::new();

        store
            .expect_insert()
            .once()
            .withf(|new: &NewInquiry| new.status == InquiryStatus::PendingVerification)
            .returning(|new| {
                Ok(Inquiry {
                    id: InquiryId::new(1),
                    title: new.title,
                    description: new.description,
                    submitting_partner: new.submitting_partner,
                    estimated_value: new.estimated_value,
                    status: new.status,
                    created_at: jiff::Timestamp::UNIX_EPOCH,
                    updated_at: None,
                })
            });

        let service = StoreInquiriesService::new(Arc::new(store));

        let created = service.create_inquiry(create("Coffee", "UCDA")).await?;

        assert_eq!(created.status, InquiryStatus::PendingVerification);

        Ok(())
    }

    #[tokio::test]
    async fn every_non_pending_transition_succeeds() -> TestResult {
        let service = service();

        for from in InquiryStatus::ALL {
            for to in [InquiryStatus::Verified, InquiryStatus::Rejected] {
                let created = service.create_inquiry(create("T", "P")).await?;

                service
                    .update_inquiry_status(created.id, from.as_str().to_string())
                    .await?;

                let updated = service
                    .update_inquiry_status(created.id, to.as_str().to_lowercase())
                    .await?;

                assert_eq!(updated.status, to, "{from} -> {to}");
            }
        }

        Ok(())
    }

    #[tokio::test]
    async fn rejected_inquiry_can_return_to_pending() -> TestResult {
        let service = service();

        let created = service.create_inquiry(create("T", "P")).await?;

        service
            .update_inquiry_status(created.id, "REJECTED".to_string())
            .await?;

        let reopened = service
            .update_inquiry_status(created.id, "PENDING_VERIFICATION".to_string())
            .await?;

        assert_eq!(reopened.status, InquiryStatus::PendingVerification);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_status_fails() -> TestResult {
        let service = service();

        let created = service.create_inquiry(create("T", "P")).await?;

        let result = service
            .update_inquiry_status(created.id, "APPROVED".to_string())
            .await;

        assert!(
            matches!(result, Err(InquiriesServiceError::InvalidStatus { ref status }) if status == "APPROVED"),
            "expected InvalidStatus, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_inquiry_fails_with_not_found() -> TestResult {
        let service = service();

        let result = service
            .update_inquiry_status(InquiryId::new(404), "VERIFIED".to_string())
            .await;

        assert!(
            matches!(result, Err(InquiriesServiceError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_of_vanished_record_is_not_found() -> TestResult {
        let mut store = MockInquiryStore::new();

        store.expect_find_by_id().returning(|id| {
            Ok(Some(Inquiry {
                id,
                title: "T".to_string(),
                description: None,
                submitting_partner: "P".to_string(),
                estimated_value: None,
                status: InquiryStatus::PendingVerification,
                created_at: jiff::Timestamp::UNIX_EPOCH,
                updated_at: None,
            }))
        });

        store
            .expect_update()
            .returning(|inquiry| Err(InquiryStoreError::NotFound(inquiry.id)));

        let service = StoreInquiriesService::new(Arc::new(store));

        let result = service
            .update_inquiry_status(InquiryId::new(3), "VERIFIED".to_string())
            .await;

        assert!(
            matches!(result, Err(InquiriesServiceError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn status_filter_ignores_case() -> TestResult {
        let service = service();

        for _ in 0..3 {
            let created = service.create_inquiry(create("T", "P")).await?;

            service
                .update_inquiry_status(created.id, "VERIFIED".to_string())
                .await?;
        }

        service.create_inquiry(create("Pending", "P")).await?;

        let lower: HashSet<InquiryId> = service
            .get_inquiries(Some("verified".to_string()))
            .await?
            .into_iter()
            .map(|inquiry| inquiry.id)
            .collect();

        let upper: HashSet<InquiryId> = service
            .get_inquiries(Some("VERIFIED".to_string()))
            .await?
            .into_iter()
            .map(|inquiry| inquiry.id)
            .collect();

        assert_eq!(lower.len(), 3);
        assert_eq!(lower, upper);

        Ok(())
    }

    #[tokio::test]
    async fn status_filter_is_newest_first() -> TestResult {
        let service = service();

        for title in ["first", "second", "third"] {
            service.create_inquiry(create(title, "P")).await?;
        }

        let inquiries = service
            .get_inquiries(Some("PENDING_VERIFICATION".to_string()))
            .await?;

        assert!(
            inquiries
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at),
            "expected newest first, got {inquiries:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_status_filter_lists_everything() -> TestResult {
        let service = service();

        service.create_inquiry(create("A", "P")).await?;
        service.create_inquiry(create("B", "P")).await?;

        assert_eq!(service.get_inquiries(None).await?.len(), 2);
        assert_eq!(service.get_inquiries(Some("  ".to_string())).await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn bogus_status_filter_fails() -> TestResult {
        let result = service().get_inquiries(Some("bogus".to_string())).await;

        let Err(error) = result else {
            panic!("expected InvalidStatus, got {result:?}");
        };

        assert!(
            matches!(error, InquiriesServiceError::InvalidStatus { .. }),
            "expected InvalidStatus, got {error:?}"
        );
        assert!(
            error
                .to_string()
                .ends_with("PENDING_VERIFICATION, VERIFIED, REJECTED")
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_inquiry_fails_with_not_found() -> TestResult {
        let result = service().get_inquiry_by_id(InquiryId::new(1)).await;

        assert!(
            matches!(result, Err(InquiriesServiceError::NotFound(id)) if id == InquiryId::new(1)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn statistics_add_up() -> TestResult {
        let service = service();

        for status in ["VERIFIED", "REJECTED", "PENDING_VERIFICATION", "VERIFIED"] {
            let created = service.create_inquiry(create("T", "P")).await?;

            service
                .update_inquiry_status(created.id, status.to_string())
                .await?;
        }

        let stats = service.get_statistics().await?;

        assert_eq!(
            stats,
            InquiryStatistics {
                total: 4,
                pending: 1,
                verified: 2,
                rejected: 1,
            }
        );
        assert_eq!(stats.total, stats.pending + stats.verified + stats.rejected);

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_inquiry() -> TestResult {
        let service = service();

        let created = service.create_inquiry(create("T", "P")).await?;

        service.delete_inquiry(created.id).await?;

        let result = service.get_inquiry_by_id(created.id).await;

        assert!(
            matches!(result, Err(InquiriesServiceError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_inquiry_leaves_store_untouched() -> TestResult {
        let mut store = MockInquiryStore::new();

        store.expect_exists_by_id().once().returning(|_| Ok(false));
        store.expect_delete_by_id().never();

        let service = StoreInquiriesService::new(Arc::new(store));

        let result = service.delete_inquiry(InquiryId::new(9)).await;

        assert!(
            matches!(result, Err(InquiriesServiceError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn partner_lookup_ignores_case() -> TestResult {
        let service = service();

        service.create_inquiry(create("A", "KEPROBA")).await?;
        service.create_inquiry(create("B", "UCDA")).await?;

        let found = service.get_inquiries_by_partner("keproba".to_string()).await?;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].submitting_partner, "KEPROBA");

        Ok(())
    }

    #[tokio::test]
    async fn blank_partner_lookup_fails_validation() -> TestResult {
        let result = service().get_inquiries_by_partner(" ".to_string()).await;

        assert!(
            matches!(
                result,
                Err(InquiriesServiceError::Validation(
                    ValidationError::PartnerRequired
                ))
            ),
            "expected Validation, got {result:?}"
        );

        Ok(())
    }
}
