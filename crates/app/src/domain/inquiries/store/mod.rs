//! Inquiry Store

use async_trait::async_trait;
use mockall::automock;

use crate::domain::inquiries::{
    errors::InquiryStoreError,
    models::{Inquiry, InquiryId, NewInquiry},
    status::InquiryStatus,
};

mod memory;
mod postgres;

pub use memory::MemoryInquiryStore;
pub use postgres::PgInquiryStore;

/// Persistence contract for inquiry records.
///
/// Every method is atomic on its own. Callers that chain several calls get no
/// isolation between them.
#[automock]
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Insert a new record, assigning a fresh id and the creation timestamp.
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryStoreError>;

    /// Overwrite an existing record and refresh its update timestamp.
    async fn update(&self, inquiry: Inquiry) -> Result<Inquiry, InquiryStoreError>;

    async fn find_by_id(&self, id: InquiryId) -> Result<Option<Inquiry>, InquiryStoreError>;

    /// All records, in no particular order.
    async fn find_all(&self) -> Result<Vec<Inquiry>, InquiryStoreError>;

    /// Records with the given status, newest first.
    async fn find_by_status(
        &self,
        status: InquiryStatus,
    ) -> Result<Vec<Inquiry>, InquiryStoreError>;

    /// Records whose partner matches ignoring case, newest first.
    async fn find_by_submitting_partner(
        &self,
        partner: &str,
    ) -> Result<Vec<Inquiry>, InquiryStoreError>;

    async fn count_by_status(&self, status: InquiryStatus) -> Result<u64, InquiryStoreError>;

    async fn exists_by_id(&self, id: InquiryId) -> Result<bool, InquiryStoreError>;

    /// Remove a record, returning how many rows went away.
    async fn delete_by_id(&self, id: InquiryId) -> Result<u64, InquiryStoreError>;

    async fn count(&self) -> Result<u64, InquiryStoreError>;
}
