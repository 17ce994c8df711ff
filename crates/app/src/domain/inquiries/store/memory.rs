//! In-memory inquiry store backed by `DashMap`.

use std::{
    cmp::Reverse,
    sync::{
        Arc,
        atomic::{AtomicI64, Ordering},
    },
};

use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;

use crate::domain::inquiries::{
    errors::InquiryStoreError,
    models::{Inquiry, InquiryId, NewInquiry},
    status::InquiryStatus,
};

use super::InquiryStore;

/// Process-local store. Ids come from a counter that only moves forward, so
/// deleted ids are never handed out again.
#[derive(Debug, Clone)]
pub struct MemoryInquiryStore {
    inquiries: Arc<DashMap<InquiryId, Inquiry>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryInquiryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inquiries: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn collect_newest_first(&self, predicate: impl Fn(&Inquiry) -> bool) -> Vec<Inquiry> {
        let mut matches: Vec<Inquiry> = self
            .inquiries
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        matches.sort_by_key(|inquiry| Reverse((inquiry.created_at, inquiry.id)));

        matches
    }
}

impl Default for MemoryInquiryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InquiryStore for MemoryInquiryStore {
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryStoreError> {
        let id = InquiryId::new(self.next_id.fetch_add(1, Ordering::Relaxed));

        let created = Inquiry {
            id,
            title: inquiry.title,
            description: inquiry.description,
            submitting_partner: inquiry.submitting_partner,
            estimated_value: inquiry.estimated_value,
            status: inquiry.status,
            created_at: Timestamp::now(),
            updated_at: None,
        };

        self.inquiries.insert(id, created.clone());

        Ok(created)
    }

    async fn update(&self, inquiry: Inquiry) -> Result<Inquiry, InquiryStoreError> {
        let Some(mut stored) = self.inquiries.get_mut(&inquiry.id) else {
            return Err(InquiryStoreError::NotFound(inquiry.id));
        };

        let created_at = stored.created_at;

        *stored = Inquiry {
            created_at,
            updated_at: Some(Timestamp::now().max(created_at)),
            ..inquiry
        };

        Ok(stored.clone())
    }

    async fn find_by_id(&self, id: InquiryId) -> Result<Option<Inquiry>, InquiryStoreError> {
        Ok(self.inquiries.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Inquiry>, InquiryStoreError> {
        let mut all: Vec<Inquiry> = self
            .inquiries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        all.sort_by_key(|inquiry| inquiry.id);

        Ok(all)
    }

    async fn find_by_status(
        &self,
        status: InquiryStatus,
    ) -> Result<Vec<Inquiry>, InquiryStoreError> {
        Ok(self.collect_newest_first(|inquiry| inquiry.status == status))
    }

    async fn find_by_submitting_partner(
        &self,
        partner: &str,
    ) -> Result<Vec<Inquiry>, InquiryStoreError> {
        let partner = partner.to_lowercase();

        Ok(self.collect_newest_first(|inquiry| inquiry.submitting_partner.to_lowercase() == partner))
    }

    async fn count_by_status(&self, status: InquiryStatus) -> Result<u64, InquiryStoreError> {
        let count = self
            .inquiries
            .iter()
            .filter(|entry| entry.value().status == status)
            .count();

        Ok(count_to_u64(count))
    }

    async fn exists_by_id(&self, id: InquiryId) -> Result<bool, InquiryStoreError> {
        Ok(self.inquiries.contains_key(&id))
    }

    async fn delete_by_id(&self, id: InquiryId) -> Result<u64, InquiryStoreError> {
        Ok(u64::from(self.inquiries.remove(&id).is_some()))
    }

    async fn count(&self) -> Result<u64, InquiryStoreError> {
        Ok(count_to_u64(self.inquiries.len()))
    }
}

fn count_to_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
