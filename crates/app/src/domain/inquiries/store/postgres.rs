//! Inquiries Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::Db,
    domain::inquiries::{
        errors::InquiryStoreError,
        models::{Inquiry, InquiryId, NewInquiry},
        status::InquiryStatus,
    },
};

use super::InquiryStore;

const INSERT_INQUIRY_SQL: &str = include_str!("sql/insert_inquiry.sql");
const UPDATE_INQUIRY_SQL: &str = include_str!("sql/update_inquiry.sql");
const FIND_INQUIRY_SQL: &str = include_str!("sql/find_inquiry.sql");
const FIND_INQUIRIES_SQL: &str = include_str!("sql/find_inquiries.sql");
const FIND_INQUIRIES_BY_STATUS_SQL: &str = include_str!("sql/find_inquiries_by_status.sql");
const FIND_INQUIRIES_BY_PARTNER_SQL: &str = include_str!("sql/find_inquiries_by_partner.sql");
const COUNT_INQUIRIES_BY_STATUS_SQL: &str = include_str!("sql/count_inquiries_by_status.sql");
const COUNT_INQUIRIES_SQL: &str = include_str!("sql/count_inquiries.sql");
const INQUIRY_EXISTS_SQL: &str = include_str!("sql/inquiry_exists.sql");
const DELETE_INQUIRY_SQL: &str = include_str!("sql/delete_inquiry.sql");

/// `PostgreSQL` store. Each call runs inside its own transaction, which rolls
/// back on drop if the statement fails.
#[derive(Debug, Clone)]
pub struct PgInquiryStore {
    db: Db,
}

impl PgInquiryStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InquiryStore for PgInquiryStore {
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = query_as::<Postgres, Inquiry>(INSERT_INQUIRY_SQL)
            .bind(inquiry.title)
            .bind(inquiry.description)
            .bind(inquiry.status.as_str())
            .bind(inquiry.submitting_partner)
            .bind(inquiry.estimated_value)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update(&self, inquiry: Inquiry) -> Result<Inquiry, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = query_as::<Postgres, Inquiry>(UPDATE_INQUIRY_SQL)
            .bind(inquiry.id.into_inner())
            .bind(inquiry.title)
            .bind(inquiry.description)
            .bind(inquiry.status.as_str())
            .bind(inquiry.submitting_partner)
            .bind(inquiry.estimated_value)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(InquiryStoreError::NotFound(inquiry.id))?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn find_by_id(&self, id: InquiryId) -> Result<Option<Inquiry>, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let inquiry = query_as::<Postgres, Inquiry>(FIND_INQUIRY_SQL)
            .bind(id.into_inner())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(inquiry)
    }

    async fn find_all(&self) -> Result<Vec<Inquiry>, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let inquiries = query_as::<Postgres, Inquiry>(FIND_INQUIRIES_SQL)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(inquiries)
    }

    async fn find_by_status(
        &self,
        status: InquiryStatus,
    ) -> Result<Vec<Inquiry>, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let inquiries = query_as::<Postgres, Inquiry>(FIND_INQUIRIES_BY_STATUS_SQL)
            .bind(status.as_str())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(inquiries)
    }

    async fn find_by_submitting_partner(
        &self,
        partner: &str,
    ) -> Result<Vec<Inquiry>, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let inquiries = query_as::<Postgres, Inquiry>(FIND_INQUIRIES_BY_PARTNER_SQL)
            .bind(partner)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(inquiries)
    }

    async fn count_by_status(&self, status: InquiryStatus) -> Result<u64, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let count: i64 = query_scalar(COUNT_INQUIRIES_BY_STATUS_SQL)
            .bind(status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        count_to_u64(count)
    }

    async fn exists_by_id(&self, id: InquiryId) -> Result<bool, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let exists: bool = query_scalar(INQUIRY_EXISTS_SQL)
            .bind(id.into_inner())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: InquiryId) -> Result<u64, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = query(DELETE_INQUIRY_SQL)
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(rows_affected)
    }

    async fn count(&self) -> Result<u64, InquiryStoreError> {
        let mut tx = self.db.begin_transaction().await?;

        let count: i64 = query_scalar(COUNT_INQUIRIES_SQL)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        count_to_u64(count)
    }
}

fn count_to_u64(count: i64) -> Result<u64, InquiryStoreError> {
    u64::try_from(count).map_err(|e| {
        InquiryStoreError::Sql(sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    })
}

impl<'r> FromRow<'r, PgRow> for Inquiry {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<InquiryStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: InquiryId::new(row.try_get("id")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            submitting_partner: row.try_get("submitting_partner")?,
            estimated_value: row.try_get("estimated_value")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row
                .try_get::<Option<SqlxTimestamp>, _>("updated_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
