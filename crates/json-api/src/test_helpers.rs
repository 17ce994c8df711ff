//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use tradeverify_app::{
    context::AppContext,
    domain::inquiries::{
        MockInquiriesService,
        models::{Inquiry, InquiryId},
        status::InquiryStatus,
        store::MockInquiryStore,
    },
};

use crate::state::State;

pub(crate) fn make_inquiry(id: i64, status: InquiryStatus) -> Inquiry {
    Inquiry {
        id: InquiryId::new(id),
        title: "Inquiry for Kenyan Avocados".to_string(),
        description: None,
        submitting_partner: "KEPROBA".to_string(),
        estimated_value: Some(Decimal::new(25_000_000, 2)),
        status,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: None,
    }
}

/// Handlers only talk to the service, so the store must never be touched.
fn strict_store_mock() -> MockInquiryStore {
    let mut store = MockInquiryStore::new();

    store.expect_insert().never();
    store.expect_update().never();
    store.expect_delete_by_id().never();

    store
}

pub(crate) fn state_with_inquiries(inquiries: MockInquiriesService) -> Arc<State> {
    State::from_app_context(AppContext {
        inquiries: Arc::new(inquiries),
        store: Arc::new(strict_store_mock()),
    })
}

pub(crate) fn inquiries_service(inquiries: MockInquiriesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_inquiries(inquiries)))
            .push(route),
    )
}
