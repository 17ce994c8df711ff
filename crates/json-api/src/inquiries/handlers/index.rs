//! Inquiry Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    inquiries::{errors::into_status_error, responses::InquiriesResponse},
    state::State,
};

/// Inquiry Index Handler
///
/// Lists inquiries, optionally filtered by status (any case). Filtered
/// results are newest first.
#[endpoint(
    tags("inquiries"),
    summary = "List Inquiries",
    responses(
        (status_code = StatusCode::OK, description = "Inquiries"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<InquiriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let inquiries = state
        .app
        .inquiries
        .get_inquiries(status.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(inquiries.into()))
}
