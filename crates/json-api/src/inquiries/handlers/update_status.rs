//! Update Inquiry Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    inquiries::{errors::into_status_error, responses::InquiryResponse},
    state::State,
};

/// Update Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// Requested status, any case
    pub status: String,
}

/// Update Inquiry Status Handler
///
/// A verified inquiry can never go back to pending verification.
#[endpoint(
    tags("inquiries"),
    summary = "Update Inquiry Status",
    responses(
        (status_code = StatusCode::OK, description = "Inquiry updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Inquiry not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::CONFLICT, description = "Transition not allowed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "inquiries.update_status",
    skip(id, json, depot),
    fields(inquiry_id = tracing::field::Empty, status = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<InquiryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("inquiry_id", id);
    span.record("status", request.status.as_str());

    let inquiry = state
        .app
        .inquiries
        .update_inquiry_status(id.into(), request.status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(inquiry.into()))
}
