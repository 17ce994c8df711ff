//! Get Inquiry Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    inquiries::{errors::into_status_error, responses::InquiryResponse},
    state::State,
};

/// Get Inquiry Handler
#[endpoint(
    tags("inquiries"),
    summary = "Get Inquiry",
    responses(
        (status_code = StatusCode::OK, description = "Inquiry"),
        (status_code = StatusCode::NOT_FOUND, description = "Inquiry not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<InquiryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let inquiry = state
        .app
        .inquiries
        .get_inquiry_by_id(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(inquiry.into()))
}
