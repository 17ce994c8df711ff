//! Partner Inquiries Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    inquiries::{errors::into_status_error, responses::InquiriesResponse},
    state::State,
};

/// Partner Inquiries Handler
///
/// Lists the inquiries a partner submitted, matching the name ignoring case.
#[endpoint(
    tags("inquiries"),
    summary = "List Partner Inquiries",
    responses(
        (status_code = StatusCode::OK, description = "Inquiries"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    partner: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<InquiriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let inquiries = state
        .app
        .inquiries
        .get_inquiries_by_partner(partner.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(inquiries.into()))
}
