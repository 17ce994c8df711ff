//! Delete Inquiry Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, inquiries::errors::into_status_error, state::State};

/// Delete Inquiry Handler
#[endpoint(
    tags("inquiries"),
    summary = "Delete Inquiry",
    responses(
        (status_code = StatusCode::OK, description = "Inquiry deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Inquiry not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "inquiries.delete", skip(id, depot), fields(inquiry_id = *id), err)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .inquiries
        .delete_inquiry(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
