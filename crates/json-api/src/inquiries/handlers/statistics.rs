//! Inquiry Statistics Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    inquiries::{errors::into_status_error, responses::StatisticsResponse},
    state::State,
};

/// Inquiry Statistics Handler
///
/// Counts are read one after another and may be slightly out of step under
/// concurrent writes.
#[endpoint(
    tags("inquiries"),
    summary = "Inquiry Statistics",
    responses(
        (status_code = StatusCode::OK, description = "Per-status counts"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StatisticsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .inquiries
        .get_statistics()
        .await
        .map_err(into_status_error)?;

    Ok(Json(stats.into()))
}
