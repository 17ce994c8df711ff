//! Create Inquiry Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tradeverify_app::domain::inquiries::data::CreateInquiry;

use crate::{
    extensions::*,
    inquiries::{errors::into_status_error, responses::InquiryResponse},
    state::State,
};

/// Create Inquiry Request
///
/// New inquiries always start out pending verification; any status in the
/// body is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateInquiryRequest {
    /// Short summary of the inquiry
    #[serde(default)]
    pub title: String,

    /// Free-form details
    #[serde(default)]
    pub description: Option<String>,

    /// Partner organisation submitting the inquiry
    #[serde(default)]
    pub submitting_partner: String,

    /// Estimated trade value, zero or more
    #[serde(default)]
    #[salvo(schema(value_type = Option<f64>))]
    pub estimated_value: Option<Decimal>,
}

impl From<CreateInquiryRequest> for CreateInquiry {
    fn from(request: CreateInquiryRequest) -> Self {
        CreateInquiry {
            title: request.title,
            description: request.description,
            submitting_partner: request.submitting_partner,
            estimated_value: request.estimated_value,
        }
    }
}

/// Create Inquiry Handler
#[endpoint(
    tags("inquiries"),
    summary = "Submit Inquiry",
    responses(
        (status_code = StatusCode::CREATED, description = "Inquiry created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "inquiries.create",
    skip(json, depot, res),
    fields(inquiry_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateInquiryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<InquiryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let inquiry = state
        .app
        .inquiries
        .create_inquiry(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("inquiry_id", inquiry.id.into_inner());

    res.add_header(LOCATION, format!("/api/inquiries/{}", inquiry.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(inquiry.into()))
}
