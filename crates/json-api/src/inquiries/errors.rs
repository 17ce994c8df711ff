//! Inquiry Errors

use salvo::http::StatusError;
use tracing::error;

use tradeverify_app::domain::inquiries::InquiriesServiceError;

pub(crate) fn into_status_error(error: InquiriesServiceError) -> StatusError {
    let message = error.to_string();

    match error {
        InquiriesServiceError::NotFound(_) => StatusError::not_found().brief(message),
        InquiriesServiceError::InvalidStatus { .. } | InquiriesServiceError::Validation(_) => {
            StatusError::bad_request().brief(message)
        }
        InquiriesServiceError::IllegalTransition { .. } => StatusError::conflict().brief(message),
        InquiriesServiceError::Store(source) => {
            error!("inquiry storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
