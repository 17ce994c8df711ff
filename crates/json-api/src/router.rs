//! App Router

use salvo::Router;

use crate::{healthcheck, inquiries};

/// Routes under `/api`.
///
/// Static segments are pushed ahead of `{id}` so they are never parsed as ids.
pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("inquiries")
                .get(inquiries::index::handler)
                .post(inquiries::create::handler)
                .push(Router::with_path("statistics").get(inquiries::statistics::handler))
                .push(Router::with_path("health").get(healthcheck::handler))
                .push(
                    Router::with_path("{id}")
                        .get(inquiries::get::handler)
                        .delete(inquiries::delete::handler)
                        .push(Router::with_path("status").put(inquiries::update_status::handler)),
                ),
        )
        .push(
            Router::with_path("partners/{partner}/inquiries").get(inquiries::partner::handler),
        )
}
