//! W3C trace context extraction for inbound inquiry requests.

use opentelemetry::{
    Context, global,
    propagation::{Extractor, TextMapPropagator},
    trace::TraceContextExt as _,
};
use salvo::http::HeaderMap;

/// Headers read by the W3C trace context propagator.
const TRACE_HEADERS: [&str; 2] = ["traceparent", "tracestate"];

pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    global::get_text_map_propagator(|propagator| extract_with(propagator, headers))
}

fn extract_with(propagator: &dyn TextMapPropagator, headers: &HeaderMap) -> Option<Context> {
    // Start from an empty context so a request without trace headers gets a
    // fresh root span instead of the ambient one.
    let context = propagator.extract_with_context(&Context::new(), &TraceHeaders(headers));

    context.span().span_context().is_valid().then_some(context)
}

#[derive(Debug)]
struct TraceHeaders<'a>(&'a HeaderMap);

impl Extractor for TraceHeaders<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.to_str().ok()
    }

    fn keys(&self) -> Vec<&str> {
        TRACE_HEADERS
            .into_iter()
            .filter(|name| self.0.contains_key(*name))
            .collect()
    }
}
