//! HTTP span helpers.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = route_template(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Replace request-specific path segments with placeholders so span names and
/// metric labels stay low-cardinality.
fn route_template(path: &str) -> String {
    let mut previous = "";
    let mut segments = Vec::new();

    for segment in path.trim_matches('/').split('/').filter(|s| !s.is_empty()) {
        let templated = if previous == "partners" {
            "{partner}"
        } else if segment.parse::<i64>().is_ok() {
            "{id}"
        } else {
            segment
        };

        segments.push(templated);
        previous = segment;
    }

    format!("/{}", segments.join("/"))
}
