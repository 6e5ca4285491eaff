//! Root span builder tagging every request span with a request id.

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};
use uuid::Uuid;

/// Header checked for an id forwarded by a proxy or load balancer.
pub static REQUEST_ID_HEADER: &str = "x-request-id";

/// Root span builder that reuses a client-supplied request id when present,
/// so traces correlate across hops, and generates a fresh UUID otherwise.
pub struct RequestIdSpan;

impl RootSpanBuilder for RequestIdSpan {
    fn on_request_start(request: &ServiceRequest) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        tracing_actix_web::root_span!(request, request_id = %request_id)
    }

    fn on_request_end<B: MessageBody>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}
