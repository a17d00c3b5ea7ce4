use axum::Router;
use shared_types::FeatureFlags;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Wrap the API router in the cross-cutting layers.
///
/// Layers run outside-in: the request id is assigned first so the trace
/// span and the OTLP span both see it.
pub fn apply(router: Router, flags: &FeatureFlags) -> Router {
    let mut router = router;

    if flags.telemetry {
        router = router.layer(crate::telemetry::OtelTraceLayer);
    }

    if flags.cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
