//! HTTP routes for Polaris server.

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use polaris_core::GraphValidator;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::protocol::{PipelineRequest, PipelineSummary};

/// Create the router with all routes.
pub fn create_router(config: &ServerConfig) -> ServerResult<Router> {
    let cors = cors_layer(&config.allowed_origins)?;

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/pipelines/parse", post(parse_pipeline_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    Ok(router)
}

/// CORS policy for the node editor frontend.
///
/// Credentials are allowed, so origins must be listed explicitly and request
/// headers are mirrored rather than wildcarded.
fn cors_layer(origins: &[String]) -> ServerResult<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(ServerError::InvalidOrigin(
                    "wildcard origin cannot be combined with credentials".to_string(),
                ));
            }
            HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<ServerResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Health check handler.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Count nodes and edges of a submitted pipeline and check it is a DAG.
async fn parse_pipeline_handler(
    Json(pipeline): Json<PipelineRequest>,
) -> ServerResult<Json<PipelineSummary>> {
    tracing::debug!(nodes = ?pipeline.nodes, edges = ?pipeline.edges, "Received pipeline");

    // CPU-bound and linear in the payload; keep it off the async workers.
    let validation =
        tokio::task::spawn_blocking(move || GraphValidator::validate_pipeline(&pipeline))
            .await
            .map_err(|e| ServerError::Internal(format!("validation task failed: {e}")))??;

    Ok(Json(validation.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polaris_core::{Edge, Node, Pipeline};

    #[test]
    fn test_wildcard_origin_rejected() {
        let err = cors_layer(&["*".to_string()]).unwrap_err();
        assert!(matches!(err, ServerError::InvalidOrigin(_)));
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let err = cors_layer(&["http://bad\norigin".to_string()]).unwrap_err();
        assert!(matches!(err, ServerError::InvalidOrigin(_)));
    }

    #[test]
    fn test_default_config_builds_router() {
        assert!(create_router(&ServerConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_handler_reports_cycle() {
        let pipeline = Pipeline::new(
            vec![Node::new("1"), Node::new("2")],
            vec![Edge::new("1", "2"), Edge::new("2", "1")],
        );
        let Json(summary) = parse_pipeline_handler(Json(pipeline)).await.unwrap();
        assert_eq!(
            summary,
            PipelineSummary {
                num_nodes: 2,
                num_edges: 2,
                is_dag: false
            }
        );
    }

    #[tokio::test]
    async fn test_handler_surfaces_input_errors() {
        let pipeline = Pipeline::new(vec![Node::new("1")], vec![Edge::new("1", "2")]);
        let err = parse_pipeline_handler(Json(pipeline)).await.unwrap_err();
        assert!(matches!(
            err,
            ServerError::Core(polaris_core::Error::UnknownNodeReference { .. })
        ));
    }
}
