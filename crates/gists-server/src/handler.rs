//! Request handlers.

use crate::server::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use gists_core::{ErrorResponse, GistsError, GistsResponse, HealthResponse};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Health check endpoint. Never touches upstream.
pub async fn handle_health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

/// `GET /{username}`: relay the user's public gists.
pub async fn handle_gists(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let username = match path {
        Ok(Path(username)) => username,
        Err(rejection) => {
            debug!("Falling back to lossy decoding of {}: {}", uri.path(), rejection);
            lossy_username(&uri)
        }
    };
    debug!("Gists request for {}", username);

    match state.client.fetch_gists(&username).await {
        Ok(gists) => (StatusCode::OK, Json(GistsResponse::new(username, gists))).into_response(),
        Err(e) => error_response(&e),
    }
}

/// JSON 404 for paths outside the two routes.
pub async fn handle_unknown_route() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}

/// Percent-decode the single path segment, replacing invalid UTF-8 with U+FFFD.
fn lossy_username(uri: &Uri) -> String {
    let segment = uri.path().trim_start_matches('/');
    let bytes = urlencoding::decode_binary(segment.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

fn error_response(err: &GistsError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if err.is_not_found() {
        warn!("{}", err);
    } else {
        error!("{}", err);
    }

    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::lossy_username;
    use crate::server::build_router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode, Uri};
    use axum::Router;
    use gists_core::GistsClient;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn router_for(base_url: &str) -> Router {
        build_router(GistsClient::new(base_url).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        // Nothing listens on this upstream; health must not care.
        let (status, body) = get_json(router_for("http://127.0.0.1:1"), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(
            body["message"],
            "GitHub Gists API is running. Use /<username> to fetch gists."
        );
    }

    #[tokio::test]
    async fn test_get_gists_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/gists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "abc123",
                    "description": "Test gist",
                    "public": true,
                    "html_url": "https://gist.github.com/octocat/abc123",
                    "created_at": "2023-01-01T00:00:00Z",
                    "updated_at": "2023-01-02T00:00:00Z",
                    "files": {"test.txt": {"filename": "test.txt"}}
                },
                {
                    "id": "def456",
                    "description": null,
                    "public": false,
                    "files": {"b.py": {}, "a.py": {}}
                }
            ])))
            .mount(&server)
            .await;

        let (status, body) = get_json(router_for(&server.uri()), "/octocat").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "octocat");
        assert_eq!(body["gist_count"], 2);
        assert_eq!(body["gists"].as_array().unwrap().len(), 2);
        assert_eq!(body["gists"][0]["id"], "abc123");
        assert_eq!(body["gists"][0]["files"], json!(["test.txt"]));
        assert_eq!(body["gists"][1]["description"], Value::Null);
        assert_eq!(body["gists"][1]["html_url"], Value::Null);
        assert_eq!(body["gists"][1]["files"], json!(["b.py", "a.py"]));
    }

    #[tokio::test]
    async fn test_get_gists_user_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/nonexistent/gists"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (status, body) = get_json(router_for(&server.uri()), "/nonexistent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User 'nonexistent' not found");
    }

    #[tokio::test]
    async fn test_get_gists_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let (status, body) = get_json(router_for(&server.uri()), "/octocat").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("503"));
    }

    #[tokio::test]
    async fn test_get_gists_upstream_unreachable() {
        let (status, body) = get_json(router_for("http://127.0.0.1:1"), "/octocat").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/gists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "abc123", "files": {"one.md": {}, "two.md": {}}}
            ])))
            .expect(2)
            .mount(&server)
            .await;

        let app = router_for(&server.uri());
        let (_, first) = get_json(app.clone(), "/octocat").await;
        let (_, second) = get_json(app, "/octocat").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_invalid_utf8_username_gets_json_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let response = router_for(&server.uri())
            .oneshot(Request::builder().uri("/%FF").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "User '\u{FFFD}' not found");
    }

    #[test]
    fn test_lossy_username() {
        let uri: Uri = "/caf%C3%A9%FF".parse().unwrap();
        assert_eq!(lossy_username(&uri), "caf\u{e9}\u{FFFD}");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json(router_for("http://127.0.0.1:1"), "/a/b/c").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }
}
