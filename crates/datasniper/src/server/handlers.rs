use super::{AppState, SummarizeRequest, SummarizeResponse};
use crate::prelude::{eprintln, Error};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use datasniper_core::summary::{Language, Style};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, Error> {
    let Json(request) = payload.map_err(|e| Error::InvalidRequest(e.body_text()))?;

    let query = request
        .query
        .as_deref()
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .ok_or(Error::MissingQuery)?;

    let style = request
        .style
        .as_deref()
        .map(Style::parse_or_default)
        .unwrap_or_default();
    let language = request
        .language
        .as_deref()
        .map(Language::parse_or_default)
        .unwrap_or_default();

    if state.verbose {
        eprintln!(
            "Summarize: query='{}', style={}, language={}",
            query,
            style.as_str(),
            language.name()
        );
    }

    let summary = crate::summarize::summarize_data(&state.client, query, style, language)
        .await
        .map_err(|e| {
            log::error!("Summarize failed: {e}");
            Error::Upstream(e.to_string())
        })?;

    crate::history::append_entry(&state.log_file, query, &summary)
        .await
        .map_err(|e| Error::Internal(e.to_string()))?;

    Ok(Json(SummarizeResponse { summary }))
}

#[cfg(test)]
mod tests {
    use super::super::router;
    use super::*;
    use crate::cohere::CohereClient;
    use crate::config::test_config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct Harness {
        server: mockito::ServerGuard,
        state: Arc<AppState>,
        _temp_dir: TempDir,
    }

    async fn harness() -> Harness {
        let server = mockito::Server::new_async().await;
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&server.url(), temp_dir.path().join("queries.log"));
        let state = Arc::new(AppState {
            client: CohereClient::new(&config).unwrap(),
            log_file: config.log_file.clone(),
            verbose: false,
        });

        Harness {
            server,
            state,
            _temp_dir: temp_dir,
        }
    }

    async fn post_summarize(state: Arc<AppState>, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        let resp = router(state).oneshot(req).await.expect("oneshot failed");
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .expect("failed to read body");
        (status, serde_json::from_slice(&bytes).expect("body is not valid JSON"))
    }

    fn reply_body(text: &str) -> String {
        json!({
            "finish_reason": "COMPLETE",
            "message": {"role": "assistant", "content": [{"type": "text", "text": text}]}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_missing_query_is_rejected() {
        let h = harness().await;

        for body in [r#"{}"#, r#"{"query": ""}"#, r#"{"query": "   "}"#, r#"{"query": null}"#] {
            let (status, json) = post_summarize(h.state.clone(), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json, json!({"error": "Query is missing"}), "{body}");
        }

        assert!(!h.state.log_file.exists());
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let h = harness().await;

        let (status, json) = post_summarize(h.state.clone(), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_summary_is_returned_and_logged() {
        let mut h = harness().await;
        h.server
            .mock("POST", "/v2/chat")
            .with_status(200)
            .with_body(reply_body("Ownership explained simply."))
            .create_async()
            .await;

        let (status, json) = post_summarize(
            h.state.clone(),
            r#"{"query": "rust ownership", "style": "eli5", "language": "klingon"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"summary": "Ownership explained simply."}));

        let log = std::fs::read_to_string(&h.state.log_file).unwrap();
        assert!(log.contains("Query: rust ownership\n\nOwnership explained simply.\n"));
    }

    #[tokio::test]
    async fn test_upstream_error_is_surfaced_verbatim() {
        let mut h = harness().await;
        h.server
            .mock("POST", "/v2/chat")
            .with_status(429)
            .with_body(r#"{"message": "rate limit exceeded"}"#)
            .create_async()
            .await;

        let (status, json) = post_summarize(h.state.clone(), r#"{"query": "rust"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            json!({"error": "Cohere Error: HTTP 429: rate limit exceeded"})
        );
        assert!(!h.state.log_file.exists());
    }

    #[tokio::test]
    async fn test_index_serves_form() {
        let h = harness().await;
        let req = Request::builder()
            .uri("/")
            .body(Body::empty())
            .expect("failed to build request");

        let resp = router(h.state.clone()).oneshot(req).await.expect("oneshot failed");
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/summarize"));
    }

    #[tokio::test]
    async fn test_health() {
        let h = harness().await;
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("failed to build request");

        let resp = router(h.state.clone()).oneshot(req).await.expect("oneshot failed");
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
