//! Post endpoints: list, submit, read more

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};

use postboard_core::{find_by_user_name, Post, PostSummary};

use crate::http::error::ApiError;
use crate::http::extractors::SubmitPayload;
use crate::http::pages;
use crate::state::AppState;

/// GET / - every post, truncated, under the submission form
async fn list_posts(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let posts = state.store().read_all().await?;
    let summaries: Vec<PostSummary> = posts.iter().map(PostSummary::from).collect();

    Ok(Html(pages::list_page(&summaries)))
}

/// POST /submit - validate, append, redirect home
async fn submit_post(
    State(state): State<AppState>,
    SubmitPayload(fields): SubmitPayload,
) -> Result<Response, ApiError> {
    let post = Post::from_submission(fields.user_name, fields.post_content)?;
    state.store().append(&post).await?;

    tracing::debug!(user = %post.user_name, "post submitted");
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}

/// GET /read-more/{user_name} - first post by that user, in full
async fn read_more(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Html<String>, ApiError> {
    let post = find_by_user_name(state.store(), &user_name)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Html(pages::detail_page(&post)))
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts))
        .route("/submit", post(submit_post))
        .route("/read-more/{user_name}", get(read_more))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use postboard_core::{MemoryPostStore, PostStore};
    use tower::ServiceExt;

    fn app_with(store: Arc<MemoryPostStore>) -> Router {
        router().with_state(AppState::from_shared(store))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/submit")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_empty_board() {
        let app = app_with(Arc::new(MemoryPostStore::new()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Post Your Thoughts"));
    }

    #[tokio::test]
    async fn test_submit_redirects_home() {
        let store = Arc::new(MemoryPostStore::new());
        let app = app_with(Arc::clone(&store));

        let response = app
            .oneshot(form_request("userName=alice&postContent=hello+there"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(
            store.read_all().await.unwrap(),
            vec![Post::new("alice", "hello there")]
        );
    }

    #[tokio::test]
    async fn test_submit_empty_name_is_rejected() {
        let store = Arc::new(MemoryPostStore::from_raw("bob|existing\n"));
        let app = app_with(Arc::clone(&store));
        let before = store.read_all().await.unwrap().len();

        let response = app
            .oneshot(form_request("userName=&postContent=hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Both name and content are required!");
        assert_eq!(store.read_all().await.unwrap().len(), before);
        assert_eq!(store.raw().await, "bob|existing\n");
    }

    #[tokio::test]
    async fn test_submit_missing_content_is_rejected() {
        let store = Arc::new(MemoryPostStore::new());
        let app = app_with(Arc::clone(&store));

        let response = app.oneshot(form_request("userName=alice")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_without_body_type_is_rejected() {
        let store = Arc::new(MemoryPostStore::new());
        let app = app_with(Arc::clone(&store));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/submit")
                    .body(Body::from("userName=alice&postContent=hi"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_json_body() {
        let store = Arc::new(MemoryPostStore::new());
        let app = app_with(Arc::clone(&store));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/submit")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"userName": "dave", "postContent": "from json"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            store.read_all().await.unwrap(),
            vec![Post::new("dave", "from json")]
        );
    }

    #[tokio::test]
    async fn test_submit_broken_json_is_400() {
        let store = Arc::new(MemoryPostStore::new());
        let app = app_with(Arc::clone(&store));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/submit")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"userName": "#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_duplicated_form_key_is_malformed() {
        let store = Arc::new(MemoryPostStore::new());
        let app = app_with(Arc::clone(&store));

        let response = app
            .oneshot(form_request("userName=a&userName=b&postContent=hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(response).await;
        assert!(body.contains("duplicate field"));
        assert_ne!(body, "Both name and content are required!");
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_json_non_string_content_is_malformed() {
        let store = Arc::new(MemoryPostStore::new());
        let app = app_with(Arc::clone(&store));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/submit")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"userName": "a", "postContent": 123}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_ne!(body_text(response).await, "Both name and content are required!");
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_more_returns_first_match() {
        let store = Arc::new(MemoryPostStore::from_raw("alice|oldest\nalice|newest\n"));
        let app = app_with(store);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/read-more/alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("oldest"));
        assert!(!html.contains("newest"));
    }

    #[tokio::test]
    async fn test_read_more_decodes_path() {
        let store = Arc::new(MemoryPostStore::from_raw("mary jane|hi there\n"));
        let app = app_with(store);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/read-more/mary%20jane")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("hi there"));
    }

    #[tokio::test]
    async fn test_read_more_unknown_user_is_404() {
        let app = app_with(Arc::new(MemoryPostStore::from_raw("alice|hello\n")));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/read-more/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Post not found");
    }
}
