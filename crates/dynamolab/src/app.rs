use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        music::{get_music, list_music, seed_music},
        notes::{create_note, delete_note, list_notes, update_note},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/notes", post(create_note).put(update_note))
        .route("/notes/{user_id}", get(list_notes).delete(delete_note))
        .route("/music", get(get_music).post(seed_music))
        .route("/music/all", get(list_music))
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        create_app(AppState::default(), Duration::from_secs(10))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let response = test_app().oneshot(get_request("/livez")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_note_lifecycle() {
        let app = test_app();

        // Create
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/notes",
                json!({"userId": "u1", "timestamp": 100, "title": "T", "content": "C"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["userId"], "u1");
        assert_eq!(created["timestamp"], 100);
        assert_eq!(created["title"], "T");

        // Duplicate create hits the guard
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/notes",
                json!({"userId": "u1", "timestamp": 100, "title": "Other"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_text(response).await,
            "cannot change item while trying to add an entry"
        );

        // Update only the content
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/notes",
                json!({"userId": "u1", "timestamp": 100, "content": "C2"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // List shows the merged note
        let response = app.clone().oneshot(get_request("/notes/u1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let notes = body_json(response).await;
        let notes = notes.as_array().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["title"], "T");
        assert_eq!(notes[0]["content"], "C2");

        // Delete returns the prior value
        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                "/notes/u1",
                json!({"userId": "u1", "timestamp": 100}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let deleted = body_json(response).await;
        assert_eq!(deleted["content"], "C2");
        assert_eq!(deleted["title"], "T");

        // Partition is empty again
        let response = app.oneshot(get_request("/notes/u1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_empty_partition() {
        let response = test_app()
            .oneshot(get_request("/notes/nobody"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_delete_missing_note() {
        let response = test_app()
            .oneshot(json_request("DELETE", "/notes/u1", json!({"timestamp": 5})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(response).await,
            "the item specified item cannot be deleted"
        );
    }

    #[tokio::test]
    async fn test_delete_with_mismatched_user() {
        let response = test_app()
            .oneshot(json_request(
                "DELETE",
                "/notes/u1",
                json!({"userId": "u2", "timestamp": 5}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_empty_user_id() {
        let response = test_app()
            .oneshot(json_request(
                "POST",
                "/notes",
                json!({"userId": "", "timestamp": 1}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "Invalid data: userId must not be empty"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/notes")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_note_upserts() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/notes",
                json!({"userId": "u9", "timestamp": 7, "title": "New"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/notes/u9")).await.unwrap();
        let notes = body_json(response).await;
        assert_eq!(notes[0]["title"], "New");
    }

    #[tokio::test]
    async fn test_music_seed_list_and_get() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/music")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"inserted": 10}));

        let response = app
            .clone()
            .oneshot(get_request("/music/all"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 10);

        let response = app
            .clone()
            .oneshot(get_request("/music?artist=Hoodoo%20Gurus&song=Out%20That%20Door0"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let music = body_json(response).await;
        assert_eq!(music["artist"], "Hoodoo Gurus");
        assert_eq!(music["song"], "Out That Door0");

        let response = app
            .clone()
            .oneshot(get_request("/music?artist=Hoodoo%20Gurus&song=Nope"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(get_request("/music?artist=Hoodoo%20Gurus"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "Invalid data: song is required"
        );
    }
}
