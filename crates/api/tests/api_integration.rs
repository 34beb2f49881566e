//! Integration tests for the API server.

use std::sync::Arc;

use api::routes::jokes::AppState;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use joke_store::{InMemoryJokeStore, Joke, JokeStore};
use tower::ServiceExt;

fn setup() -> axum::Router {
    api::create_app(api::create_default_state())
}

fn setup_with_store(store: InMemoryJokeStore) -> (axum::Router, InMemoryJokeStore) {
    let app = api::create_app(Arc::new(AppState::new(store.clone())));
    (app, store)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_joke(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/jokes")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_list_returns_seeded_jokes_in_order() {
    let app = setup();

    let response = app.oneshot(get_request("/v1/jokes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let jokes = json.as_array().unwrap();
    assert_eq!(jokes.len(), 134);
    assert_eq!(jokes[0]["id"], "1");
    assert_eq!(
        jokes[0]["jokeText"],
        "Chuck Norris cannot love, he can only not kill."
    );
    assert_eq!(jokes[133]["id"], "134");
}

#[tokio::test]
async fn test_responses_are_indented_json() {
    let app = setup();

    let response = app.oneshot(get_request("/v1/jokes/1")).await.unwrap();
    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("{\n    \"id\": \"1\","));
}

#[tokio::test]
async fn test_get_joke_by_id() {
    let app = setup();

    let response = app.oneshot(get_request("/v1/jokes/133")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], "133");
    assert_eq!(json["jokeText"], "Chuck Norris knows how to exit VIM");
}

#[tokio::test]
async fn test_get_nonexistent_joke() {
    let app = setup();

    let response = app.oneshot(get_request("/v1/jokes/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"message": "joke not found"}));
}

#[tokio::test]
async fn test_get_duplicate_id_returns_first_match() {
    let (app, store) = setup_with_store(InMemoryJokeStore::with_jokes(vec![
        Joke::new("1", "original"),
        Joke::new("1", "duplicate"),
    ]));

    let response = app.oneshot(get_request("/v1/jokes/1")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["jokeText"], "original");
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_random_returns_stored_joke() {
    let (app, store) = setup_with_store(InMemoryJokeStore::seeded());
    let all = store.list().await.unwrap();

    for _ in 0..20 {
        let response = app
            .clone()
            .oneshot(get_request("/v1/jokes/random"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let joke: Joke = serde_json::from_value(body_json(response).await).unwrap();
        assert!(all.contains(&joke));
    }
}

#[tokio::test]
async fn test_random_on_empty_store() {
    let (app, _) = setup_with_store(InMemoryJokeStore::new());

    let response = app.oneshot(get_request("/v1/jokes/random")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"message": "no jokes available"}));
}

#[tokio::test]
async fn test_create_then_list_and_get() {
    let (app, _) = setup_with_store(InMemoryJokeStore::seeded());

    let response = app
        .clone()
        .oneshot(post_joke(r#"{"id":"200","jokeText":"test joke"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(
        created,
        serde_json::json!({"id": "200", "jokeText": "test joke"})
    );

    let response = app
        .clone()
        .oneshot(get_request("/v1/jokes"))
        .await
        .unwrap();
    let json = body_json(response).await;
    let jokes = json.as_array().unwrap();
    assert_eq!(jokes.len(), 135);
    assert_eq!(jokes.last().unwrap(), &created);

    let response = app.oneshot(get_request("/v1/jokes/200")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_create_with_wrong_field_type_is_rejected() {
    let (app, store) = setup_with_store(InMemoryJokeStore::seeded());

    let response = app.oneshot(post_joke(r#"{"id": 123}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert_eq!(store.len().await, 134);
}

#[tokio::test]
async fn test_create_with_non_json_body_is_rejected() {
    let (app, store) = setup_with_store(InMemoryJokeStore::seeded());

    let response = app.oneshot(post_joke("not json at all")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.len().await, 134);
}

#[tokio::test]
async fn test_create_decodes_body_regardless_of_content_type() {
    let (app, store) = setup_with_store(InMemoryJokeStore::new());

    for (id, content_type) in [
        ("1", None),
        ("2", Some("application/x-www-form-urlencoded")),
        ("3", Some("text/plain")),
    ] {
        let mut builder = Request::builder().method("POST").uri("/v1/jokes");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let body = format!(r#"{{"id":"{id}","jokeText":"hi"}}"#);

        let response = app
            .clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let ids: Vec<_> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|j| j.id)
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_create_with_missing_or_null_fields_stores_empty_strings() {
    let (app, store) = setup_with_store(InMemoryJokeStore::new());

    for body in [r#"{"id":"1"}"#, "{}", r#"{"id":"3","jokeText":null}"#] {
        let response = app.clone().oneshot(post_joke(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let jokes = store.list().await.unwrap();
    assert_eq!(
        jokes,
        vec![Joke::new("1", ""), Joke::new("", ""), Joke::new("3", "")]
    );
}

#[tokio::test]
async fn test_trailing_slash_redirects() {
    let app = setup();

    let response = app
        .clone()
        .oneshot(get_request("/v1/jokes/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()["location"], "/v1/jokes");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health/live/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/health/live");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = setup();

    let response = app.oneshot(get_request("/v2/jokes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_probes() {
    for uri in ["/health/live", "/health/ready"] {
        let app = setup();
        let response = app.oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn test_health_probes_on_empty_store() {
    for uri in ["/health/live", "/health/ready"] {
        let (app, _) = setup_with_store(InMemoryJokeStore::new());
        let response = app.oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_all_stored() {
    let (app, store) = setup_with_store(InMemoryJokeStore::new());

    let requests = (0..100).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            let body = serde_json::json!({"id": format!("p{i}"), "jokeText": "parallel"});
            app.oneshot(post_joke(body.to_string())).await.unwrap()
        })
    });

    for response in futures_util::future::join_all(requests).await {
        assert_eq!(response.unwrap().status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/v1/jokes")).await.unwrap();
    let json = body_json(response).await;
    let mut ids: Vec<String> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();

    let mut expected: Vec<String> = (0..100).map(|i| format!("p{i}")).collect();
    expected.sort();
    assert_eq!(ids, expected);
    assert_eq!(store.len().await, 100);
}
