mod book;
mod health;
mod rent;
mod user;

pub use self::{book::*, health::*, rent::*, user::*};

use crate::handler::AppModule;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

/// Routes are registered without a trailing slash; `/users/` is served as `/users`.
pub fn router(module: AppModule) -> NormalizePath<Router> {
    let router = Router::new()
        .route_health()
        .route_user()
        .route_book()
        .route_rent()
        .layer(CorsLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(module);
    NormalizePath::trim_trailing_slash(router)
}

#[cfg(test)]
mod test {
    use super::router;
    use crate::handler::AppModule;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_http::normalize_path::NormalizePath;

    type App = NormalizePath<Router>;

    async fn send(app: &App, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn app() -> App {
        router(AppModule::new())
    }

    #[tokio::test]
    async fn health_reports_operational() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "E-Library API System");
        assert_eq!(body["description"], "API for managing an online library system");
        assert_eq!(body["status"], "operational");
        assert_eq!(body["system"]["os"], std::env::consts::OS);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn user_lifecycle() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Alice", "email": "alice@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            created,
            json!({"id": 1, "name": "Alice", "email": "alice@example.com", "is_active": true})
        );

        let (status, updated) = send(
            &app,
            Method::PUT,
            "/users/1",
            Some(json!({"email": "alice@library.org"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Alice");
        assert_eq!(updated["email"], "alice@library.org");

        let (status, listed) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        let (status, deactivated) = send(&app, Method::PATCH, "/users/1/deactivate", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deactivated["is_active"], false);

        let (status, body) = send(&app, Method::PATCH, "/users/1/deactivate", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "User not found or already deactivated"}));

        let (status, body) = send(&app, Method::DELETE, "/users/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&app, Method::GET, "/users/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "User not found"}));

        let (status, _) = send(&app, Method::DELETE, "/users/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn book_availability_overrides() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/books",
            Some(json!({"title": "Dune", "author": "Frank Herbert"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["is_available"], true);

        let (status, body) = send(&app, Method::PATCH, "/books/1/mark_available", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Book not found or already marked as available"}));

        let (status, body) = send(&app, Method::PATCH, "/books/1/mark_unavailable", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_available"], false);

        let (status, body) = send(&app, Method::PATCH, "/books/1/mark_unavailable", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"detail": "Book not found or already marked as unavailable"})
        );

        let (status, body) = send(&app, Method::GET, "/books/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Book not found"}));
    }

    #[tokio::test]
    async fn borrow_and_return_over_http() {
        let app = app();
        send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Alice", "email": "alice@example.com"})),
        )
        .await;
        send(
            &app,
            Method::POST,
            "/books",
            Some(json!({"title": "1984", "author": "George Orwell"})),
        )
        .await;

        let (status, record) = send(
            &app,
            Method::POST,
            "/borrow",
            Some(json!({"user_id": 1, "book_id": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record["id"], 1);
        assert_eq!(record["return_date"], Value::Null);
        let today = time::OffsetDateTime::now_utc().date();
        assert_eq!(record["borrow_date"], today.to_string());

        let (status, body) = send(
            &app,
            Method::POST,
            "/borrow",
            Some(json!({"user_id": 1, "book_id": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({"detail": "Book already borrowed by the user"}));

        let (_, book) = send(&app, Method::GET, "/books/1", None).await;
        assert_eq!(book["is_available"], false);

        let (status, returned) = send(&app, Method::POST, "/borrow/return/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(returned["return_date"], today.to_string());

        let (status, body) = send(&app, Method::POST, "/borrow/return/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"detail": "Cannot return book. Check if borrow record exists and book is not already returned."})
        );

        let (_, book) = send(&app, Method::GET, "/books/1", None).await;
        assert_eq!(book["is_available"], true);

        let (status, all) = send(&app, Method::GET, "/borrow/records", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, of_user) = send(&app, Method::GET, "/borrow/records/user/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all, of_user);
    }

    #[tokio::test]
    async fn borrow_failures_map_to_status() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/borrow",
            Some(json!({"user_id": 1, "book_id": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "User not found"}));

        send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Bob", "email": "bob@example.com"})),
        )
        .await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/borrow",
            Some(json!({"user_id": 1, "book_id": 7})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Book not found"}));

        send(&app, Method::PATCH, "/users/1/deactivate", None).await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/borrow",
            Some(json!({"user_id": 1, "book_id": 7})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "User is inactive"}));

        let (status, body) = send(&app, Method::GET, "/borrow/records/user/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "User not found"}));
    }

    #[tokio::test]
    async fn malformed_email_is_unprocessable() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Mallory", "email": "not-an-email"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({"detail": "value is not a valid email address"}));

        let (_, listed) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(listed, json!([]));

        send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Mallory", "email": "mallory@example.com"})),
        )
        .await;
        let (status, _) = send(
            &app,
            Method::PUT,
            "/users/1",
            Some(json!({"email": "mallory@"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, user) = send(&app, Method::GET, "/users/1", None).await;
        assert_eq!(user["email"], "mallory@example.com");
    }

    #[tokio::test]
    async fn trailing_slash_paths_are_served() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/users/",
            Some(json!({"name": "Nina", "email": "nina@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(
            &app,
            Method::POST,
            "/books/",
            Some(json!({"title": "Emma", "author": "Jane Austen"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, record) = send(
            &app,
            Method::POST,
            "/borrow/",
            Some(json!({"user_id": 1, "book_id": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record["id"], 1);

        let (status, _) = send(&app, Method::GET, "/users/1/", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
