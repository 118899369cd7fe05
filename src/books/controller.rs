use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use crate::books::dto::{BookDto, CreateBookDto};
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::library::LibraryError;

#[derive(Debug, Default, Deserialize)]
pub struct BookQuery {
    pub author: Option<String>,
}

// ids that are not numbers can never match a row
fn parse_id(id: &str) -> Result<i64, ServerError> {
    id.parse::<i64>().map_err(|_| ServerError::from(LibraryError::book_not_found()))
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let res = state.books.find_books(query.author.as_deref()).await?;
    Ok(Json(res))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<BookDto>, ServerError> {
    let res = state.books.find_book_by_id(parse_id(book_id.as_str())?).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let req: CreateBookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = state.books.add_book(&req).await?;
    info!(book_id = res.id, "book created");
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<StatusCode, ServerError> {
    let id = parse_id(book_id.as_str())?;
    state.books.remove_book(id).await?;
    info!(book_id = id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;
    use crate::core::controller::{AppState, create_router};
    use crate::core::domain::Configuration;

    fn build_app(token: Option<&str>) -> Router {
        let mut config = Configuration::new("test");
        config.api_token = token.map(str::to_string);
        create_router(AppState::new(config))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("should respond");
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.expect("should read body");
        let json = if body.is_empty() { Value::Null } else { serde_json::from_slice(&body).expect("should be json") };
        (status, json)
    }

    fn create_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/books")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("should build request")
    }

    #[tokio::test]
    async fn test_should_create_and_get_book() {
        let app = build_app(None);

        let (status, created) = send(app.clone(), create_request(r#"{"title":"Dune","author":"Herbert","year":1965}"#)).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(1, created["id"]);
        assert_eq!("Dune", created["title"]);
        assert!(created.get("createdAt").is_some());

        let request = Request::builder().uri("/api/books/1").body(Body::empty()).expect("should build request");
        let (status, loaded) = send(app, request).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("Herbert", loaded["author"]);
        assert_eq!(1965, loaded["year"]);
    }

    #[tokio::test]
    async fn test_should_reject_missing_title() {
        let app = build_app(None);
        let (status, body) = send(app, create_request(r#"{"author":"Nobody"}"#)).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn test_should_filter_by_author() {
        let app = build_app(None);
        let _ = send(app.clone(), create_request(r#"{"title":"A","author":"ann"}"#)).await;
        let _ = send(app.clone(), create_request(r#"{"title":"B","author":"bob"}"#)).await;

        let request = Request::builder().uri("/api/books?author=ann").body(Body::empty()).expect("should build request");
        let (status, books) = send(app.clone(), request).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(1, books.as_array().expect("should be array").len());
        assert_eq!("A", books[0]["title"]);

        let request = Request::builder().uri("/api/books").body(Body::empty()).expect("should build request");
        let (_, books) = send(app, request).await;
        assert_eq!(2, books.as_array().expect("should be array").len());
    }

    #[tokio::test]
    async fn test_should_delete_book() {
        let app = build_app(None);
        let _ = send(app.clone(), create_request(r#"{"title":"A"}"#)).await;

        let delete = || Request::builder().method("DELETE").uri("/api/books/1").body(Body::empty()).expect("should build request");
        let (status, _) = send(app.clone(), delete()).await;
        assert_eq!(StatusCode::NO_CONTENT, status);

        let (status, body) = send(app.clone(), delete()).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("Book not found", body["message"]);

        let request = Request::builder().uri("/api/books/abc").body(Body::empty()).expect("should build request");
        let (status, _) = send(app, request).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_require_token_when_configured() {
        let app = build_app(Some("secret"));

        let request = Request::builder().uri("/api/books").body(Body::empty()).expect("should build request");
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(StatusCode::UNAUTHORIZED, status);
        assert!(body.get("message").is_some());

        let request = Request::builder().uri("/api/books")
            .header("authorization", "Bearer wrong").body(Body::empty()).expect("should build request");
        let (status, _) = send(app.clone(), request).await;
        assert_eq!(StatusCode::UNAUTHORIZED, status);

        let request = Request::builder().uri("/api/books")
            .header("authorization", "Bearer secret").body(Body::empty()).expect("should build request");
        let (status, _) = send(app, request).await;
        assert_eq!(StatusCode::OK, status);
    }
}
