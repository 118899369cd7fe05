use std::sync::Arc;
use axum::{
    http::StatusCode,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use crate::books::controller::{add_book, find_book_by_id, list_books, remove_book};
use crate::books::domain::BooksService;
use crate::books::factory::create_books_service;
use crate::catalog::dispatcher::OperationDispatcher;
use crate::catalog::factory::create_dispatcher;
use crate::core::auth::verify_token;
use crate::core::command::CommandError;
use crate::core::domain::{BOOKS_API_PATH, Configuration};
use crate::core::library::LibraryError;
use crate::soap::controller::{describe_service, invoke_operation};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Configuration>,
    pub dispatcher: Arc<OperationDispatcher>,
    pub books: Arc<dyn BooksService>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let dispatcher = create_dispatcher(&config);
        AppState {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
            books: create_books_service(),
        }
    }
}

// REST routes sit behind the token gate, the SOAP endpoint does not
pub fn create_router(state: AppState) -> Router {
    let books = Router::new()
        .route("/", get(list_books).post(add_book))
        .route("/:id", get(find_book_by_id).delete(remove_book))
        .route_layer(middleware::from_fn_with_state(state.clone(), verify_token));

    Router::new()
        .nest(BOOKS_API_PATH, books)
        .route(state.config.soap_path.as_str(),
               get(describe_service).post(invoke_operation))
        .with_state(state)
}

pub type ServerError = (StatusCode, Json<Value>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": format!("{}", err) })))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Access { .. } => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "message": err.message() })))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": err.message() })))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": err.message() })))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": err.message() })))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": err.message() })))
            }
        }
    }
}

impl From<LibraryError> for ServerError {
    fn from(err: LibraryError) -> Self {
        ServerError::from(CommandError::from(err))
    }
}
