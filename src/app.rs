use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::handlers::{self, CrudError, CrudOutcome};
use crate::page::Pages;
use crate::render;
use crate::store::SheetStore;

pub struct AppState {
    store: Mutex<SheetStore>,
    pages: Pages,
    sheet_name: String,
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Open the store once; it lives behind the state mutex for the whole
    // process.
    let store = match &config.data_file {
        Some(path) => SheetStore::open(path)?,
        None => SheetStore::in_memory(),
    };
    let pages = Pages::load(&config.templates_dir)?;

    let app_state = Arc::new(AppState {
        store: Mutex::new(store),
        pages,
        sheet_name: config.sheet_name.clone(),
    });

    // Build router
    let app = Router::new()
        .route("/", get(serve_page))
        .route("/fragment/:name", get(serve_fragment))
        .route("/api/insert", post(insert_data))
        .route("/api/select", post(select_data))
        .route("/api/update", post(update_data))
        .route("/api/delete", post(delete_data))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(app_state);

    // Start server
    let listener = TcpListener::bind(&config.bind).await?;
    log::info!("listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_page(State(state): State<Arc<AppState>>) -> Response {
    match state.pages.render_page(&state.sheet_name) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::error!("page render failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}

async fn serve_fragment(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.pages.include(&name) {
        Some(text) => text.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn insert_data(State(state): State<Arc<AppState>>, text: String) -> Response {
    let mut store = state.store.lock().unwrap();
    crud_response("insert", handlers::insert_data(&mut *store, &text))
}

async fn select_data(State(state): State<Arc<AppState>>, a: String) -> Response {
    let mut store = state.store.lock().unwrap();
    crud_response("select", handlers::select_data(&mut *store, &a))
}

async fn update_data(State(state): State<Arc<AppState>>, text: String) -> Response {
    let mut store = state.store.lock().unwrap();
    crud_response("update", handlers::update_data(&mut *store, &text))
}

async fn delete_data(State(state): State<Arc<AppState>>, a: String) -> Response {
    let mut store = state.store.lock().unwrap();
    crud_response("delete", handlers::delete_data(&mut *store, &a))
}

/// Domain outcomes render as 200 fragments, success and error alike; only
/// malformed payloads and store failures become HTTP errors.
fn crud_response(op: &str, result: Result<CrudOutcome, CrudError>) -> Response {
    match result {
        Ok(outcome) => {
            match &outcome {
                CrudOutcome::EmptyKey | CrudOutcome::DuplicateKey | CrudOutcome::NotFound => {
                    log::warn!("{} rejected: {:?}", op, outcome)
                }
                _ => log::info!("{} ok", op),
            }
            Html(render::render_outcome(&outcome)).into_response()
        }
        Err(e) => {
            log::error!("{} failed: {}", op, e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
