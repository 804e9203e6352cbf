pub mod config;
pub mod display_mode;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};
use store::StorePool;

#[derive(Clone)]
pub struct AppState {
    pub store: StorePool,
    pub base_path: Arc<String>,
}

pub fn create_app(state: AppState) -> Router {
    let base_path = state.base_path.clone();

    let mut app_routes: Router<AppState> = Router::new();
    for route in routes::ROUTES {
        let mode = route.display_mode;
        app_routes = app_routes.route(
            route.path,
            get(move |state: State<AppState>| handlers::web::view(state, mode)),
        );
    }

    let app_routes = app_routes
        .route("/api/routes", get(handlers::api::list_routes))
        .route("/api/todos", get(handlers::api::find_todos))
        .route("/api/todos", post(handlers::api::create_new_todo))
        .route(
            "/api/todos/finished",
            delete(handlers::api::clear_finished),
        )
        .route("/api/todos/{id}", get(handlers::api::get_single_todo))
        .route("/api/todos/{id}", put(handlers::api::update_existing_todo))
        .route(
            "/api/todos/{id}",
            delete(handlers::api::delete_existing_todo),
        )
        .layer(
            tower::ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(tower_http::compression::CompressionLayer::new()),
        )
        .with_state(state);

    tracing::info!("base_path: {base_path:?}");

    if base_path.is_empty() {
        app_routes
    } else {
        Router::new().nest(&*base_path, app_routes)
    }
}
