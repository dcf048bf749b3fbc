// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use handlers::{auth, members, repositories};
pub use state::AppState;

/// Builds the application router with all routes attached
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // Repository routes
        .route(
            "/api/repositories",
            post(repositories::create_repository).get(repositories::list_repositories),
        )
        .route(
            "/api/repositories/:id",
            get(repositories::get_repository).delete(repositories::delete_repository),
        )
        // Member routes
        .route(
            "/api/repositories/:id/members",
            get(members::list_members).post(members::invite_member),
        )
        .route(
            "/api/repositories/:id/members/:user_id",
            delete(members::kick_member),
        )
        .route(
            "/api/repositories/:id/members/:user_id/role",
            put(members::update_member_role),
        )
        .with_state(state)
}
