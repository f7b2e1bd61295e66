//! Auth Router

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{ADMIN_ONLY, require_authentication, require_roles};

/// Routes under `/api/auth`
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    let authenticated = Router::new()
        .route("/me", get(handlers::me::<R>))
        .route("/password", put(handlers::change_password::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authentication::<R>,
        ));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(authenticated)
        .with_state(state)
}

/// Routes under `/api/admin`. Admin role only.
pub fn admin_router<R>(state: AuthAppState<R>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/users", get(handlers::list_accounts::<R>))
        .route("/users/{id}/approve", put(handlers::approve_account::<R>))
        .route("/users/{id}", delete(handlers::delete_account::<R>))
        // Layers run outermost-last: authentication, then the role check
        .route_layer(middleware::from_fn_with_state(ADMIN_ONLY, require_roles))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authentication::<R>,
        ))
        .with_state(state)
}

/// Both routers mounted under `/api`
pub fn portal_router<R>(repo: R, config: AuthConfig) -> AuthResult<Router>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config)?;

    Ok(Router::new()
        .nest("/api/auth", auth_router(state.clone()))
        .nest("/api/admin", admin_router(state)))
}
