//! Auth Middleware
//!
//! The authentication gate (bearer token -> [`AuthContext`]) and the
//! authorization gate (role membership), plus an extractor for handlers.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::headers::extract_bearer_token;

use crate::application::{AuthContext, AuthenticateUseCase, authorize};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_role::AccountRole;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Roles allowed on admin routes
pub const ADMIN_ONLY: &[AccountRole] = &[AccountRole::Admin];

/// Middleware that requires a valid bearer token
///
/// Stores the resulting [`AuthContext`] in the request extensions.
pub async fn require_authentication<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let token = extract_bearer_token(req.headers()).map(str::to_owned);
    let context = use_case.execute(token.as_deref()).await?;
    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

/// Middleware that requires one of `required` roles
///
/// Must be layered inside [`require_authentication`].
pub async fn require_roles(
    State(required): State<&'static [AccountRole]>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    authorize(req.extensions().get::<AuthContext>(), required)?;
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthContext>().copied().ok_or_else(|| {
            tracing::error!(
                path = %parts.uri.path(),
                "AuthContext extracted on a route without the authentication gate"
            );
            AuthError::Unauthenticated
        })
    }
}
