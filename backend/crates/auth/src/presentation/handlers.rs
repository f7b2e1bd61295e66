//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    ApproveAccountUseCase, AuthContext, ChangePasswordInput, ChangePasswordUseCase,
    CurrentAccountUseCase, DeleteAccountUseCase, ListAccountsUseCase, LoginInput, LoginUseCase,
    RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{AccountFilter, AccountRepository};
use crate::domain::value_object::{
    AccountId, account_password::AccountPassword, account_role::AccountRole,
    approval_state::ApprovalState,
};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AccountListResponse, AccountResponse, ApproveRequest, ApproveResponse, ChangePasswordRequest,
    ListAccountsQuery, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use platform::headers::BEARER_SCHEME;

/// Shared state for auth handlers and middleware
pub struct AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
    /// Hashed once here so a login for an unknown email still does Argon2 work
    pub decoy: Arc<AccountPassword>,
}

impl<R> AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> AuthResult<Self> {
        let tokens = TokenService::from_config(&config);
        let decoy = AccountPassword::decoy(config.password_cost, config.pepper())?;
        Ok(Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            decoy: Arc::new(decoy),
        })
    }
}

impl<R> Clone for AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
            tokens: self.tokens.clone(),
            decoy: self.decoy.clone(),
        }
    }
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AuthError::Validation(rejection.body_text()))
}

fn path_id(id: Result<Path<AccountId>, PathRejection>) -> AuthResult<AccountId> {
    id.map(|Path(id)| id)
        .map_err(|_| AuthError::Validation("Invalid account id".to_string()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let req = json_body(payload)?;
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let account = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            mobile: req.mobile,
            password: req.password,
            role: req.role,
        })
        .await?;

    let message = if account.can_log_in() {
        "Registration successful"
    } else {
        "Registration successful. Your account is pending approval"
    };

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: message.to_string(),
            account: AccountResponse::from(&account),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let req = json_body(payload)?;
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
        state.decoy.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
            role: req.role,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
        token_type: BEARER_SCHEME,
        expires_in: state.tokens.ttl_secs(),
        account: AccountResponse::from(&output.account),
    }))
}

// ============================================================================
// Current account
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    context: AuthContext,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let account = CurrentAccountUseCase::new(state.repo.clone())
        .execute(&context)
        .await?;

    Ok(Json(AccountResponse::from(&account)))
}

/// PUT /api/auth/password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    context: AuthContext,
    payload: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> AuthResult<StatusCode>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let req = json_body(payload)?;

    ChangePasswordUseCase::new(state.repo.clone(), state.config.clone())
        .execute(
            &context,
            ChangePasswordInput {
                current_password: req.current_password,
                new_password: req.new_password,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/users?role=&approved=
pub async fn list_accounts<R>(
    State(state): State<AuthAppState<R>>,
    query: Result<Query<ListAccountsQuery>, QueryRejection>,
) -> AuthResult<Json<AccountListResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|rejection| AuthError::Validation(rejection.body_text()))?;

    let filter = AccountFilter {
        role: query
            .role
            .as_deref()
            .map(str::parse::<AccountRole>)
            .transpose()?,
        approval: query.approved.map(ApprovalState::from_approved),
    };

    let accounts = ListAccountsUseCase::new(state.repo.clone())
        .execute(filter)
        .await?;

    Ok(Json(AccountListResponse {
        count: accounts.len(),
        accounts: accounts.iter().map(AccountResponse::from).collect(),
    }))
}

/// PUT /api/admin/users/{id}/approve
pub async fn approve_account<R>(
    State(state): State<AuthAppState<R>>,
    context: AuthContext,
    id: Result<Path<AccountId>, PathRejection>,
    payload: Result<Json<ApproveRequest>, JsonRejection>,
) -> AuthResult<Json<ApproveResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let account_id = path_id(id)?;
    let req = json_body(payload)?;

    let account = ApproveAccountUseCase::new(state.repo.clone())
        .execute(context.account_id, account_id, req.is_approved)
        .await?;

    let message = if account.is_approved() {
        "Account approved"
    } else {
        "Account approval revoked"
    };

    Ok(Json(ApproveResponse {
        message: message.to_string(),
        account: AccountResponse::from(&account),
    }))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_account<R>(
    State(state): State<AuthAppState<R>>,
    context: AuthContext,
    id: Result<Path<AccountId>, PathRejection>,
) -> AuthResult<StatusCode>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let account_id = path_id(id)?;

    DeleteAccountUseCase::new(state.repo.clone())
        .execute(context.account_id, account_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
