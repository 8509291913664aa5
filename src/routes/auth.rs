//! Session login/logout and the extractor that resolves the signed-in user.

use std::future::{Ready, ready};

use actix_identity::{Identity, IdentityExt};
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, HttpResponse, get, post, web};
use serde_json::json;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::UserId;
use crate::forms::auth::{LoginForm, RegisterForm, RegisterFormPayload};
use crate::repository::MemoryRepository;
use crate::routes::{ApiError, ApiResult};
use crate::services::{ServiceError, ensure_admin};
use crate::services::auth::{
    current_user as current_user_service, login as login_service,
    register as register_service,
};

/// Name of the signed session cookie.
pub const SESSION_COOKIE: &str = "studio_session";

/// Cookie-backed session store carrying the user id set by [`Identity::login`].
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(secure)
        .build()
}

/// Resolve the session into a fresh copy of the user so role changes take
/// effect on the next request.
fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let identity = req
        .get_identity()
        .map_err(|_| ServiceError::Unauthenticated)?;
    let raw_id = identity.id().map_err(|e| {
        log::warn!("Session without a readable identity: {e}");
        ServiceError::Unauthenticated
    })?;
    let user_id = raw_id
        .parse::<i32>()
        .ok()
        .and_then(|id| UserId::new(id).ok())
        .ok_or(ServiceError::Unauthenticated)?;

    let repo = req
        .app_data::<web::Data<MemoryRepository>>()
        .ok_or_else(|| {
            log::error!("MemoryRepository is not registered as app data");
            ServiceError::Internal
        })?;

    Ok(current_user_service(user_id, repo.get_ref())?)
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// A signed-in administrator.
///
/// Handlers list it before any body or path extractor, so callers without the
/// role are turned away before their input is read.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

fn authorize_admin(req: &HttpRequest) -> Result<AdminUser, ApiError> {
    let user = authenticate(req)?;
    ensure_admin(&user)?;
    Ok(AdminUser(user))
}

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorize_admin(req))
    }
}

fn start_session(req: &HttpRequest, user: &AuthenticatedUser) -> Result<(), ApiError> {
    Identity::login(&req.extensions(), user.id.to_string()).map_err(|e| {
        log::error!("Failed to attach identity to session: {e}");
        ApiError::from(ServiceError::Internal)
    })?;
    Ok(())
}

#[post("/register")]
pub async fn register(
    req: HttpRequest,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<RegisterForm>,
) -> ApiResult {
    let payload: RegisterFormPayload = form.try_into()?;
    let user = register_service(payload, repo.get_ref())?;
    start_session(&req, &user)?;
    Ok(HttpResponse::Created().json(user))
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<LoginForm>,
) -> ApiResult {
    let user = login_service(form, repo.get_ref())?;
    start_session(&req, &user)?;
    log::info!("User {} logged in", user.username);
    Ok(HttpResponse::Ok().json(user))
}

#[post("/logout")]
pub async fn logout(identity: Option<Identity>) -> HttpResponse {
    if let Some(identity) = identity {
        identity.logout();
    }
    HttpResponse::Ok().json(json!({ "message": "Logged out" }))
}

#[get("/user")]
pub async fn current_user(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user)
}
