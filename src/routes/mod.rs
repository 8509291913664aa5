//! JSON HTTP surface of the site.
//!
//! Handlers stay thin: they parse the request, call the matching service
//! function and turn the result into a response. Every failure is rendered
//! as `{"message": ..., "errors": ...}` through [`ApiError`].

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, error, web};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::services::ServiceError;

pub mod auth;
pub mod blog;
pub mod categories;
pub mod classes;
pub mod locations;
pub mod messages;
pub mod offerings;
pub mod portfolio;
pub mod team;
pub mod testimonials;

/// Error returned by every handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Invalid id: {0}")]
    InvalidId(#[from] TypeConstraintError),
    #[error("Invalid query parameter `{name}`: {reason}")]
    InvalidQuery { name: &'static str, reason: String },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a ValidationErrors>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            ApiError::Service(ServiceError::Forbidden) => StatusCode::FORBIDDEN,
            ApiError::Service(ServiceError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Service(ServiceError::Form(_)) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Form(_) | ApiError::InvalidId(_) | ApiError::InvalidQuery { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            ApiError::Form(form_error) => form_error.field_errors(),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
            errors,
        })
    }
}

/// Result type of every handler.
pub type ApiResult = Result<HttpResponse, ApiError>;

/// Turn a raw path segment into a typed id; non-positive values are a 400.
pub(crate) fn path_id<T>(raw: web::Path<i32>) -> Result<T, ApiError>
where
    T: TryFrom<i32, Error = TypeConstraintError>,
{
    Ok(T::try_from(raw.into_inner())?)
}

/// Parse an optional numeric query filter. Blank values mean "no filter".
pub(crate) fn query_id<T>(raw: Option<&str>, name: &'static str) -> Result<Option<T>, ApiError>
where
    T: TryFrom<i32, Error = TypeConstraintError>,
{
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let invalid = |reason: String| ApiError::InvalidQuery { name, reason };
    let value: i32 = raw
        .parse()
        .map_err(|_| invalid(format!("expected an integer, got `{raw}`")))?;
    T::try_from(value)
        .map(Some)
        .map_err(|e| invalid(e.to_string()))
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody {
        message,
        errors: None,
    })
}

/// Malformed JSON bodies (syntax errors, unknown fields, wrong types) are a 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid request body: {err}");
        error::InternalError::from_response(err, bad_request(message)).into()
    })
}

/// Path segments that are not integers are a 400 rather than a 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid path: {err}");
        error::InternalError::from_response(err, bad_request(message)).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid query string: {err}");
        error::InternalError::from_response(err, bad_request(message)).into()
    })
}

/// Register every `/api` route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            .app_data(query_config())
            // auth
            .service(auth::register)
            .service(auth::login)
            .service(auth::logout)
            .service(auth::current_user)
            // public catalogue
            .service(categories::list_categories)
            .service(categories::get_category)
            .service(locations::list_locations)
            .service(locations::get_location)
            .service(classes::list_classes)
            .service(classes::get_class)
            .service(offerings::list_services)
            .service(offerings::get_service_by_slug)
            .service(offerings::get_service)
            .service(portfolio::list_portfolio_items)
            .service(portfolio::get_portfolio_item)
            .service(team::list_team_members)
            .service(team::get_team_member)
            .service(testimonials::list_testimonials)
            .service(testimonials::get_testimonial)
            .service(blog::list_blog_posts)
            .service(blog::get_blog_post_by_slug)
            .service(blog::get_blog_post)
            .service(messages::submit_message)
            .service(
                web::scope("/admin")
                    .service(categories::create_category)
                    .service(categories::update_category)
                    .service(categories::delete_category)
                    .service(locations::create_location)
                    .service(locations::update_location)
                    .service(locations::delete_location)
                    .service(classes::create_class)
                    .service(classes::update_class_availability)
                    .service(classes::update_class)
                    .service(classes::delete_class)
                    .service(offerings::create_service)
                    .service(offerings::update_service)
                    .service(offerings::delete_service)
                    .service(portfolio::create_portfolio_item)
                    .service(portfolio::update_portfolio_item)
                    .service(portfolio::delete_portfolio_item)
                    .service(team::create_team_member)
                    .service(team::update_team_member)
                    .service(team::delete_team_member)
                    .service(testimonials::create_testimonial)
                    .service(testimonials::update_testimonial)
                    .service(testimonials::delete_testimonial)
                    .service(blog::create_blog_post)
                    .service(blog::update_blog_post)
                    .service(blog::delete_blog_post)
                    .service(messages::list_messages)
                    .service(messages::get_message)
                    .service(messages::delete_message),
            ),
    );
}
