use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::service::{NewService, ServicePatch};
use crate::domain::types::ServiceId;
use crate::forms::services::{AddServiceForm, UpdateServiceForm};
use crate::repository::MemoryRepository;
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id};
use crate::services::offerings::{
    create_service as create_service_service, delete_service as delete_service_service,
    get_service as get_service_service, get_service_by_slug as get_service_by_slug_service,
    list_services as list_services_service, update_service as update_service_service,
};

#[get("/services")]
pub async fn list_services(repo: web::Data<MemoryRepository>) -> ApiResult {
    let services = list_services_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(services))
}

#[get("/services/slug/{slug}")]
pub async fn get_service_by_slug(
    slug: web::Path<String>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let service = get_service_by_slug_service(&slug, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(service))
}

#[get("/services/{id}")]
pub async fn get_service(id: web::Path<i32>, repo: web::Data<MemoryRepository>) -> ApiResult {
    let id: ServiceId = path_id(id)?;
    let service = get_service_service(id, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(service))
}

#[post("/services")]
pub async fn create_service(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddServiceForm>,
) -> ApiResult {
    let payload: NewService = form.try_into()?;
    let service = create_service_service(payload, &user, repo.get_ref())?;
    Ok(HttpResponse::Created().json(service))
}

#[put("/services/{id}")]
pub async fn update_service(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdateServiceForm>,
) -> ApiResult {
    let id: ServiceId = path_id(id)?;
    let patch: ServicePatch = form.try_into()?;
    let service = update_service_service(id, patch, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(service))
}

#[delete("/services/{id}")]
pub async fn delete_service(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: ServiceId = path_id(id)?;
    delete_service_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
