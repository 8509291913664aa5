use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::location::{NewLocation, LocationPatch};
use crate::domain::types::LocationId;
use crate::forms::locations::{AddLocationForm, UpdateLocationForm};
use crate::repository::MemoryRepository;
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id};
use crate::services::locations::{
    create_location as create_location_service, delete_location as delete_location_service,
    get_location as get_location_service, list_locations as list_locations_service,
    update_location as update_location_service,
};

#[get("/locations")]
pub async fn list_locations(repo: web::Data<MemoryRepository>) -> ApiResult {
    let locations = list_locations_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(locations))
}

#[get("/locations/{id}")]
pub async fn get_location(id: web::Path<i32>, repo: web::Data<MemoryRepository>) -> ApiResult {
    let id: LocationId = path_id(id)?;
    let location = get_location_service(id, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(location))
}

#[post("/locations")]
pub async fn create_location(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddLocationForm>,
) -> ApiResult {
    let payload: NewLocation = form.try_into()?;
    let location = create_location_service(payload, &user, repo.get_ref())?;
    Ok(HttpResponse::Created().json(location))
}

#[put("/locations/{id}")]
pub async fn update_location(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdateLocationForm>,
) -> ApiResult {
    let id: LocationId = path_id(id)?;
    let patch: LocationPatch = form.try_into()?;
    let location = update_location_service(id, patch, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(location))
}

#[delete("/locations/{id}")]
pub async fn delete_location(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: LocationId = path_id(id)?;
    delete_location_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
