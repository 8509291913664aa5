use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::class::{ClassPatch, NewClass};
use crate::domain::types::{CategoryId, ClassId, LocationId, SpotCount};
use crate::forms::classes::{AddClassForm, UpdateAvailabilityForm, UpdateClassForm};
use crate::repository::{ClassListQuery, MemoryRepository};
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id, query_id};
use crate::services::classes::{
    create_class as create_class_service, delete_class as delete_class_service,
    get_class as get_class_service, list_classes as list_classes_service,
    update_class as update_class_service,
    update_class_availability as update_class_availability_service,
};

/// `?category=&location=&search=`; blank values are ignored.
#[derive(Debug, Deserialize)]
pub struct ClassesQueryParams {
    pub category: Option<String>,
    pub location: Option<String>,
    pub search: Option<String>,
}

#[get("/classes")]
pub async fn list_classes(
    params: web::Query<ClassesQueryParams>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let params = params.into_inner();
    let mut query = ClassListQuery::default();
    if let Some(category_id) = query_id::<CategoryId>(params.category.as_deref(), "category")? {
        query = query.category(category_id);
    }
    if let Some(location_id) = query_id::<LocationId>(params.location.as_deref(), "location")? {
        query = query.location(location_id);
    }
    if let Some(search) = params.search {
        query = query.search(search);
    }

    let classes = list_classes_service(query, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(classes))
}

#[get("/classes/{id}")]
pub async fn get_class(id: web::Path<i32>, repo: web::Data<MemoryRepository>) -> ApiResult {
    let id: ClassId = path_id(id)?;
    let class = get_class_service(id, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(class))
}

#[post("/classes")]
pub async fn create_class(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddClassForm>,
) -> ApiResult {
    let payload: NewClass = form.try_into()?;
    let class = create_class_service(payload, &user, repo.get_ref())?;
    Ok(HttpResponse::Created().json(class))
}

#[put("/classes/{id}")]
pub async fn update_class(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdateClassForm>,
) -> ApiResult {
    let id: ClassId = path_id(id)?;
    let patch: ClassPatch = form.try_into()?;
    let class = update_class_service(id, patch, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(class))
}

#[put("/classes/{id}/availability")]
pub async fn update_class_availability(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdateAvailabilityForm>,
) -> ApiResult {
    let id: ClassId = path_id(id)?;
    let available_spots: SpotCount = form.try_into()?;
    let class = update_class_availability_service(id, available_spots, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(class))
}

#[delete("/classes/{id}")]
pub async fn delete_class(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: ClassId = path_id(id)?;
    delete_class_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
