use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::category::{CategoryPatch, NewCategory};
use crate::domain::types::CategoryId;
use crate::forms::categories::{AddCategoryForm, UpdateCategoryForm};
use crate::repository::MemoryRepository;
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id};
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    update_category as update_category_service,
};

#[get("/categories")]
pub async fn list_categories(repo: web::Data<MemoryRepository>) -> ApiResult {
    let categories = list_categories_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/categories/{id}")]
pub async fn get_category(id: web::Path<i32>, repo: web::Data<MemoryRepository>) -> ApiResult {
    let id: CategoryId = path_id(id)?;
    let category = get_category_service(id, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(category))
}

#[post("/categories")]
pub async fn create_category(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddCategoryForm>,
) -> ApiResult {
    let payload: NewCategory = form.try_into()?;
    let category = create_category_service(payload, &user, repo.get_ref())?;
    Ok(HttpResponse::Created().json(category))
}

#[put("/categories/{id}")]
pub async fn update_category(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdateCategoryForm>,
) -> ApiResult {
    let id: CategoryId = path_id(id)?;
    let patch: CategoryPatch = form.try_into()?;
    let category = update_category_service(id, patch, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(category))
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: CategoryId = path_id(id)?;
    delete_category_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
