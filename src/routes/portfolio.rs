use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::portfolio::{NewPortfolioItem, PortfolioItemPatch};
use crate::domain::types::{PortfolioItemId, ServiceId};
use crate::forms::portfolio::{AddPortfolioItemForm, UpdatePortfolioItemForm};
use crate::repository::{MemoryRepository, PortfolioListQuery};
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id, query_id};
use crate::services::portfolio::{
    create_portfolio_item as create_portfolio_item_service,
    delete_portfolio_item as delete_portfolio_item_service,
    get_portfolio_item as get_portfolio_item_service,
    list_portfolio_items as list_portfolio_items_service,
    update_portfolio_item as update_portfolio_item_service,
};

#[derive(Debug, Deserialize)]
pub struct PortfolioQueryParams {
    pub service: Option<String>,
}

#[get("/portfolio")]
pub async fn list_portfolio_items(
    params: web::Query<PortfolioQueryParams>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let mut query = PortfolioListQuery::default();
    if let Some(service_id) = query_id::<ServiceId>(params.service.as_deref(), "service")? {
        query = query.service(service_id);
    }
    let items = list_portfolio_items_service(query, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(items))
}

#[get("/portfolio/{id}")]
pub async fn get_portfolio_item(
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: PortfolioItemId = path_id(id)?;
    let item = get_portfolio_item_service(id, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(item))
}

#[post("/portfolio")]
pub async fn create_portfolio_item(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddPortfolioItemForm>,
) -> ApiResult {
    let payload: NewPortfolioItem = form.try_into()?;
    let item = create_portfolio_item_service(payload, &user, repo.get_ref())?;
    Ok(HttpResponse::Created().json(item))
}

#[put("/portfolio/{id}")]
pub async fn update_portfolio_item(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdatePortfolioItemForm>,
) -> ApiResult {
    let id: PortfolioItemId = path_id(id)?;
    let patch: PortfolioItemPatch = form.try_into()?;
    let item = update_portfolio_item_service(id, patch, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(item))
}

#[delete("/portfolio/{id}")]
pub async fn delete_portfolio_item(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: PortfolioItemId = path_id(id)?;
    delete_portfolio_item_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
