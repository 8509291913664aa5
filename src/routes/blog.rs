use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::blog::{BlogPostPatch, NewBlogPost};
use crate::domain::types::BlogPostId;
use crate::forms::blog::{AddBlogPostForm, UpdateBlogPostForm};
use crate::repository::{BlogPostListQuery, MemoryRepository};
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id};
use crate::services::blog::{
    create_blog_post as create_blog_post_service, delete_blog_post as delete_blog_post_service,
    get_blog_post as get_blog_post_service,
    get_blog_post_by_slug as get_blog_post_by_slug_service,
    list_blog_posts as list_blog_posts_service, update_blog_post as update_blog_post_service,
};

#[derive(Debug, Deserialize)]
pub struct BlogQueryParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[get("/blog")]
pub async fn list_blog_posts(
    params: web::Query<BlogQueryParams>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let params = params.into_inner();
    let query = BlogPostListQuery {
        category: params.category,
        search: params.search,
    };
    let posts = list_blog_posts_service(query, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/blog/slug/{slug}")]
pub async fn get_blog_post_by_slug(
    slug: web::Path<String>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let post = get_blog_post_by_slug_service(&slug, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(post))
}

#[get("/blog/{id}")]
pub async fn get_blog_post(id: web::Path<i32>, repo: web::Data<MemoryRepository>) -> ApiResult {
    let id: BlogPostId = path_id(id)?;
    let post = get_blog_post_service(id, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("/blog")]
pub async fn create_blog_post(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddBlogPostForm>,
) -> ApiResult {
    let payload: NewBlogPost = form.try_into()?;
    let post = create_blog_post_service(payload, &user, repo.get_ref())?;
    Ok(HttpResponse::Created().json(post))
}

#[put("/blog/{id}")]
pub async fn update_blog_post(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdateBlogPostForm>,
) -> ApiResult {
    let id: BlogPostId = path_id(id)?;
    let patch: BlogPostPatch = form.try_into()?;
    let post = update_blog_post_service(id, patch, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(post))
}

#[delete("/blog/{id}")]
pub async fn delete_blog_post(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: BlogPostId = path_id(id)?;
    delete_blog_post_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
