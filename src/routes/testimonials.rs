use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::testimonial::{NewTestimonial, TestimonialPatch};
use crate::domain::types::TestimonialId;
use crate::forms::testimonials::{AddTestimonialForm, UpdateTestimonialForm};
use crate::repository::MemoryRepository;
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id};
use crate::services::testimonials::{
    create_testimonial as create_testimonial_service, delete_testimonial as delete_testimonial_service,
    get_testimonial as get_testimonial_service, list_testimonials as list_testimonials_service,
    update_testimonial as update_testimonial_service,
};

#[get("/testimonials")]
pub async fn list_testimonials(repo: web::Data<MemoryRepository>) -> ApiResult {
    let testimonials = list_testimonials_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(testimonials))
}

#[get("/testimonials/{id}")]
pub async fn get_testimonial(id: web::Path<i32>, repo: web::Data<MemoryRepository>) -> ApiResult {
    let id: TestimonialId = path_id(id)?;
    let testimonial = get_testimonial_service(id, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(testimonial))
}

#[post("/testimonials")]
pub async fn create_testimonial(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddTestimonialForm>,
) -> ApiResult {
    let payload: NewTestimonial = form.try_into()?;
    let testimonial = create_testimonial_service(payload, &user, repo.get_ref())?;
    Ok(HttpResponse::Created().json(testimonial))
}

#[put("/testimonials/{id}")]
pub async fn update_testimonial(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdateTestimonialForm>,
) -> ApiResult {
    let id: TestimonialId = path_id(id)?;
    let patch: TestimonialPatch = form.try_into()?;
    let testimonial = update_testimonial_service(id, patch, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(testimonial))
}

#[delete("/testimonials/{id}")]
pub async fn delete_testimonial(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: TestimonialId = path_id(id)?;
    delete_testimonial_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
