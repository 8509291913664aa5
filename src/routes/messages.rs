use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::message::NewMessage;
use crate::domain::types::MessageId;
use crate::forms::messages::AddMessageForm;
use crate::repository::MemoryRepository;
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id};
use crate::services::messages::{
    delete_message as delete_message_service, get_message as get_message_service,
    list_messages as list_messages_service, submit_message as submit_message_service,
};

#[post("/messages")]
pub async fn submit_message(
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddMessageForm>,
) -> ApiResult {
    let payload: NewMessage = form.try_into()?;
    let message = submit_message_service(payload, repo.get_ref())?;
    Ok(HttpResponse::Created().json(message))
}

#[get("/messages")]
pub async fn list_messages(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let messages = list_messages_service(&user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(messages))
}

#[get("/messages/{id}")]
pub async fn get_message(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: MessageId = path_id(id)?;
    let message = get_message_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(message))
}

#[delete("/messages/{id}")]
pub async fn delete_message(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: MessageId = path_id(id)?;
    delete_message_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
