use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::team::{NewTeamMember, TeamMemberPatch};
use crate::domain::types::TeamMemberId;
use crate::forms::team::{AddTeamMemberForm, UpdateTeamMemberForm};
use crate::repository::MemoryRepository;
use crate::routes::auth::AdminUser;
use crate::routes::{ApiResult, path_id};
use crate::services::team::{
    create_team_member as create_team_member_service, delete_team_member as delete_team_member_service,
    get_team_member as get_team_member_service, list_team_members as list_team_members_service,
    update_team_member as update_team_member_service,
};

#[get("/team")]
pub async fn list_team_members(repo: web::Data<MemoryRepository>) -> ApiResult {
    let members = list_team_members_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(members))
}

#[get("/team/{id}")]
pub async fn get_team_member(id: web::Path<i32>, repo: web::Data<MemoryRepository>) -> ApiResult {
    let id: TeamMemberId = path_id(id)?;
    let member = get_team_member_service(id, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(member))
}

#[post("/team")]
pub async fn create_team_member(
    AdminUser(user): AdminUser,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<AddTeamMemberForm>,
) -> ApiResult {
    let payload: NewTeamMember = form.try_into()?;
    let member = create_team_member_service(payload, &user, repo.get_ref())?;
    Ok(HttpResponse::Created().json(member))
}

#[put("/team/{id}")]
pub async fn update_team_member(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
    web::Json(form): web::Json<UpdateTeamMemberForm>,
) -> ApiResult {
    let id: TeamMemberId = path_id(id)?;
    let patch: TeamMemberPatch = form.try_into()?;
    let member = update_team_member_service(id, patch, &user, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(member))
}

#[delete("/team/{id}")]
pub async fn delete_team_member(
    AdminUser(user): AdminUser,
    id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> ApiResult {
    let id: TeamMemberId = path_id(id)?;
    delete_team_member_service(id, &user, repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}
