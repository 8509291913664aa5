use crate::domain::auth::AuthenticatedUser;
use crate::domain::team::{NewTeamMember, TeamMember, TeamMemberPatch};
use crate::domain::types::TeamMemberId;
use crate::repository::{TeamMemberReader, TeamMemberWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

pub fn list_team_members<R>(repo: &R) -> ServiceResult<Vec<TeamMember>>
where
    R: TeamMemberReader,
{
    Ok(repo.list_team_members()?)
}

pub fn get_team_member<R>(id: TeamMemberId, repo: &R) -> ServiceResult<TeamMember>
where
    R: TeamMemberReader,
{
    repo.get_team_member_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_team_member<R>(
    payload: NewTeamMember,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<TeamMember>
where
    R: TeamMemberWriter,
{
    ensure_admin(user)?;
    Ok(repo.create_team_member(&payload)?)
}

pub fn update_team_member<R>(
    id: TeamMemberId,
    patch: TeamMemberPatch,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<TeamMember>
where
    R: TeamMemberWriter,
{
    ensure_admin(user)?;
    repo.update_team_member(id, patch)?
        .ok_or(ServiceError::NotFound)
}

pub fn delete_team_member<R>(
    id: TeamMemberId,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<()>
where
    R: TeamMemberWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_team_member(id)?)
}
