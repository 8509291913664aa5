use crate::domain::auth::AuthenticatedUser;
use crate::domain::location::{Location, LocationPatch, NewLocation};
use crate::domain::types::LocationId;
use crate::repository::{LocationReader, LocationWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

pub fn list_locations<R>(repo: &R) -> ServiceResult<Vec<Location>>
where
    R: LocationReader,
{
    Ok(repo.list_locations()?)
}

pub fn get_location<R>(id: LocationId, repo: &R) -> ServiceResult<Location>
where
    R: LocationReader,
{
    repo.get_location_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_location<R>(
    payload: NewLocation,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Location>
where
    R: LocationWriter,
{
    ensure_admin(user)?;
    let location = repo.create_location(&payload)?;
    log::info!("Location {} created by {}", location.id, user.username);
    Ok(location)
}

pub fn update_location<R>(
    id: LocationId,
    patch: LocationPatch,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Location>
where
    R: LocationWriter,
{
    ensure_admin(user)?;
    repo.update_location(id, patch)?.ok_or(ServiceError::NotFound)
}

pub fn delete_location<R>(id: LocationId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<()>
where
    R: LocationWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_location(id)?)?;
    log::info!("Location {id} deleted by {}", user.username);
    Ok(())
}
