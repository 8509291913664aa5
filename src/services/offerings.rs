//! The agency's service catalogue.

use crate::domain::auth::AuthenticatedUser;
use crate::domain::service::{NewService, Service, ServicePatch};
use crate::domain::types::ServiceId;
use crate::repository::{ServiceReader, ServiceWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

pub fn list_services<R>(repo: &R) -> ServiceResult<Vec<Service>>
where
    R: ServiceReader,
{
    Ok(repo.list_services()?)
}

pub fn get_service<R>(id: ServiceId, repo: &R) -> ServiceResult<Service>
where
    R: ServiceReader,
{
    repo.get_service_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn get_service_by_slug<R>(slug: &str, repo: &R) -> ServiceResult<Service>
where
    R: ServiceReader,
{
    repo.get_service_by_slug(slug)?.ok_or(ServiceError::NotFound)
}

pub fn create_service<R>(
    payload: NewService,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Service>
where
    R: ServiceWriter,
{
    ensure_admin(user)?;
    let service = repo.create_service(&payload)?;
    log::info!("Service '{}' created by {}", service.slug, user.username);
    Ok(service)
}

pub fn update_service<R>(
    id: ServiceId,
    patch: ServicePatch,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Service>
where
    R: ServiceWriter,
{
    ensure_admin(user)?;
    repo.update_service(id, patch)?.ok_or(ServiceError::NotFound)
}

pub fn delete_service<R>(id: ServiceId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<()>
where
    R: ServiceWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_service(id)?)?;
    log::info!("Service {id} deleted by {}", user.username);
    Ok(())
}
