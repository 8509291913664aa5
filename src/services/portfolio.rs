use crate::domain::auth::AuthenticatedUser;
use crate::domain::portfolio::{NewPortfolioItem, PortfolioItemPatch, PortfolioItemWithService};
use crate::domain::types::PortfolioItemId;
use crate::repository::{PortfolioListQuery, PortfolioReader, PortfolioWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

pub fn list_portfolio_items<R>(
    query: PortfolioListQuery,
    repo: &R,
) -> ServiceResult<Vec<PortfolioItemWithService>>
where
    R: PortfolioReader,
{
    Ok(repo.list_portfolio_items(query)?)
}

pub fn get_portfolio_item<R>(id: PortfolioItemId, repo: &R) -> ServiceResult<PortfolioItemWithService>
where
    R: PortfolioReader,
{
    repo.get_portfolio_item_by_id(id)?
        .ok_or(ServiceError::NotFound)
}

fn reload<R>(id: PortfolioItemId, repo: &R) -> ServiceResult<PortfolioItemWithService>
where
    R: PortfolioReader,
{
    match repo.get_portfolio_item_by_id(id)? {
        Some(item) => Ok(item),
        None => {
            log::error!("Portfolio item {id} vanished right after being written");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_portfolio_item<R>(
    payload: NewPortfolioItem,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<PortfolioItemWithService>
where
    R: PortfolioReader + PortfolioWriter,
{
    ensure_admin(user)?;
    let item = repo.create_portfolio_item(&payload)?;
    log::info!("Portfolio item {} created by {}", item.id, user.username);
    reload(item.id, repo)
}

pub fn update_portfolio_item<R>(
    id: PortfolioItemId,
    patch: PortfolioItemPatch,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<PortfolioItemWithService>
where
    R: PortfolioReader + PortfolioWriter,
{
    ensure_admin(user)?;
    let item = repo
        .update_portfolio_item(id, patch)?
        .ok_or(ServiceError::NotFound)?;
    reload(item.id, repo)
}

pub fn delete_portfolio_item<R>(
    id: PortfolioItemId,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<()>
where
    R: PortfolioWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_portfolio_item(id)?)?;
    log::info!("Portfolio item {id} deleted by {}", user.username);
    Ok(())
}
