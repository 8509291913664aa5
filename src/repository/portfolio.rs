use crate::domain::portfolio::{
    NewPortfolioItem, PortfolioItem, PortfolioItemPatch, PortfolioItemWithService,
};
use crate::domain::types::{PortfolioItemId, ServiceId};
use crate::repository::enrich::portfolio_item_with_service;
use crate::repository::store::Store;
use crate::repository::{
    MemoryRepository, PortfolioListQuery, PortfolioReader, PortfolioWriter, RepositoryError,
    RepositoryResult,
};

fn ensure_service_exists(store: &Store, service_id: ServiceId) -> RepositoryResult<()> {
    if store.services.contains(service_id.get()) {
        Ok(())
    } else {
        Err(RepositoryError::MissingReference {
            entity: "service",
            id: service_id.get(),
        })
    }
}

impl PortfolioReader for MemoryRepository {
    fn list_portfolio_items(
        &self,
        query: PortfolioListQuery,
    ) -> RepositoryResult<Vec<PortfolioItemWithService>> {
        let store = self.read()?;
        store
            .portfolio_items
            .values()
            .filter(|item| query.service_id.is_none_or(|id| item.service_id == id))
            .map(|item| portfolio_item_with_service(&store, item))
            .collect()
    }

    fn get_portfolio_item_by_id(
        &self,
        id: PortfolioItemId,
    ) -> RepositoryResult<Option<PortfolioItemWithService>> {
        let store = self.read()?;
        store
            .portfolio_items
            .get(id.get())
            .map(|item| portfolio_item_with_service(&store, item))
            .transpose()
    }
}

impl PortfolioWriter for MemoryRepository {
    fn create_portfolio_item(&self, item: &NewPortfolioItem) -> RepositoryResult<PortfolioItem> {
        let mut store = self.write()?;
        ensure_service_exists(&store, item.service_id)?;
        store.portfolio_items.insert_with(|id| {
            Ok(item
                .clone()
                .into_portfolio_item(PortfolioItemId::new(id)?))
        })
    }

    fn update_portfolio_item(
        &self,
        id: PortfolioItemId,
        patch: PortfolioItemPatch,
    ) -> RepositoryResult<Option<PortfolioItem>> {
        let mut store = self.write()?;
        if !store.portfolio_items.contains(id.get()) {
            return Ok(None);
        }
        if let Some(service_id) = patch.service_id {
            ensure_service_exists(&store, service_id)?;
        }
        let Some(item) = store.portfolio_items.get_mut(id.get()) else {
            return Ok(None);
        };
        patch.apply_to(item);
        Ok(Some(item.clone()))
    }

    fn delete_portfolio_item(&self, id: PortfolioItemId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.portfolio_items.remove(id.get()))
    }
}
