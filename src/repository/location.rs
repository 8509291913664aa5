use crate::domain::location::{Location, LocationPatch, NewLocation};
use crate::domain::types::LocationId;
use crate::repository::{LocationReader, LocationWriter, MemoryRepository, RepositoryResult};

impl LocationReader for MemoryRepository {
    fn list_locations(&self) -> RepositoryResult<Vec<Location>> {
        let store = self.read()?;
        Ok(store.locations.values().cloned().collect())
    }

    fn get_location_by_id(&self, id: LocationId) -> RepositoryResult<Option<Location>> {
        let store = self.read()?;
        Ok(store.locations.get(id.get()).cloned())
    }
}

impl LocationWriter for MemoryRepository {
    fn create_location(&self, location: &NewLocation) -> RepositoryResult<Location> {
        let mut store = self.write()?;
        store
            .locations
            .insert_with(|id| Ok(location.clone().into_location(LocationId::new(id)?)))
    }

    fn update_location(
        &self,
        id: LocationId,
        patch: LocationPatch,
    ) -> RepositoryResult<Option<Location>> {
        let mut store = self.write()?;
        let Some(location) = store.locations.get_mut(id.get()) else {
            return Ok(None);
        };
        patch.apply_to(location);
        Ok(Some(location.clone()))
    }

    fn delete_location(&self, id: LocationId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.locations.remove(id.get()))
    }
}
