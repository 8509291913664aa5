use crate::domain::category::{Category, CategoryPatch, NewCategory};
use crate::domain::types::CategoryId;
use crate::repository::{CategoryReader, CategoryWriter, MemoryRepository, RepositoryResult};

impl CategoryReader for MemoryRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let store = self.read()?;
        Ok(store.categories.values().cloned().collect())
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let store = self.read()?;
        Ok(store.categories.get(id.get()).cloned())
    }
}

impl CategoryWriter for MemoryRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        let mut store = self.write()?;
        store
            .categories
            .insert_with(|id| Ok(category.clone().into_category(CategoryId::new(id)?)))
    }

    fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> RepositoryResult<Option<Category>> {
        let mut store = self.write()?;
        let Some(category) = store.categories.get_mut(id.get()) else {
            return Ok(None);
        };
        patch.apply_to(category);
        Ok(Some(category.clone()))
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.categories.remove(id.get()))
    }
}
