use crate::domain::class::{Class, ClassPatch, ClassWithDetails, NewClass, ensure_spots_within_capacity};
use crate::domain::types::{CategoryId, ClassId, LocationId, SpotCount};
use crate::repository::enrich::class_with_details;
use crate::repository::store::Store;
use crate::repository::{
    ClassListQuery, ClassReader, ClassWriter, MemoryRepository, RepositoryError,
    RepositoryResult, contains_ignore_case,
};

fn ensure_references_exist(
    store: &Store,
    category_id: CategoryId,
    location_id: LocationId,
) -> RepositoryResult<()> {
    if !store.categories.contains(category_id.get()) {
        return Err(RepositoryError::MissingReference {
            entity: "category",
            id: category_id.get(),
        });
    }
    if !store.locations.contains(location_id.get()) {
        return Err(RepositoryError::MissingReference {
            entity: "location",
            id: location_id.get(),
        });
    }
    Ok(())
}

fn normalized_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

impl ClassReader for MemoryRepository {
    fn list_classes(&self, query: ClassListQuery) -> RepositoryResult<Vec<ClassWithDetails>> {
        let store = self.read()?;
        let search = normalized_search(query.search.as_deref());

        store
            .classes
            .values()
            .filter(|c| query.category_id.is_none_or(|id| c.category_id == id))
            .filter(|c| query.location_id.is_none_or(|id| c.location_id == id))
            .filter(|c| {
                search.as_deref().is_none_or(|s| {
                    contains_ignore_case(c.title.as_str(), s)
                        || contains_ignore_case(&c.description, s)
                })
            })
            .map(|c| class_with_details(&store, c))
            .collect()
    }

    fn get_class_by_id(&self, id: ClassId) -> RepositoryResult<Option<ClassWithDetails>> {
        let store = self.read()?;
        store
            .classes
            .get(id.get())
            .map(|c| class_with_details(&store, c))
            .transpose()
    }
}

impl ClassWriter for MemoryRepository {
    fn create_class(&self, class: &NewClass) -> RepositoryResult<Class> {
        let mut store = self.write()?;
        ensure_references_exist(&store, class.category_id, class.location_id)?;
        ensure_spots_within_capacity(class.total_spots, class.available_spots)?;
        store
            .classes
            .insert_with(|id| Ok(class.clone().into_class(ClassId::new(id)?)))
    }

    fn update_class(&self, id: ClassId, patch: ClassPatch) -> RepositoryResult<Option<Class>> {
        let mut store = self.write()?;
        let Some(current) = store.classes.get(id.get()) else {
            return Ok(None);
        };

        // Validate the merged row before storing it so a rejected patch
        // leaves the class untouched.
        let mut updated = current.clone();
        patch.apply_to(&mut updated);
        ensure_references_exist(&store, updated.category_id, updated.location_id)?;
        ensure_spots_within_capacity(updated.total_spots, updated.available_spots)?;

        if let Some(slot) = store.classes.get_mut(id.get()) {
            *slot = updated.clone();
        }
        Ok(Some(updated))
    }

    fn update_class_availability(
        &self,
        id: ClassId,
        available_spots: SpotCount,
    ) -> RepositoryResult<Option<Class>> {
        let mut store = self.write()?;
        let Some(class) = store.classes.get_mut(id.get()) else {
            return Ok(None);
        };
        ensure_spots_within_capacity(class.total_spots, available_spots)?;
        class.available_spots = available_spots;
        Ok(Some(class.clone()))
    }

    fn delete_class(&self, id: ClassId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.classes.remove(id.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::NewCategory;
    use crate::domain::location::NewLocation;
    use crate::domain::types::{CategoryName, ClassTitle, LocationName, PriceCents};
    use crate::repository::{CategoryWriter, LocationWriter};

    fn seeded_repo() -> MemoryRepository {
        let repo = MemoryRepository::new();
        repo.create_category(&NewCategory {
            name: CategoryName::new("Art & Crafts").unwrap(),
            color: "#3B82F6".into(),
            text_color: "#1E40AF".into(),
            bg_color: "#DBEAFE".into(),
        })
        .unwrap();
        repo.create_location(&NewLocation {
            name: LocationName::new("Downtown Studio").unwrap(),
            address: Some("123 Main St, Downtown".into()),
        })
        .unwrap();
        repo
    }

    fn new_class(title: &str, total: i32, available: i32) -> NewClass {
        NewClass {
            title: ClassTitle::new(title).unwrap(),
            description: "Hands-on session.".into(),
            price: PriceCents::new(6500).unwrap(),
            price_unit: "per person".into(),
            total_spots: SpotCount::new(total).unwrap(),
            available_spots: SpotCount::new(available).unwrap(),
            image_url: String::new(),
            date: "Wed, June 15".into(),
            time: "6:00 PM - 8:00 PM".into(),
            category_id: CategoryId::new(1).unwrap(),
            location_id: LocationId::new(1).unwrap(),
        }
    }

    #[test]
    fn get_class_attaches_category_and_location() {
        let repo = seeded_repo();
        let class = repo
            .create_class(&new_class("Pottery Workshop for Beginners", 12, 8))
            .unwrap();

        let details = repo.get_class_by_id(class.id).unwrap().unwrap();
        assert_eq!(details.category.name, "Art & Crafts");
        assert_eq!(details.location.name, "Downtown Studio");
        assert_eq!(details.class.total_spots, 12);
        assert_eq!(details.class.available_spots, 8);
    }

    #[test]
    fn create_rejects_unknown_category() {
        let repo = seeded_repo();
        let mut class = new_class("Orphan", 5, 5);
        class.category_id = CategoryId::new(42).unwrap();

        let err = repo.create_class(&class).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::MissingReference {
                entity: "category",
                id: 42
            }
        );
        assert!(repo.list_classes(ClassListQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn rejected_update_leaves_row_unchanged() {
        let repo = seeded_repo();
        let class = repo.create_class(&new_class("Sketching", 10, 4)).unwrap();

        let patch = ClassPatch {
            available_spots: Some(SpotCount::new(11).unwrap()),
            title: Some(ClassTitle::new("Renamed").unwrap()),
            ..Default::default()
        };
        assert!(matches!(
            repo.update_class(class.id, patch),
            Err(RepositoryError::ValidationError(_))
        ));

        let stored = repo.get_class_by_id(class.id).unwrap().unwrap();
        assert_eq!(stored.class, class);
    }

    #[test]
    fn availability_update_is_bounded_by_total_spots() {
        let repo = seeded_repo();
        let class = repo.create_class(&new_class("Yoga", 20, 12)).unwrap();

        let updated = repo
            .update_class_availability(class.id, SpotCount::new(5).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(updated.available_spots, 5);
        assert_eq!(updated.total_spots, 20);

        assert!(
            repo.update_class_availability(class.id, SpotCount::new(21).unwrap())
                .is_err()
        );
        assert!(
            repo.update_class_availability(ClassId::new(99).unwrap(), SpotCount::new(1).unwrap())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn blank_search_lists_everything() {
        let repo = seeded_repo();
        repo.create_class(&new_class("Pottery", 5, 5)).unwrap();
        repo.create_class(&new_class("Cooking", 5, 5)).unwrap();

        let all = repo
            .list_classes(ClassListQuery::default().search("   "))
            .unwrap();
        assert_eq!(all.len(), 2);
    }
}
