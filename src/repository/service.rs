use crate::domain::service::{NewService, Service, ServicePatch};
use crate::domain::types::{ServiceId, ServiceSlug};
use crate::repository::store::Store;
use crate::repository::{
    MemoryRepository, RepositoryError, RepositoryResult, ServiceReader, ServiceWriter,
};

/// Fails when a service other than `except` already uses `slug`.
fn ensure_slug_available(
    store: &Store,
    slug: &ServiceSlug,
    except: Option<ServiceId>,
) -> RepositoryResult<()> {
    let taken = store
        .services
        .find(|s| s.slug == *slug && Some(s.id) != except)
        .is_some();
    if taken {
        return Err(RepositoryError::Conflict(format!("service slug '{slug}'")));
    }
    Ok(())
}

impl ServiceReader for MemoryRepository {
    fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        let store = self.read()?;
        Ok(store.services.values().cloned().collect())
    }

    fn get_service_by_id(&self, id: ServiceId) -> RepositoryResult<Option<Service>> {
        let store = self.read()?;
        Ok(store.services.get(id.get()).cloned())
    }

    fn get_service_by_slug(&self, slug: &str) -> RepositoryResult<Option<Service>> {
        let store = self.read()?;
        Ok(store.services.find(|s| s.slug == slug).cloned())
    }
}

impl ServiceWriter for MemoryRepository {
    fn create_service(&self, service: &NewService) -> RepositoryResult<Service> {
        let mut store = self.write()?;
        ensure_slug_available(&store, &service.slug, None)?;
        store
            .services
            .insert_with(|id| Ok(service.clone().into_service(ServiceId::new(id)?)))
    }

    fn update_service(
        &self,
        id: ServiceId,
        patch: ServicePatch,
    ) -> RepositoryResult<Option<Service>> {
        let mut store = self.write()?;
        if !store.services.contains(id.get()) {
            return Ok(None);
        }
        if let Some(slug) = &patch.slug {
            ensure_slug_available(&store, slug, Some(id))?;
        }
        let Some(service) = store.services.get_mut(id.get()) else {
            return Ok(None);
        };
        patch.apply_to(service);
        Ok(Some(service.clone()))
    }

    fn delete_service(&self, id: ServiceId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.services.remove(id.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ServiceName;

    fn new_service(name: &str, slug: &str) -> NewService {
        NewService {
            name: ServiceName::new(name).unwrap(),
            slug: ServiceSlug::new(slug).unwrap(),
            description: "Short description".into(),
            icon: "palette".into(),
            detailed_description: "Long description".into(),
        }
    }

    #[test]
    fn slug_lookup_finds_service() {
        let repo = MemoryRepository::new();
        repo.create_service(&new_service("Web Design", "web-design"))
            .unwrap();
        let seo = repo.create_service(&new_service("SEO", "seo")).unwrap();

        let found = repo.get_service_by_slug("seo").unwrap().unwrap();
        assert_eq!(found, seo);
        assert!(repo.get_service_by_slug("missing").unwrap().is_none());
    }

    #[test]
    fn duplicate_slug_is_rejected_on_create_and_update() {
        let repo = MemoryRepository::new();
        repo.create_service(&new_service("Web Design", "web-design"))
            .unwrap();
        let seo = repo.create_service(&new_service("SEO", "seo")).unwrap();

        assert!(matches!(
            repo.create_service(&new_service("Web Design 2", "web-design")),
            Err(RepositoryError::Conflict(_))
        ));

        let patch = ServicePatch {
            slug: Some(ServiceSlug::new("web-design").unwrap()),
            ..Default::default()
        };
        assert!(matches!(
            repo.update_service(seo.id, patch),
            Err(RepositoryError::Conflict(_))
        ));

        // Re-saving a service with its own slug is fine.
        let patch = ServicePatch {
            slug: Some(ServiceSlug::new("seo").unwrap()),
            ..Default::default()
        };
        assert!(repo.update_service(seo.id, patch).unwrap().is_some());
    }
}
