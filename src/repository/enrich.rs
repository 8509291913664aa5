//! Attaches related rows to leaf entities that only store foreign keys.
//!
//! A missing referent is an integrity failure, never a partial view.

use crate::domain::class::{Class, ClassWithDetails};
use crate::domain::portfolio::{PortfolioItem, PortfolioItemWithService};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::store::Store;

pub(crate) fn class_with_details(store: &Store, class: &Class) -> RepositoryResult<ClassWithDetails> {
    let category = store.categories.get(class.category_id.get()).ok_or_else(|| {
        RepositoryError::Integrity(format!(
            "missing category {} for class {}",
            class.category_id, class.id
        ))
    })?;
    let location = store.locations.get(class.location_id.get()).ok_or_else(|| {
        RepositoryError::Integrity(format!(
            "missing location {} for class {}",
            class.location_id, class.id
        ))
    })?;

    Ok(ClassWithDetails {
        class: class.clone(),
        category: category.clone(),
        location: location.clone(),
    })
}

pub(crate) fn portfolio_item_with_service(
    store: &Store,
    item: &PortfolioItem,
) -> RepositoryResult<PortfolioItemWithService> {
    let service = store.services.get(item.service_id.get()).ok_or_else(|| {
        RepositoryError::Integrity(format!(
            "missing service {} for portfolio item {}",
            item.service_id, item.id
        ))
    })?;

    Ok(PortfolioItemWithService {
        item: item.clone(),
        service: service.clone(),
    })
}
