use crate::domain::auth::AuthenticatedUser;
use crate::domain::class::{ClassPatch, ClassWithDetails, NewClass};
use crate::domain::types::{ClassId, SpotCount};
use crate::repository::{ClassListQuery, ClassReader, ClassWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

pub fn list_classes<R>(query: ClassListQuery, repo: &R) -> ServiceResult<Vec<ClassWithDetails>>
where
    R: ClassReader,
{
    Ok(repo.list_classes(query)?)
}

pub fn get_class<R>(id: ClassId, repo: &R) -> ServiceResult<ClassWithDetails>
where
    R: ClassReader,
{
    repo.get_class_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Re-read a class that was just written so the response carries its
/// category and location.
fn reload<R>(id: ClassId, repo: &R) -> ServiceResult<ClassWithDetails>
where
    R: ClassReader,
{
    match repo.get_class_by_id(id)? {
        Some(class) => Ok(class),
        None => {
            log::error!("Class {id} vanished right after being written");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_class<R>(
    payload: NewClass,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<ClassWithDetails>
where
    R: ClassReader + ClassWriter,
{
    ensure_admin(user)?;
    let class = repo.create_class(&payload)?;
    log::info!("Class {} created by {}", class.id, user.username);
    reload(class.id, repo)
}

pub fn update_class<R>(
    id: ClassId,
    patch: ClassPatch,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<ClassWithDetails>
where
    R: ClassReader + ClassWriter,
{
    ensure_admin(user)?;
    let class = repo.update_class(id, patch)?.ok_or(ServiceError::NotFound)?;
    reload(class.id, repo)
}

pub fn update_class_availability<R>(
    id: ClassId,
    available_spots: SpotCount,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<ClassWithDetails>
where
    R: ClassReader + ClassWriter,
{
    ensure_admin(user)?;
    let class = repo
        .update_class_availability(id, available_spots)?
        .ok_or(ServiceError::NotFound)?;
    log::info!(
        "Class {} availability set to {} by {}",
        class.id,
        class.available_spots,
        user.username
    );
    reload(class.id, repo)
}

pub fn delete_class<R>(id: ClassId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<()>
where
    R: ClassWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_class(id)?)?;
    log::info!("Class {id} deleted by {}", user.username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::NewCategory;
    use crate::domain::location::NewLocation;
    use crate::domain::types::{CategoryName, ClassTitle, LocationName, PriceCents};
    use crate::repository::{CategoryWriter, LocationWriter, MemoryRepository};
    use crate::services::test_support::{admin, visitor};

    fn seeded_repo() -> (MemoryRepository, NewClass) {
        let repo = MemoryRepository::new();
        let category = repo
            .create_category(&NewCategory {
                name: CategoryName::new("Art & Crafts").unwrap(),
                color: "orange".into(),
                text_color: "text-orange-800".into(),
                bg_color: "bg-orange-100".into(),
            })
            .unwrap();
        let location = repo
            .create_location(&NewLocation {
                name: LocationName::new("Downtown Studio").unwrap(),
                address: None,
            })
            .unwrap();
        let class = NewClass {
            title: ClassTitle::new("Pottery Basics").unwrap(),
            description: "Wheel throwing".into(),
            price: PriceCents::new(4500).unwrap(),
            price_unit: "per session".into(),
            total_spots: SpotCount::new(10).unwrap(),
            available_spots: SpotCount::new(4).unwrap(),
            image_url: String::new(),
            date: "Mon".into(),
            time: "6 PM".into(),
            category_id: category.id,
            location_id: location.id,
        };
        (repo, class)
    }

    #[test]
    fn create_returns_enriched_class() {
        let (repo, class) = seeded_repo();
        let created = create_class(class, &admin(), &repo).unwrap();
        assert_eq!(created.category.name, "Art & Crafts");
        assert_eq!(created.location.name, "Downtown Studio");
    }

    #[test]
    fn availability_requires_admin_and_bounds() {
        let (repo, class) = seeded_repo();
        let created = create_class(class, &admin(), &repo).unwrap();
        let id = created.class.id;

        assert_eq!(
            update_class_availability(id, SpotCount::new(2).unwrap(), &visitor(), &repo),
            Err(ServiceError::Forbidden)
        );
        assert!(matches!(
            update_class_availability(id, SpotCount::new(11).unwrap(), &admin(), &repo),
            Err(ServiceError::Form(_))
        ));

        let updated =
            update_class_availability(id, SpotCount::new(0).unwrap(), &admin(), &repo).unwrap();
        assert_eq!(updated.class.available_spots, 0);
        assert_eq!(updated.class.total_spots, 10);
    }

    #[test]
    fn missing_class_is_not_found() {
        let (repo, _) = seeded_repo();
        let id = ClassId::new(99).unwrap();
        assert_eq!(get_class(id, &repo), Err(ServiceError::NotFound));
        assert_eq!(
            update_class(id, ClassPatch::default(), &admin(), &repo),
            Err(ServiceError::NotFound)
        );
    }
}
