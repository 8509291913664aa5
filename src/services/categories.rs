use crate::domain::auth::AuthenticatedUser;
use crate::domain::category::{Category, CategoryPatch, NewCategory};
use crate::domain::types::CategoryId;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    Ok(repo.list_categories()?)
}

pub fn get_category<R>(id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    repo.get_category_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_category<R>(
    payload: NewCategory,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    ensure_admin(user)?;
    let category = repo.create_category(&payload)?;
    log::info!("Category {} created by {}", category.id, user.username);
    Ok(category)
}

pub fn update_category<R>(
    id: CategoryId,
    patch: CategoryPatch,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    ensure_admin(user)?;
    repo.update_category(id, patch)?.ok_or(ServiceError::NotFound)
}

pub fn delete_category<R>(id: CategoryId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_category(id)?)?;
    log::info!("Category {id} deleted by {}", user.username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CategoryName;
    use crate::repository::MemoryRepository;
    use crate::services::test_support::{admin, visitor};

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            name: CategoryName::new(name).unwrap(),
            color: "blue".into(),
            text_color: "text-blue-800".into(),
            bg_color: "bg-blue-100".into(),
        }
    }

    #[test]
    fn non_admin_cannot_create() {
        let repo = MemoryRepository::new();
        let result = create_category(new_category("Music"), &visitor(), &repo);
        assert_eq!(result, Err(ServiceError::Forbidden));
        assert!(list_categories(&repo).unwrap().is_empty());
    }

    #[test]
    fn admin_crud_round() {
        let repo = MemoryRepository::new();
        let created = create_category(new_category("Music"), &admin(), &repo).unwrap();

        let updated = update_category(
            created.id,
            CategoryPatch {
                color: Some("purple".into()),
                ..Default::default()
            },
            &admin(),
            &repo,
        )
        .unwrap();
        assert_eq!(updated.name, "Music");
        assert_eq!(updated.color, "purple");

        delete_category(created.id, &admin(), &repo).unwrap();
        assert_eq!(get_category(created.id, &repo), Err(ServiceError::NotFound));
        assert_eq!(
            delete_category(created.id, &admin(), &repo),
            Err(ServiceError::NotFound)
        );
    }
}
