use crate::domain::types::UserId;
use crate::domain::user::{NewUser, User};
use crate::repository::{MemoryRepository, RepositoryError, RepositoryResult, UserReader, UserWriter};

impl UserReader for MemoryRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let store = self.read()?;
        Ok(store.users.get(id.get()).cloned())
    }

    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let store = self.read()?;
        Ok(store.users.find(|u| u.username == username).cloned())
    }
}

impl UserWriter for MemoryRepository {
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User> {
        let mut store = self.write()?;
        if store.users.find(|u| u.username == user.username).is_some() {
            return Err(RepositoryError::Conflict(format!(
                "username '{}'",
                user.username
            )));
        }
        store
            .users
            .insert_with(|id| Ok(user.clone().into_user(UserId::new(id)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Username;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: Username::new(username).unwrap(),
            password_hash: "$argon2id$stub".into(),
            is_admin: false,
        }
    }

    #[test]
    fn username_lookup_and_uniqueness() {
        let repo = MemoryRepository::new();
        let alice = repo.create_user(&new_user("alice")).unwrap();
        assert!(!alice.is_admin);

        assert_eq!(repo.get_user_by_username("alice").unwrap(), Some(alice));
        assert!(repo.get_user_by_username("bob").unwrap().is_none());
        assert!(matches!(
            repo.create_user(&new_user("alice")),
            Err(RepositoryError::Conflict(_))
        ));
    }
}
