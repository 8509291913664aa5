//! Account registration, credential checks and session user lookup.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::{UserId, Username};
use crate::domain::user::NewUser;
use crate::forms::FormError;
use crate::forms::auth::{LoginForm, RegisterFormPayload};
use crate::repository::{RepositoryError, UserReader, UserWriter};

use super::{ServiceError, ServiceResult};

/// Hash a plain-text password into an argon2 PHC string.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            log::error!("Failed to hash password: {e}");
            ServiceError::Internal
        })
}

/// Check a plain-text password against a stored PHC string.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(hash) => Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok(),
        Err(e) => {
            log::error!("Stored password hash is malformed: {e}");
            false
        }
    }
}

/// Create a regular (non-admin) account.
pub fn register<R>(payload: RegisterFormPayload, repo: &R) -> ServiceResult<AuthenticatedUser>
where
    R: UserWriter,
{
    let new_user = NewUser {
        username: payload.username,
        password_hash: hash_password(&payload.password)?,
        is_admin: false,
    };

    match repo.create_user(&new_user) {
        Ok(user) => {
            log::info!("Registered user {}", user.username);
            Ok(user.into())
        }
        Err(RepositoryError::Conflict(_)) => Err(ServiceError::Conflict(
            "Username already exists".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Verify credentials. Unknown users and wrong passwords look the same.
pub fn login<R>(form: LoginForm, repo: &R) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader,
{
    form.validate().map_err(FormError::from)?;

    let user = match repo.get_user_by_username(form.username.trim())? {
        Some(user) => user,
        None => {
            log::info!("Login attempt for unknown user {}", form.username.trim());
            return Err(ServiceError::Unauthenticated);
        }
    };

    if !verify_password(&form.password, &user.password_hash) {
        log::info!("Wrong password for user {}", user.username);
        return Err(ServiceError::Unauthenticated);
    }

    Ok(user.into())
}

/// Load the user behind a session. A session pointing at a user that no
/// longer exists is treated as signed out.
pub fn current_user<R>(id: UserId, repo: &R) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader,
{
    repo.get_user_by_id(id)?
        .map(AuthenticatedUser::from)
        .ok_or(ServiceError::Unauthenticated)
}

/// Make sure an administrator account with the given username exists.
/// An existing account is left untouched.
pub fn ensure_admin_account<R>(
    username: Username,
    password: &str,
    repo: &R,
) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + UserWriter,
{
    if let Some(existing) = repo.get_user_by_username(username.as_str())? {
        return Ok(existing.into());
    }

    let user = repo.create_user(&NewUser {
        username,
        password_hash: hash_password(password)?,
        is_admin: true,
    })?;
    log::info!("Created admin account {}", user.username);
    Ok(user.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    fn payload(username: &str, password: &str) -> RegisterFormPayload {
        RegisterFormPayload {
            username: Username::new(username).unwrap(),
            password: password.to_string(),
        }
    }

    fn login_form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("secret1").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("secret1", &hash));
        assert!(!verify_password("secret2", &hash));
        assert!(!verify_password("secret1", "not-a-hash"));
    }

    #[test]
    fn register_then_login() {
        let repo = MemoryRepository::new();
        let user = register(payload("alice", "secret1"), &repo).unwrap();
        assert!(!user.is_admin);

        let logged_in = login(login_form("alice", "secret1"), &repo).unwrap();
        assert_eq!(logged_in, user);

        assert_eq!(
            login(login_form("alice", "wrong-password"), &repo),
            Err(ServiceError::Unauthenticated)
        );
        assert_eq!(
            login(login_form("nobody", "secret1"), &repo),
            Err(ServiceError::Unauthenticated)
        );
    }

    #[test]
    fn duplicate_registration_conflicts() {
        let repo = MemoryRepository::new();
        register(payload("alice", "secret1"), &repo).unwrap();
        assert!(matches!(
            register(payload("alice", "other-secret"), &repo),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn admin_account_is_created_once() {
        let repo = MemoryRepository::new();
        let first =
            ensure_admin_account(Username::new("admin").unwrap(), "admin123", &repo).unwrap();
        assert!(first.is_admin);
        let second =
            ensure_admin_account(Username::new("admin").unwrap(), "changed", &repo).unwrap();
        assert_eq!(first.id, second.id);
        assert!(login(login_form("admin", "admin123"), &repo).is_ok());
    }

    #[test]
    fn current_user_for_unknown_id_is_unauthenticated() {
        let repo = MemoryRepository::new();
        assert_eq!(
            current_user(UserId::new(5).unwrap(), &repo),
            Err(ServiceError::Unauthenticated)
        );
    }
}
