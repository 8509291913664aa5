//! Business logic shared by the HTTP routes.
//!
//! Service functions are generic over the repository traits so they can be
//! exercised directly against any store. Admin-only operations take the
//! authenticated user and check the role before touching the repository.

use crate::domain::auth::AuthenticatedUser;

mod errors;

pub mod auth;
pub mod blog;
pub mod categories;
pub mod classes;
pub mod locations;
pub mod messages;
pub mod offerings;
pub mod portfolio;
pub mod team;
pub mod testimonials;

pub use errors::{ServiceError, ServiceResult};

/// Reject callers that are not administrators.
pub fn ensure_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.is_admin {
        Ok(())
    } else {
        log::warn!("User {} attempted an admin operation", user.username);
        Err(ServiceError::Forbidden)
    }
}

/// Turn a delete flag into the service result.
fn deleted_or_not_found(deleted: bool) -> ServiceResult<()> {
    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::auth::AuthenticatedUser;
    use crate::domain::types::{UserId, Username};

    pub fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId::new(1).unwrap(),
            username: Username::new("admin").unwrap(),
            is_admin: true,
        }
    }

    pub fn visitor() -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId::new(2).unwrap(),
            username: Username::new("visitor").unwrap(),
            is_admin: false,
        }
    }
}
