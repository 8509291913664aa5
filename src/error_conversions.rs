//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the `From` impls that bridge them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::FormError;
    use crate::repository::errors::RepositoryError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<FormError> for ServiceError {
        fn from(val: FormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<RepositoryError> for ServiceError {
        fn from(val: RepositoryError) -> Self {
            match val {
                RepositoryError::Conflict(_) => ServiceError::Conflict(val.to_string()),
                RepositoryError::MissingReference { .. } | RepositoryError::ValidationError(_) => {
                    ServiceError::Form(val.to_string())
                }
                RepositoryError::Integrity(_) | RepositoryError::LockPoisoned => {
                    log::error!("Repository failure: {val}");
                    ServiceError::Internal
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_constraint_becomes_validation_error() {
        let err: RepositoryError = TypeConstraintError::NegativeNumber("spots").into();
        assert_eq!(
            err,
            RepositoryError::ValidationError("spots must be zero or greater".to_string())
        );
    }

    #[cfg(feature = "server")]
    #[test]
    fn repository_errors_map_to_service_errors() {
        use crate::services::ServiceError;

        let conflict: ServiceError = RepositoryError::Conflict("service slug 'seo'".into()).into();
        assert_eq!(
            conflict,
            ServiceError::Conflict("service slug 'seo' already exists".into())
        );

        let missing: ServiceError = RepositoryError::MissingReference {
            entity: "category",
            id: 9,
        }
        .into();
        assert_eq!(missing, ServiceError::Form("category 9 does not exist".into()));

        let integrity: ServiceError = RepositoryError::Integrity("dangling".into()).into();
        assert_eq!(integrity, ServiceError::Internal);
    }
}
