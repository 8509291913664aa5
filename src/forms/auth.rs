use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::types::Username;
use crate::forms::FormError;

fn validate_confirmation(form: &RegisterForm) -> Result<(), ValidationError> {
    match &form.confirm_password {
        Some(confirm) if *confirm != form.password => {
            let mut error = ValidationError::new("password_mismatch");
            error.message = Some("passwords do not match".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_confirmation"))]
pub struct RegisterForm {
    #[validate(length(min = 3, max = 20))]
    pub username: String,
    #[validate(length(min = 6, max = 100))]
    pub password: String,
    /// Optional echo of `password`; checked when present.
    #[serde(default)]
    pub confirm_password: Option<String>,
}

/// Validated registration data. The password is still plain text here and is
/// hashed by the auth service.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterFormPayload {
    pub username: Username,
    pub password: String,
}

impl TryFrom<RegisterForm> for RegisterFormPayload {
    type Error = FormError;

    fn try_from(value: RegisterForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            username: Username::new(value.username)?,
            password: value.password,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str, confirm: Option<&str>) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.map(str::to_string),
        }
    }

    #[test]
    fn register_accepts_valid_credentials() {
        let payload: RegisterFormPayload = register("alice", "secret1", Some("secret1"))
            .try_into()
            .unwrap();
        assert_eq!(payload.username.as_str(), "alice");
    }

    #[test]
    fn register_rejects_short_password() {
        let result: Result<RegisterFormPayload, _> = register("alice", "123", None).try_into();
        assert!(matches!(result, Err(FormError::Validation(_))));
    }

    #[test]
    fn register_rejects_mismatched_confirmation() {
        let result: Result<RegisterFormPayload, _> =
            register("alice", "secret1", Some("secret2")).try_into();
        assert!(result.is_err());
    }
}
