use serde::Deserialize;
use validator::Validate;

use crate::domain::message::NewMessage;
use crate::domain::types::EmailAddress;
use crate::forms::FormError;

/// Contact form submitted by site visitors.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageForm {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl TryFrom<AddMessageForm> for NewMessage {
    type Error = FormError;

    fn try_from(value: AddMessageForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            first_name: value.first_name.trim().to_string(),
            last_name: value.last_name.trim().to_string(),
            email: EmailAddress::new(value.email)?,
            subject: value.subject,
            message: value.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_email() {
        let form = AddMessageForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane-at-example".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        };
        let result: Result<NewMessage, _> = form.try_into();
        let err = result.unwrap_err();
        assert!(err.field_errors().unwrap().field_errors().contains_key("email"));
    }
}
