use serde::Deserialize;
use validator::Validate;

use crate::domain::service::{NewService, ServicePatch};
use crate::domain::types::{ServiceName, ServiceSlug};
use crate::forms::{FormError, map_opt};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub icon: String,
    #[validate(length(min = 1))]
    pub detailed_description: String,
}

impl TryFrom<AddServiceForm> for NewService {
    type Error = FormError;

    fn try_from(value: AddServiceForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: ServiceName::new(value.name)?,
            slug: ServiceSlug::new(value.slug)?,
            description: value.description,
            icon: value.icon,
            detailed_description: value.detailed_description,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateServiceForm {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub slug: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub icon: Option<String>,
    #[validate(length(min = 1))]
    pub detailed_description: Option<String>,
}

impl TryFrom<UpdateServiceForm> for ServicePatch {
    type Error = FormError;

    fn try_from(value: UpdateServiceForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: map_opt(value.name, ServiceName::new)?,
            slug: map_opt(value.slug, ServiceSlug::new)?,
            description: value.description,
            icon: value.icon,
            detailed_description: value.detailed_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_service_rejects_malformed_slug() {
        let form = AddServiceForm {
            name: "Web Design".to_string(),
            slug: "Web Design".to_string(),
            description: "Sites".to_string(),
            icon: "layout".to_string(),
            detailed_description: "Full sites".to_string(),
        };
        let result: Result<NewService, _> = form.try_into();
        assert!(matches!(result, Err(FormError::TypeConstraint(_))));
    }
}
