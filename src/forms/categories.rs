use serde::Deserialize;
use validator::Validate;

use crate::domain::category::{CategoryPatch, NewCategory};
use crate::domain::types::CategoryName;
use crate::forms::{FormError, map_opt};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub color: String,
    #[validate(length(min = 1))]
    pub text_color: String,
    #[validate(length(min = 1))]
    pub bg_color: String,
}

impl TryFrom<AddCategoryForm> for NewCategory {
    type Error = FormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
            color: value.color,
            text_color: value.text_color,
            bg_color: value.bg_color,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCategoryForm {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub color: Option<String>,
    #[validate(length(min = 1))]
    pub text_color: Option<String>,
    #[validate(length(min = 1))]
    pub bg_color: Option<String>,
}

impl TryFrom<UpdateCategoryForm> for CategoryPatch {
    type Error = FormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: map_opt(value.name, CategoryName::new)?,
            color: value.color,
            text_color: value.text_color,
            bg_color: value.bg_color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_category_trims_name() {
        let form = AddCategoryForm {
            name: "  Art & Crafts ".to_string(),
            color: "orange".to_string(),
            text_color: "text-orange-800".to_string(),
            bg_color: "bg-orange-100".to_string(),
        };

        let category: NewCategory = form.try_into().unwrap();
        assert_eq!(category.name.as_str(), "Art & Crafts");
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let result = serde_json::from_str::<UpdateCategoryForm>(r#"{"name":"x","id":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_rejects_blank_name() {
        let form = UpdateCategoryForm {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        let patch: Result<CategoryPatch, _> = form.try_into();
        assert!(matches!(patch, Err(FormError::TypeConstraint(_))));
    }
}
