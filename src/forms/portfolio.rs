use serde::Deserialize;
use validator::Validate;

use crate::domain::portfolio::{NewPortfolioItem, PortfolioItemPatch};
use crate::domain::types::{PortfolioTitle, ServiceId};
use crate::forms::{FormError, map_opt};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddPortfolioItemForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub client: String,
    #[validate(range(min = 1))]
    pub service_id: i32,
    pub result: String,
    #[serde(default)]
    pub testimonial: String,
    #[serde(default)]
    pub testimonial_author: String,
}

impl TryFrom<AddPortfolioItemForm> for NewPortfolioItem {
    type Error = FormError;

    fn try_from(value: AddPortfolioItemForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: PortfolioTitle::new(value.title)?,
            description: value.description,
            image_url: value.image_url,
            client: value.client,
            service_id: ServiceId::new(value.service_id)?,
            result: value.result,
            testimonial: value.testimonial,
            testimonial_author: value.testimonial_author,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePortfolioItemForm {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub client: Option<String>,
    #[validate(range(min = 1))]
    pub service_id: Option<i32>,
    pub result: Option<String>,
    pub testimonial: Option<String>,
    pub testimonial_author: Option<String>,
}

impl TryFrom<UpdatePortfolioItemForm> for PortfolioItemPatch {
    type Error = FormError;

    fn try_from(value: UpdatePortfolioItemForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: map_opt(value.title, PortfolioTitle::new)?,
            description: value.description,
            image_url: value.image_url,
            client: value.client,
            service_id: map_opt(value.service_id, ServiceId::new)?,
            result: value.result,
            testimonial: value.testimonial,
            testimonial_author: value.testimonial_author,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonial_fields_default_to_empty() {
        let form: AddPortfolioItemForm = serde_json::from_str(
            r#"{"title":"Shop relaunch","description":"d","imageUrl":"i","client":"Acme",
                "serviceId":2,"result":"+40% sales"}"#,
        )
        .unwrap();
        let item: NewPortfolioItem = form.try_into().unwrap();
        assert_eq!(item.testimonial, "");
        assert_eq!(item.testimonial_author, "");
        assert_eq!(item.service_id.get(), 2);
    }
}
