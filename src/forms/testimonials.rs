use serde::Deserialize;
use validator::Validate;

use crate::domain::testimonial::{NewTestimonial, TestimonialPatch};
use crate::domain::types::PersonName;
use crate::forms::{FormError, map_opt};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTestimonialForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub company: String,
    #[validate(length(min = 1))]
    pub testimonial: String,
    #[serde(default)]
    pub image_url: String,
}

impl TryFrom<AddTestimonialForm> for NewTestimonial {
    type Error = FormError;

    fn try_from(value: AddTestimonialForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: PersonName::new(value.name)?,
            company: value.company,
            testimonial: value.testimonial,
            image_url: value.image_url,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTestimonialForm {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 1))]
    pub testimonial: Option<String>,
    pub image_url: Option<String>,
}

impl TryFrom<UpdateTestimonialForm> for TestimonialPatch {
    type Error = FormError;

    fn try_from(value: UpdateTestimonialForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: map_opt(value.name, PersonName::new)?,
            company: value.company,
            testimonial: value.testimonial,
            image_url: value.image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_defaults_to_empty() {
        let form: AddTestimonialForm =
            serde_json::from_str(r#"{"name":"Ana","company":"Acme","testimonial":"Great"}"#)
                .unwrap();
        let testimonial: NewTestimonial = form.try_into().unwrap();
        assert_eq!(testimonial.image_url, "");
    }
}
