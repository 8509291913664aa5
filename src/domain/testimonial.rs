use serde::{Deserialize, Serialize};

use crate::domain::types::{PersonName, TestimonialId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: PersonName,
    pub company: String,
    pub testimonial: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: PersonName,
    pub company: String,
    pub testimonial: String,
    pub image_url: String,
}

impl NewTestimonial {
    pub fn into_testimonial(self, id: TestimonialId) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            company: self.company,
            testimonial: self.testimonial,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialPatch {
    pub name: Option<PersonName>,
    pub company: Option<String>,
    pub testimonial: Option<String>,
    pub image_url: Option<String>,
}

impl TestimonialPatch {
    pub fn apply_to(self, testimonial: &mut Testimonial) {
        if let Some(name) = self.name {
            testimonial.name = name;
        }
        if let Some(company) = self.company {
            testimonial.company = company;
        }
        if let Some(text) = self.testimonial {
            testimonial.testimonial = text;
        }
        if let Some(image_url) = self.image_url {
            testimonial.image_url = image_url;
        }
    }
}
