use serde::{Deserialize, Serialize};

use crate::domain::service::Service;
use crate::domain::types::{PortfolioItemId, PortfolioTitle, ServiceId};

/// A case study shown in the portfolio, tied to the service it showcases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub title: PortfolioTitle,
    pub description: String,
    pub image_url: String,
    pub client: String,
    pub service_id: ServiceId,
    pub result: String,
    pub testimonial: String,
    pub testimonial_author: String,
}

/// Data required to insert a new [`PortfolioItem`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioItem {
    pub title: PortfolioTitle,
    pub description: String,
    pub image_url: String,
    pub client: String,
    pub service_id: ServiceId,
    pub result: String,
    pub testimonial: String,
    pub testimonial_author: String,
}

impl NewPortfolioItem {
    pub fn into_portfolio_item(self, id: PortfolioItemId) -> PortfolioItem {
        PortfolioItem {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            client: self.client,
            service_id: self.service_id,
            result: self.result,
            testimonial: self.testimonial,
            testimonial_author: self.testimonial_author,
        }
    }
}

/// Partial update for a [`PortfolioItem`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioItemPatch {
    pub title: Option<PortfolioTitle>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub client: Option<String>,
    pub service_id: Option<ServiceId>,
    pub result: Option<String>,
    pub testimonial: Option<String>,
    pub testimonial_author: Option<String>,
}

impl PortfolioItemPatch {
    pub fn apply_to(self, item: &mut PortfolioItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(image_url) = self.image_url {
            item.image_url = image_url;
        }
        if let Some(client) = self.client {
            item.client = client;
        }
        if let Some(service_id) = self.service_id {
            item.service_id = service_id;
        }
        if let Some(result) = self.result {
            item.result = result;
        }
        if let Some(testimonial) = self.testimonial {
            item.testimonial = testimonial;
        }
        if let Some(testimonial_author) = self.testimonial_author {
            item.testimonial_author = testimonial_author;
        }
    }
}

/// A [`PortfolioItem`] with its service attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioItemWithService {
    #[serde(flatten)]
    pub item: PortfolioItem,
    pub service: Service,
}
