use serde::{Deserialize, Serialize};

use crate::domain::types::{ServiceId, ServiceName, ServiceSlug};

/// A service offered on the marketing site, addressable by slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: ServiceName,
    pub slug: ServiceSlug,
    pub description: String,
    pub icon: String,
    pub detailed_description: String,
}

/// Data required to insert a new [`Service`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: ServiceName,
    pub slug: ServiceSlug,
    pub description: String,
    pub icon: String,
    pub detailed_description: String,
}

impl NewService {
    pub fn into_service(self, id: ServiceId) -> Service {
        Service {
            id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            icon: self.icon,
            detailed_description: self.detailed_description,
        }
    }
}

/// Partial update for a [`Service`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePatch {
    pub name: Option<ServiceName>,
    pub slug: Option<ServiceSlug>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub detailed_description: Option<String>,
}

impl ServicePatch {
    pub fn apply_to(self, service: &mut Service) {
        if let Some(name) = self.name {
            service.name = name;
        }
        if let Some(slug) = self.slug {
            service.slug = slug;
        }
        if let Some(description) = self.description {
            service.description = description;
        }
        if let Some(icon) = self.icon {
            service.icon = icon;
        }
        if let Some(detailed_description) = self.detailed_description {
            service.detailed_description = detailed_description;
        }
    }
}
