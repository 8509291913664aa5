use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::location::Location;
use crate::domain::types::{
    CategoryId, ClassId, ClassTitle, LocationId, PriceCents, SpotCount, TypeConstraintError,
};

/// Checks `0 <= available <= total`. The lower bound is carried by [`SpotCount`].
pub fn ensure_spots_within_capacity(
    total: SpotCount,
    available: SpotCount,
) -> Result<(), TypeConstraintError> {
    if available > total {
        return Err(TypeConstraintError::InvalidValue(format!(
            "available spots ({available}) cannot exceed total spots ({total})"
        )));
    }
    Ok(())
}

/// A bookable class as stored, referencing its category and location by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: ClassId,
    pub title: ClassTitle,
    pub description: String,
    pub price: PriceCents,
    pub price_unit: String,
    pub total_spots: SpotCount,
    pub available_spots: SpotCount,
    pub image_url: String,
    /// Free text such as "Every Monday".
    pub date: String,
    /// Free text such as "6:00 PM - 8:00 PM".
    pub time: String,
    pub category_id: CategoryId,
    pub location_id: LocationId,
}

/// Data required to insert a new [`Class`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewClass {
    pub title: ClassTitle,
    pub description: String,
    pub price: PriceCents,
    pub price_unit: String,
    pub total_spots: SpotCount,
    pub available_spots: SpotCount,
    pub image_url: String,
    pub date: String,
    pub time: String,
    pub category_id: CategoryId,
    pub location_id: LocationId,
}

impl NewClass {
    pub fn into_class(self, id: ClassId) -> Class {
        Class {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            price_unit: self.price_unit,
            total_spots: self.total_spots,
            available_spots: self.available_spots,
            image_url: self.image_url,
            date: self.date,
            time: self.time,
            category_id: self.category_id,
            location_id: self.location_id,
        }
    }
}

/// Partial update for a [`Class`]; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassPatch {
    pub title: Option<ClassTitle>,
    pub description: Option<String>,
    pub price: Option<PriceCents>,
    pub price_unit: Option<String>,
    pub total_spots: Option<SpotCount>,
    pub available_spots: Option<SpotCount>,
    pub image_url: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub category_id: Option<CategoryId>,
    pub location_id: Option<LocationId>,
}

impl ClassPatch {
    pub fn apply_to(self, class: &mut Class) {
        if let Some(title) = self.title {
            class.title = title;
        }
        if let Some(description) = self.description {
            class.description = description;
        }
        if let Some(price) = self.price {
            class.price = price;
        }
        if let Some(price_unit) = self.price_unit {
            class.price_unit = price_unit;
        }
        if let Some(total_spots) = self.total_spots {
            class.total_spots = total_spots;
        }
        if let Some(available_spots) = self.available_spots {
            class.available_spots = available_spots;
        }
        if let Some(image_url) = self.image_url {
            class.image_url = image_url;
        }
        if let Some(date) = self.date {
            class.date = date;
        }
        if let Some(time) = self.time {
            class.time = time;
        }
        if let Some(category_id) = self.category_id {
            class.category_id = category_id;
        }
        if let Some(location_id) = self.location_id {
            class.location_id = location_id;
        }
    }
}

/// A [`Class`] with its category and location attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassWithDetails {
    #[serde(flatten)]
    pub class: Class,
    pub category: Category,
    pub location: Location,
}
