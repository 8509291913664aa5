use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::class::{ClassPatch, NewClass, ensure_spots_within_capacity};
use crate::domain::types::{CategoryId, ClassTitle, LocationId, PriceCents, SpotCount};
use crate::forms::{FormError, map_opt};

fn spots_within_capacity(total: i32, available: i32) -> Result<(), ValidationError> {
    if available > total {
        let mut error = ValidationError::new("available_spots_exceed_total");
        error.message = Some("availableSpots cannot exceed totalSpots".into());
        return Err(error);
    }
    Ok(())
}

fn validate_add_spots(form: &AddClassForm) -> Result<(), ValidationError> {
    spots_within_capacity(form.total_spots, form.available_spots)
}

fn validate_update_spots(form: &UpdateClassForm) -> Result<(), ValidationError> {
    match (form.total_spots, form.available_spots) {
        (Some(total), Some(available)) => spots_within_capacity(total, available),
        _ => Ok(()),
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_add_spots", skip_on_field_errors = false))]
pub struct AddClassForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(length(min = 1))]
    pub price_unit: String,
    #[validate(range(min = 0))]
    pub total_spots: i32,
    #[validate(range(min = 0))]
    pub available_spots: i32,
    #[serde(default)]
    pub image_url: String,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub time: String,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(range(min = 1))]
    pub location_id: i32,
}

impl TryFrom<AddClassForm> for NewClass {
    type Error = FormError;

    fn try_from(value: AddClassForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let total_spots = SpotCount::new(value.total_spots)?;
        let available_spots = SpotCount::new(value.available_spots)?;
        ensure_spots_within_capacity(total_spots, available_spots)?;

        Ok(Self {
            title: ClassTitle::new(value.title)?,
            description: value.description,
            price: PriceCents::new(value.price)?,
            price_unit: value.price_unit,
            total_spots,
            available_spots,
            image_url: value.image_url,
            date: value.date,
            time: value.time,
            category_id: CategoryId::new(value.category_id)?,
            location_id: LocationId::new(value.location_id)?,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = "validate_update_spots", skip_on_field_errors = false))]
pub struct UpdateClassForm {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    #[validate(length(min = 1))]
    pub price_unit: Option<String>,
    #[validate(range(min = 0))]
    pub total_spots: Option<i32>,
    #[validate(range(min = 0))]
    pub available_spots: Option<i32>,
    pub image_url: Option<String>,
    #[validate(length(min = 1))]
    pub date: Option<String>,
    #[validate(length(min = 1))]
    pub time: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
    #[validate(range(min = 1))]
    pub location_id: Option<i32>,
}

impl TryFrom<UpdateClassForm> for ClassPatch {
    type Error = FormError;

    fn try_from(value: UpdateClassForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: map_opt(value.title, ClassTitle::new)?,
            description: value.description,
            price: map_opt(value.price, PriceCents::new)?,
            price_unit: value.price_unit,
            total_spots: map_opt(value.total_spots, SpotCount::new)?,
            available_spots: map_opt(value.available_spots, SpotCount::new)?,
            image_url: value.image_url,
            date: value.date,
            time: value.time,
            category_id: map_opt(value.category_id, CategoryId::new)?,
            location_id: map_opt(value.location_id, LocationId::new)?,
        })
    }
}

/// Body of the availability endpoint.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAvailabilityForm {
    #[validate(range(min = 0))]
    pub available_spots: i32,
}

impl TryFrom<UpdateAvailabilityForm> for SpotCount {
    type Error = FormError;

    fn try_from(value: UpdateAvailabilityForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(SpotCount::new(value.available_spots)?)
    }
}
