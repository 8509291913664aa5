use serde::Deserialize;
use validator::Validate;

use crate::domain::location::{LocationPatch, NewLocation};
use crate::domain::types::LocationName;
use crate::forms::{FormError, map_opt};

/// Blank addresses are stored as absent.
fn normalize_address(address: String) -> Option<String> {
    let trimmed = address.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddLocationForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl TryFrom<AddLocationForm> for NewLocation {
    type Error = FormError;

    fn try_from(value: AddLocationForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: LocationName::new(value.name)?,
            address: value.address.and_then(normalize_address),
        })
    }
}

/// `address: null` clears the address; an omitted key leaves it unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateLocationForm {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub address: Option<Option<String>>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl TryFrom<UpdateLocationForm> for LocationPatch {
    type Error = FormError;

    fn try_from(value: UpdateLocationForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: map_opt(value.name, LocationName::new)?,
            address: value.address.map(|a| a.and_then(normalize_address)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_address_becomes_none() {
        let form = AddLocationForm {
            name: "Online".to_string(),
            address: Some("  ".to_string()),
        };
        let location: NewLocation = form.try_into().unwrap();
        assert!(location.address.is_none());
    }

    #[test]
    fn update_distinguishes_null_from_missing() {
        let cleared: UpdateLocationForm = serde_json::from_str(r#"{"address":null}"#).unwrap();
        let patch: LocationPatch = cleared.try_into().unwrap();
        assert_eq!(patch.address, Some(None));

        let untouched: UpdateLocationForm = serde_json::from_str(r#"{"name":"Annex"}"#).unwrap();
        let patch: LocationPatch = untouched.try_into().unwrap();
        assert_eq!(patch.address, None);
        assert_eq!(patch.name.unwrap().as_str(), "Annex");
    }
}
