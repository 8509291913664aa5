use serde::{Deserialize, Serialize};

use crate::domain::types::{LocationId, LocationName};

/// Venue where classes take place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: LocationName,
    pub address: Option<String>,
}

/// Data required to insert a new [`Location`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub name: LocationName,
    pub address: Option<String>,
}

impl NewLocation {
    pub fn into_location(self, id: LocationId) -> Location {
        Location {
            id,
            name: self.name,
            address: self.address,
        }
    }
}

/// Partial update for a [`Location`].
///
/// `address` is doubly optional: `Some(None)` clears the stored address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPatch {
    pub name: Option<LocationName>,
    pub address: Option<Option<String>>,
}

impl LocationPatch {
    pub fn apply_to(self, location: &mut Location) {
        if let Some(name) = self.name {
            location.name = name;
        }
        if let Some(address) = self.address {
            location.address = address;
        }
    }
}
