use serde::Deserialize;
use validator::Validate;

use crate::domain::team::{NewTeamMember, TeamMemberPatch};
use crate::domain::types::PersonName;
use crate::forms::{FormError, map_opt};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTeamMemberForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

impl TryFrom<AddTeamMemberForm> for NewTeamMember {
    type Error = FormError;

    fn try_from(value: AddTeamMemberForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: PersonName::new(value.name)?,
            role: value.role,
            bio: value.bio,
            image_url: value.image_url,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTeamMemberForm {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

impl TryFrom<UpdateTeamMemberForm> for TeamMemberPatch {
    type Error = FormError;

    fn try_from(value: UpdateTeamMemberForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: map_opt(value.name, PersonName::new)?,
            role: value.role,
            bio: value.bio,
            image_url: value.image_url,
        })
    }
}
