use serde::{Deserialize, Serialize};

use crate::domain::types::{PersonName, TeamMemberId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: PersonName,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    pub name: PersonName,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

impl NewTeamMember {
    pub fn into_team_member(self, id: TeamMemberId) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            role: self.role,
            bio: self.bio,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamMemberPatch {
    pub name: Option<PersonName>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

impl TeamMemberPatch {
    pub fn apply_to(self, member: &mut TeamMember) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(bio) = self.bio {
            member.bio = bio;
        }
        if let Some(image_url) = self.image_url {
            member.image_url = image_url;
        }
    }
}
