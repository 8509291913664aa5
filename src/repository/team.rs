use crate::domain::team::{NewTeamMember, TeamMember, TeamMemberPatch};
use crate::domain::types::TeamMemberId;
use crate::repository::{MemoryRepository, RepositoryResult, TeamMemberReader, TeamMemberWriter};

impl TeamMemberReader for MemoryRepository {
    fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>> {
        let store = self.read()?;
        Ok(store.team_members.values().cloned().collect())
    }

    fn get_team_member_by_id(&self, id: TeamMemberId) -> RepositoryResult<Option<TeamMember>> {
        let store = self.read()?;
        Ok(store.team_members.get(id.get()).cloned())
    }
}

impl TeamMemberWriter for MemoryRepository {
    fn create_team_member(&self, member: &NewTeamMember) -> RepositoryResult<TeamMember> {
        let mut store = self.write()?;
        store
            .team_members
            .insert_with(|id| Ok(member.clone().into_team_member(TeamMemberId::new(id)?)))
    }

    fn update_team_member(
        &self,
        id: TeamMemberId,
        patch: TeamMemberPatch,
    ) -> RepositoryResult<Option<TeamMember>> {
        let mut store = self.write()?;
        let Some(member) = store.team_members.get_mut(id.get()) else {
            return Ok(None);
        };
        patch.apply_to(member);
        Ok(Some(member.clone()))
    }

    fn delete_team_member(&self, id: TeamMemberId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.team_members.remove(id.get()))
    }
}
