use serde::Deserialize;

use crate::connector::TeamAuthConfig;

/// Per-team GitHub authorization allow-list.
///
/// Lists which GitHub identities may act as a team: individual usernames,
/// whole organizations, and single teams within an organization. Populated
/// once from the team's config source and immutable afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubTeamConfig {
    /// Allow-listed usernames.
    #[serde(default)]
    pub users: Vec<String>,

    /// Allow-listed organization names.
    #[serde(default)]
    pub orgs: Vec<String>,

    /// Allow-listed teams, formatted `"org/team"`.
    #[serde(default)]
    pub teams: Vec<String>,
}

impl TeamAuthConfig for GithubTeamConfig {
    fn is_valid(&self) -> bool {
        !self.users.is_empty() || !self.orgs.is_empty() || !self.teams.is_empty()
    }

    fn users(&self) -> &[String] {
        &self.users
    }

    /// Orgs first in configured order, then teams normalized from
    /// `"org/team"` to `"org:team"` in configured order.
    ///
    /// A bare org and an `org:team` pair are both group identifiers to the
    /// dispatcher, just at different granularity. Entries without a `/`
    /// pass through unchanged; whether the dispatcher accepts such a literal
    /// group name is its contract, not ours.
    fn groups(&self) -> Vec<String> {
        let formatted_teams = self.teams.iter().map(|team| team.replace('/', ":"));
        self.orgs.iter().cloned().chain(formatted_teams).collect()
    }
}
