use serenity::model::id::RoleId;
use crate::models::labels::Label;

/// Label to role mapping, built from the guild's role list.
///
/// Labels without a matching role stay in the directory as `None` so the
/// commands can tell a misconfigured server apart from a bad query.
#[derive(Debug, Clone, Default)]
pub struct RoleDirectory {
    entries: Vec<(Label, Option<RoleId>)>
}

impl RoleDirectory {
    /// Exact, case-sensitive name lookup for every label. The first guild role
    /// with a matching name wins.
    pub fn build(guild_roles: &[(String, RoleId)], labels: &[Label]) -> Self {
        let entries = labels.iter()
            .map(|&label| {
                let role = guild_roles.iter()
                    .find(|(name, _)| name == label)
                    .map(|(_, id)| *id);
                (label, role)
            })
            .collect();

        RoleDirectory { entries }
    }

    pub fn lookup(&self, label: &str) -> Option<RoleId> {
        self.entries.iter()
            .find(|(l, _)| *l == label)
            .and_then(|(_, role)| *role)
    }

    pub fn missing(&self) -> impl Iterator<Item = Label> + '_ {
        self.entries.iter()
            .filter(|(_, role)| role.is_none())
            .map(|(label, _)| *label)
    }

    pub fn label_of(&self, role: RoleId) -> Option<Label> {
        self.entries.iter()
            .find(|(_, r)| *r == Some(role))
            .map(|(label, _)| *label)
    }

    /// Labels held by a member, in the order of their roles.
    pub fn held_labels<'a>(&'a self, member_roles: &'a [RoleId]) -> impl Iterator<Item = Label> + 'a {
        member_roles.iter().filter_map(|role| self.label_of(*role))
    }

    pub fn holds(&self, member_roles: &[RoleId], label: &str) -> bool {
        self.lookup(label).map_or(false, |role| member_roles.contains(&role))
    }
}
