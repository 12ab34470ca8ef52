use async_trait::async_trait;
use serenity::{
    client::Context,
    model::{guild::Member, id::RoleId}
};
use crate::Error;

/// The role operations a command needs from a guild member.
#[async_trait]
pub trait RoleEditor: Send {
    fn roles(&self) -> &[RoleId];

    async fn add_role(&mut self, role: RoleId) -> Result<(), Error>;

    async fn remove_role(&mut self, role: RoleId) -> Result<(), Error>;
}

pub struct MemberRoles<'a> {
    ctx: &'a Context,
    member: Member
}

impl<'a> MemberRoles<'a> {
    pub fn new(ctx: &'a Context, member: Member) -> Self {
        MemberRoles { ctx, member }
    }
}

#[async_trait]
impl RoleEditor for MemberRoles<'_> {
    fn roles(&self) -> &[RoleId] {
        &self.member.roles
    }

    async fn add_role(&mut self, role: RoleId) -> Result<(), Error> {
        self.member.add_role(self.ctx, role).await?;
        Ok(())
    }

    async fn remove_role(&mut self, role: RoleId) -> Result<(), Error> {
        self.member.remove_role(self.ctx, role).await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;

    /// In-memory member that records every mutation and can be told to fail.
    #[derive(Default)]
    pub struct FakeMember {
        pub roles: Vec<RoleId>,
        pub fail_add: bool,
        pub fail_remove: bool,
        pub calls: Vec<String>
    }

    impl FakeMember {
        pub fn with_roles(roles: &[u64]) -> Self {
            FakeMember { roles: roles.iter().map(|r| RoleId(*r)).collect(), ..Default::default() }
        }
    }

    #[async_trait]
    impl RoleEditor for FakeMember {
        fn roles(&self) -> &[RoleId] {
            &self.roles
        }

        async fn add_role(&mut self, role: RoleId) -> Result<(), Error> {
            self.calls.push(format!("add {}", role.0));
            if self.fail_add {
                return Err("missing permissions".into());
            }
            self.roles.push(role);
            Ok(())
        }

        async fn remove_role(&mut self, role: RoleId) -> Result<(), Error> {
            self.calls.push(format!("remove {}", role.0));
            if self.fail_remove {
                return Err("missing permissions".into());
            }
            self.roles.retain(|r| *r != role);
            Ok(())
        }
    }
}
