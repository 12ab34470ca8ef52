mod subject_reader;
mod select_year;

pub use subject_reader::*;
pub use select_year::*;

use crate::{FormContext, Error};
use crate::services::role_editor::MemberRoles;

/// The invoking member, from the cache when serenity has it and over HTTP otherwise.
async fn author_roles(ctx: FormContext<'_>) -> Result<MemberRoles<'_>, Error> {
    let guild_id = ctx.guild_id().ok_or("This command can only be run in a server.")?;
    let member = guild_id.member(ctx.serenity_context(), ctx.author().id).await?;

    Ok(MemberRoles::new(ctx.serenity_context(), member))
}
