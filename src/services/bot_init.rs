use std::sync::Arc;
use serenity::{
    client::Context,
    http::Http,
    model::{
        gateway::Ready,
        id::GuildId
    }
};
use tokio::sync::RwLock;
use tracing::{error, info};
use crate::{Data, Error};
use crate::models::{config::Config, labels::all_labels};
use crate::services::role_directory::RoleDirectory;

pub async fn ready(ctx: &Context, ready: &Ready, config: Config) -> Result<Data, Error> {
    info!("Logged in as {}", ready.user.name);

    let directory = load_directory(&ctx.http, GuildId(config.guild_id)).await?;

    Ok(Data {
        config,
        directory: RwLock::new(Arc::new(directory)),
        unloaded: RwLock::default()
    })
}

/// Fetches the guild's roles and resolves every label against them.
pub async fn load_directory(http: impl AsRef<Http>, guild_id: GuildId) -> Result<RoleDirectory, Error> {
    let mut guild_roles = guild_id.roles(http).await?
        .into_values()
        .map(|role| (role.name, role.id))
        .collect::<Vec<_>>();
    // Oldest role first, so duplicate names resolve the same way every startup.
    guild_roles.sort_by_key(|(_, id)| *id);

    let directory = RoleDirectory::build(&guild_roles, &all_labels());
    for label in directory.missing() {
        error!("No role named \"{}\" exists in guild {}; commands for it will be unavailable.", label, guild_id);
    }
    info!("Resolved roles for guild {} ({} roles scanned)", guild_id, guild_roles.len());

    Ok(directory)
}
