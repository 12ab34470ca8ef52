use std::sync::Arc;
use serenity::model::id::GuildId;
use tracing::info;
use crate::{FormContext, Error};
use crate::models::bot_module::BotModule;
use crate::services::bot_init::load_directory;

async fn parse_module(ctx: FormContext<'_>, name: &str) -> Result<Option<BotModule>, Error> {
    match name.parse::<BotModule>() {
        Ok(module) => Ok(Some(module)),
        Err(ex) => {
            ctx.say(ex.to_string()).await?;
            Ok(None)
        }
    }
}

/// Turn a command module back on.
///
/// load <module>
#[poise::command(prefix_command, owners_only, hide_in_help)]
pub async fn load(ctx: FormContext<'_>, module: String) -> Result<(), Error> {
    let module = match parse_module(ctx, &module).await? {
        Some(module) => module,
        None => return Ok(())
    };

    let was_unloaded = ctx.data().unloaded.write().await.remove(&module);
    if was_unloaded {
        info!("Loaded module {}", module);
        ctx.say(format!("Loaded `{module}`.")).await?;
    } else {
        ctx.say(format!("`{module}` is already loaded.")).await?;
    }

    Ok(())
}

/// Turn a command module off until it is loaded again.
///
/// unload <module>
#[poise::command(prefix_command, owners_only, hide_in_help)]
pub async fn unload(ctx: FormContext<'_>, module: String) -> Result<(), Error> {
    let module = match parse_module(ctx, &module).await? {
        Some(module) => module,
        None => return Ok(())
    };

    let newly_unloaded = ctx.data().unloaded.write().await.insert(module);
    if newly_unloaded {
        info!("Unloaded module {}", module);
        ctx.say(format!("Unloaded `{module}`.")).await?;
    } else {
        ctx.say(format!("`{module}` isn't loaded.")).await?;
    }

    Ok(())
}

/// Load a module and re-read the server's roles.
///
/// reload <module>
#[poise::command(prefix_command, owners_only, hide_in_help)]
pub async fn reload(ctx: FormContext<'_>, module: String) -> Result<(), Error> {
    let module = match parse_module(ctx, &module).await? {
        Some(module) => module,
        None => return Ok(())
    };

    let data = ctx.data();
    let directory = load_directory(&ctx.serenity_context().http, GuildId(data.config.guild_id)).await?;
    let missing = directory.missing().count();

    *data.directory.write().await = Arc::new(directory);
    data.unloaded.write().await.remove(&module);
    info!("Reloaded module {} with {} unresolved roles", module, missing);

    if missing == 0 {
        ctx.say(format!("Reloaded `{module}`.")).await?;
    } else {
        ctx.say(format!("Reloaded `{module}`, but {missing} roles are missing from the server. Check the logs.")).await?;
    }

    Ok(())
}
