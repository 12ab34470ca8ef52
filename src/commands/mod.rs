mod admin;
mod feedback;
mod general;
mod roles;

use std::collections::HashSet;
use serenity::model::id::UserId;
use tracing::error;
use admin::*;
use general::*;
use roles::*;
use crate::{FormContext, Data, Error};
use crate::models::bot_module::command_enabled;

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx } => {
            error!("Command {} failed: {}", ctx.command().qualified_name, error);
            if let Err(ex) = ctx.say("Something went wrong while running that command, sorry!").await {
                error!("Failed to send error message: {}", ex);
            }
        }
        other => {
            if let Err(ex) = poise::builtins::on_error(other).await {
                error!("Failed to handle framework error: {}", ex);
            }
        }
    }
}

/// Refuses commands whose module has been unloaded.
async fn module_check(ctx: FormContext<'_>) -> Result<bool, Error> {
    let unloaded = ctx.data().unloaded.read().await;

    Ok(command_enabled(ctx.command().category.as_deref(), &unloaded))
}

pub fn get_framework(pref: &str, owners: HashSet<UserId>) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: vec![
            help(),
            post_rules(),
            add_subject(),
            drop_subject(),
            change_subject(),
            set_year(),
            load(),
            unload(),
            reload()
        ],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(pref.to_string()),
            mention_as_prefix: true,
            ..Default::default()
        },
        command_check: Some(|ctx| Box::pin(module_check(ctx))),
        on_error: |error| Box::pin(on_error(error)),
        owners,
        ..Default::default()
    }
}
