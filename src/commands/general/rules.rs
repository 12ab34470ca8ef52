use serenity::utils::Colour;
use crate::{FormContext, Error};

/// Post the server rules in this channel.
///
/// postrules
#[poise::command(prefix_command, guild_only, owners_only, hide_in_help, rename = "postrules", category = "Rules")]
pub async fn post_rules(ctx: FormContext<'_>) -> Result<(), Error> {
    let rules = &ctx.data().config.rules;

    if rules.is_empty() {
        ctx.say("No rules are configured, so there's nothing to post.").await?;
        return Ok(());
    }

    ctx.send(|m| m.embed(|e| {
        e
            .title("Rules")
            .colour(Colour::RED);

        for rule in rules {
            e.field(&rule.name, &rule.description, false);
        }

        e
    })).await?;

    Ok(())
}
