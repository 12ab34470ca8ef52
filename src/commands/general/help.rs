use std::collections::HashSet;
use serenity::utils::Colour;
use poise::Command;
use crate::{FormContext, Data, Error};
use crate::models::bot_module::{command_enabled, BotModule};

/// Show every command and how to use it.
///
/// help [command]
#[poise::command(prefix_command, guild_only, category = "Help")]
pub async fn help(
    ctx: FormContext<'_>,
    #[rest] command: Option<String>
) -> Result<(), Error> {
    match command {
        Some(command) => help_single_command(ctx, &command).await,
        None => help_all_commands(ctx).await
    }
}

struct CommandHelp {
    name: String,
    description: String,
    usage: String
}

fn generate_command_help(cmd: &Command<Data, Error>, prefix: &str) -> CommandHelp {
    let description = cmd.description.clone().unwrap_or_else(|| "No help available".to_string());
    let usage = match cmd.help_text {
        Some(help_text) => help_text().trim().to_string(),
        None => cmd.name.to_string()
    };

    CommandHelp {
        name: cmd.name.to_string(),
        description,
        usage: format!("{prefix}{usage}")
    }
}

/// Commands that show up in help: not hidden, and not part of an unloaded module.
fn listed_commands(commands: &[Command<Data, Error>], unloaded: &HashSet<BotModule>, prefix: &str) -> Vec<CommandHelp> {
    commands.iter()
        .filter(|cmd| !cmd.hide_in_help)
        .filter(|cmd| command_enabled(cmd.category.as_deref(), unloaded))
        .map(|cmd| generate_command_help(cmd, prefix))
        .collect()
}

async fn visible_commands(ctx: FormContext<'_>) -> Vec<CommandHelp> {
    let unloaded = ctx.data().unloaded.read().await;

    listed_commands(&ctx.framework().options().commands, &unloaded, &ctx.data().config.cmd_prefix)
}

async fn help_single_command(ctx: FormContext<'_>, command_name: &str) -> Result<(), Error> {
    let command_name = command_name.trim();
    let reply = match visible_commands(ctx).await.into_iter().find(|cmd| cmd.name.eq_ignore_ascii_case(command_name)) {
        Some(cmd) => format!("**{}**: {}\nUsage: `{}`", cmd.name, cmd.description, cmd.usage),
        None => format!("No such command `{}`", command_name)
    };

    ctx.say(reply).await?;
    Ok(())
}

/// The command list, one field per command (e.g. `#help`)
async fn help_all_commands(ctx: FormContext<'_>) -> Result<(), Error> {
    let commands = visible_commands(ctx).await;

    ctx.send(|m| m.embed(|e| {
        e
            .title("Sixth Form bot: commands")
            .colour(Colour::BLUE);

        for cmd in commands {
            e.field(cmd.name, format!("{}\nUsage: {}", cmd.description, cmd.usage), true);
        }

        e
    })).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{admin::load, general::post_rules, roles::{add_subject, set_year}};

    fn commands() -> Vec<Command<Data, Error>> {
        vec![help(), post_rules(), add_subject(), set_year(), load()]
    }

    #[test]
    fn usage_line_uses_the_prefix() {
        let entry = generate_command_help(&add_subject(), "#");

        assert_eq!(entry.name, "addsubject");
        assert_eq!(entry.description, "Add a subject to your roles.");
        assert_eq!(entry.usage, "#addsubject <subject>");
    }

    #[test]
    fn hidden_commands_are_left_out() {
        let names = listed_commands(&commands(), &HashSet::new(), "#")
            .into_iter()
            .map(|cmd| cmd.name)
            .collect::<Vec<_>>();

        assert_eq!(names, ["help", "addsubject", "setyear"]);
    }

    #[test]
    fn unloaded_modules_are_left_out() {
        let unloaded = HashSet::from([BotModule::Years]);
        let names = listed_commands(&commands(), &unloaded, "!")
            .into_iter()
            .map(|cmd| cmd.name)
            .collect::<Vec<_>>();

        assert_eq!(names, ["help", "addsubject"]);
    }
}
