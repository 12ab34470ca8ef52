use tracing::error;
use crate::{FormContext, Error};
use crate::models::labels::Label;
use crate::services::enrollment_policy::DenyReason;

/// What a role command tells the member once it has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success,
    /// The text didn't resolve to any label.
    Unresolved,
    Denied(DenyReason),
    /// The label resolved, but the server has no role for it.
    ConfigurationGap(Label),
    Malformed(&'static str),
    /// The new role was added but the old one couldn't be removed.
    PartialChange { added: Label, kept: Label }
}

impl Feedback {
    pub async fn deliver(self, ctx: FormContext<'_>) -> Result<(), Error> {
        match self {
            Feedback::Success => react(ctx, '👍').await?,
            Feedback::Unresolved => react(ctx, '👎').await?,
            Feedback::Denied(reason) => {
                react(ctx, '🤔').await?;
                ctx.say(reason.to_string()).await?;
            }
            Feedback::ConfigurationGap(label) => {
                error!("Role for \"{}\" is missing from the server, requested by {}", label, ctx.author().id);
                ctx.say(format!("Sorry, the {label} role hasn't been set up on this server. That's on us, not you; please let a moderator know.")).await?;
            }
            Feedback::Malformed(usage) => {
                ctx.say(usage).await?;
            }
            Feedback::PartialChange { added, kept } => {
                ctx.say(format!("I gave you {added}, but couldn't take away {kept}. Please try `dropsubject {kept}`.")).await?;
            }
        }

        Ok(())
    }
}

async fn react(ctx: FormContext<'_>, emoji: char) -> Result<(), Error> {
    match ctx {
        poise::Context::Prefix(prefix) => {
            prefix.msg.react(ctx.serenity_context(), emoji).await?;
        }
        // No message to react to
        poise::Context::Application(_) => {
            ctx.say(emoji.to_string()).await?;
        }
    }

    Ok(())
}
