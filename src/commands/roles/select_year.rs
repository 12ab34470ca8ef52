use tracing::info;
use crate::{directory, FormContext, Error};
use crate::commands::feedback::Feedback;
use crate::models::labels::{is_year, YEARS};
use crate::services::{
    enrollment_policy::{select_year, year_change, YearChange},
    role_directory::RoleDirectory,
    role_editor::RoleEditor
};
use super::author_roles;

/// Set which year group you're in.
///
/// setyear <year>
#[poise::command(prefix_command, guild_only, rename = "setyear", category = "Years")]
pub async fn set_year(
    ctx: FormContext<'_>,
    #[rest] year: String
) -> Result<(), Error> {
    let directory = directory!(ctx);
    let mut member = author_roles(ctx).await?;

    assign_year(&mut member, &directory, &year).await?
        .deliver(ctx).await
}

pub async fn assign_year(member: &mut impl RoleEditor, directory: &RoleDirectory, text: &str) -> Result<Feedback, Error> {
    let requested = match select_year(text, &YEARS) {
        Some(year) => year,
        None => return Ok(Feedback::Unresolved)
    };

    let role = match directory.lookup(requested) {
        Some(role) => role,
        None => return Ok(Feedback::ConfigurationGap(requested))
    };

    // Should only ever be one, but roles handed out manually can leave several behind.
    let held = directory.held_labels(member.roles())
        .filter(|label| is_year(label))
        .collect::<Vec<_>>();

    let (remove, add) = match year_change(&held, requested) {
        YearChange::Denied(reason) => return Ok(Feedback::Denied(reason)),
        YearChange::Apply { remove, add } => (remove, add)
    };

    for old in remove {
        if let Some(old_role) = directory.lookup(old) {
            member.remove_role(old_role).await?;
        }
    }

    if add.is_some() {
        member.add_role(role).await?;
    }

    info!("Set member's year to {}", requested);

    Ok(Feedback::Success)
}
