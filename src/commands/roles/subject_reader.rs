use tracing::{error, info};
use crate::{directory, FormContext, Error};
use crate::commands::feedback::Feedback;
use crate::models::labels::{base_subjects, Label};
use crate::services::{
    enrollment_policy::{count_subjects, Decision, DenyReason, EnrollmentLimits, SubjectChange},
    fuzzy_matcher::match_subject,
    role_directory::RoleDirectory,
    role_editor::RoleEditor
};
use super::author_roles;

const CHANGE_USAGE: &str = "Please give exactly two subjects separated by a comma, like `changesubject Physics, Chemistry`.";

/// Add a subject to your roles.
///
/// addsubject <subject>
#[poise::command(prefix_command, guild_only, rename = "addsubject", category = "Subjects")]
pub async fn add_subject(
    ctx: FormContext<'_>,
    #[rest] subject: String
) -> Result<(), Error> {
    let directory = directory!(ctx);
    let config = &ctx.data().config;
    let mut member = author_roles(ctx).await?;

    enrol(&mut member, &directory, &config.enrollment, &subject, config.max_fuzzy_distance).await?
        .deliver(ctx).await
}

/// Remove a subject from your roles.
///
/// dropsubject <subject>
#[poise::command(prefix_command, guild_only, rename = "dropsubject", category = "Subjects")]
pub async fn drop_subject(
    ctx: FormContext<'_>,
    #[rest] subject: String
) -> Result<(), Error> {
    let directory = directory!(ctx);
    let config = &ctx.data().config;
    let mut member = author_roles(ctx).await?;

    unenrol(&mut member, &directory, &config.enrollment, &subject, config.max_fuzzy_distance).await?
        .deliver(ctx).await
}

/// Swap one of your subjects for another.
///
/// changesubject <old subject>, <new subject>
#[poise::command(prefix_command, guild_only, rename = "changesubject", category = "Subjects")]
pub async fn change_subject(
    ctx: FormContext<'_>,
    #[rest] subjects: String
) -> Result<(), Error> {
    let directory = directory!(ctx);
    let config = &ctx.data().config;
    let mut member = author_roles(ctx).await?;

    change(&mut member, &directory, &config.enrollment, &subjects, config.max_fuzzy_distance).await?
        .deliver(ctx).await
}

fn subject_count(directory: &RoleDirectory, member: &impl RoleEditor) -> usize {
    count_subjects(directory.held_labels(member.roles()), &base_subjects())
}

pub async fn enrol(
    member: &mut impl RoleEditor,
    directory: &RoleDirectory,
    limits: &EnrollmentLimits,
    query: &str,
    max_distance: usize
) -> Result<Feedback, Error> {
    let label = match match_subject(query, max_distance) {
        Some(label) => label,
        None => return Ok(Feedback::Unresolved)
    };

    let role = directory.lookup(label);
    let held = directory.holds(member.roles(), label);
    let count = subject_count(directory, &*member);

    match (limits.can_add(count, held, role), role) {
        (Decision::Approved, Some(role)) => {
            member.add_role(role).await?;
            info!("Enrolled member in {}", label);
            Ok(Feedback::Success)
        }
        (Decision::Approved, None) | (Decision::Denied(DenyReason::RoleUnresolved), _) => Ok(Feedback::ConfigurationGap(label)),
        (Decision::Denied(reason), _) => Ok(Feedback::Denied(reason))
    }
}

pub async fn unenrol(
    member: &mut impl RoleEditor,
    directory: &RoleDirectory,
    limits: &EnrollmentLimits,
    query: &str,
    max_distance: usize
) -> Result<Feedback, Error> {
    let label = match match_subject(query, max_distance) {
        Some(label) => label,
        None => return Ok(Feedback::Unresolved)
    };

    let role = match directory.lookup(label) {
        Some(role) => role,
        None => return Ok(Feedback::ConfigurationGap(label))
    };

    let held = member.roles().contains(&role);
    match limits.can_drop(held, subject_count(directory, &*member)) {
        Decision::Approved => {
            member.remove_role(role).await?;
            info!("Unenrolled member from {}", label);
            Ok(Feedback::Success)
        }
        Decision::Denied(reason) => Ok(Feedback::Denied(reason))
    }
}

/// Adds the new subject before dropping the old one, so a failure part way
/// leaves the member with both roles rather than neither.
pub async fn change(
    member: &mut impl RoleEditor,
    directory: &RoleDirectory,
    limits: &EnrollmentLimits,
    args: &str,
    max_distance: usize
) -> Result<Feedback, Error> {
    let parts = args.split(',').map(str::trim).collect::<Vec<_>>();
    let (from_query, to_query) = match parts.as_slice() {
        [from, to] => (*from, *to),
        _ => return Ok(Feedback::Malformed(CHANGE_USAGE))
    };

    let (from, to): (Label, Label) = match (match_subject(from_query, max_distance), match_subject(to_query, max_distance)) {
        (Some(from), Some(to)) => (from, to),
        _ => return Ok(Feedback::Unresolved)
    };

    let request = SubjectChange {
        from,
        to,
        from_role: directory.lookup(from),
        to_role: directory.lookup(to),
        holds_from: directory.holds(member.roles(), from),
        holds_to: directory.holds(member.roles(), to),
        subject_count: subject_count(directory, &*member)
    };

    match (limits.can_change(&request), request.from_role, request.to_role) {
        (Decision::Approved, Some(from_role), Some(to_role)) => {
            member.add_role(to_role).await?;

            if let Err(ex) = member.remove_role(from_role).await {
                error!("Added {} but failed to remove {} while changing subjects: {}", to, from, ex);
                return Ok(Feedback::PartialChange { added: to, kept: from });
            }

            info!("Changed member's subject from {} to {}", from, to);
            Ok(Feedback::Success)
        }
        (Decision::Approved, None, _) => Ok(Feedback::ConfigurationGap(from)),
        (Decision::Approved, _, None) => Ok(Feedback::ConfigurationGap(to)),
        (Decision::Denied(DenyReason::RoleUnresolved), from_role, _) => {
            Ok(Feedback::ConfigurationGap(if from_role.is_none() { from } else { to }))
        }
        (Decision::Denied(reason), _, _) => Ok(Feedback::Denied(reason))
    }
}
