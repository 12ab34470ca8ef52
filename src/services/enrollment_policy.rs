//! Decides whether a member may add, drop or swap a subject, and which year
//! role a `setyear` request refers to.
//!
//! Nothing here touches Discord. The command handlers gather the member's
//! roles, ask for a [`Decision`] and carry out the mutation themselves.

use std::collections::HashSet;
use serde::Deserialize;
use serenity::model::id::RoleId;
use crate::models::labels::{is_base_subject, Label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EnrollmentLimits {
    pub min_subjects: usize,
    pub max_subjects: usize
}

impl Default for EnrollmentLimits {
    fn default() -> Self {
        EnrollmentLimits { min_subjects: 3, max_subjects: 5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Denied(DenyReason)
}

/// The message of each reason is what the member gets told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DenyReason {
    #[error("You've already got that role.")]
    AlreadyEnrolled,
    #[error("You can't take more than {max} subjects. Drop one first, or use changesubject.")]
    QuotaExceeded { max: usize },
    #[error("You need to keep at least {min} subjects.")]
    QuotaUnderflow { min: usize },
    #[error("You aren't taking that subject.")]
    NotEnrolled,
    #[error("That role hasn't been set up on this server.")]
    RoleUnresolved
}

/// Everything `can_change` needs to know about a swap from one subject to another.
#[derive(Debug, Clone, Copy)]
pub struct SubjectChange {
    pub from: Label,
    pub to: Label,
    pub from_role: Option<RoleId>,
    pub to_role: Option<RoleId>,
    pub holds_from: bool,
    pub holds_to: bool,
    pub subject_count: usize
}

impl EnrollmentLimits {
    pub fn can_add(&self, subject_count: usize, already_held: bool, role: Option<RoleId>) -> Decision {
        if already_held {
            return Decision::Denied(DenyReason::AlreadyEnrolled);
        }
        if subject_count >= self.max_subjects {
            return Decision::Denied(DenyReason::QuotaExceeded { max: self.max_subjects });
        }
        if role.is_none() {
            return Decision::Denied(DenyReason::RoleUnresolved);
        }

        Decision::Approved
    }

    /// The floor is checked against the count before the drop: a member on
    /// exactly `min_subjects` may still drop one.
    pub fn can_drop(&self, held: bool, subject_count: usize) -> Decision {
        if !held {
            return Decision::Denied(DenyReason::NotEnrolled);
        }
        if subject_count < self.min_subjects {
            return Decision::Denied(DenyReason::QuotaUnderflow { min: self.min_subjects });
        }

        Decision::Approved
    }

    pub fn can_change(&self, change: &SubjectChange) -> Decision {
        if change.from_role.is_none() || change.to_role.is_none() {
            return Decision::Denied(DenyReason::RoleUnresolved);
        }
        if !change.holds_from {
            return Decision::Denied(DenyReason::NotEnrolled);
        }
        if change.holds_to {
            return Decision::Denied(DenyReason::AlreadyEnrolled);
        }

        // A swap only moves the count when it crosses between base and non-credit labels.
        match (is_base_subject(change.from), is_base_subject(change.to)) {
            (true, false) => self.can_drop(true, change.subject_count),
            (false, true) => self.can_add(change.subject_count, false, change.to_role),
            _ => Decision::Approved
        }
    }
}

/// Number of distinct base subjects among a member's role names.
pub fn count_subjects<'a>(role_names: impl IntoIterator<Item = &'a str>, base_subjects: &[Label]) -> usize {
    role_names.into_iter()
        .filter(|name| base_subjects.iter().any(|base| base == name))
        .collect::<HashSet<_>>()
        .len()
}

/// Picks the year whose number appears anywhere in `text`, e.g. "Year 13" for "I'm in 13".
pub fn select_year(text: &str, years: &[Label]) -> Option<Label> {
    years.iter()
        .copied()
        .find(|year| {
            let number = year.rsplit(' ').next().unwrap_or(year);
            text.contains(number)
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearChange {
    /// Remove every stale year, then add the requested one unless it is already held.
    Apply { remove: Vec<Label>, add: Option<Label> },
    Denied(DenyReason)
}

/// Members keep at most one year role, so any other held year is swapped out.
pub fn year_change(held: &[Label], requested: Label) -> YearChange {
    let remove = held.iter()
        .copied()
        .filter(|year| *year != requested)
        .collect::<Vec<_>>();
    let already_held = held.iter().any(|year| *year == requested);

    match (already_held, remove.is_empty()) {
        (true, true) => YearChange::Denied(DenyReason::AlreadyEnrolled),
        (true, false) => YearChange::Apply { remove, add: None },
        (false, _) => YearChange::Apply { remove, add: Some(requested) }
    }
}
