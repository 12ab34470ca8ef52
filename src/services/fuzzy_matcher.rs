//! Maps free text onto the closest known label.
//!
//! The search is a single pass over the vocabulary keeping the entry with the
//! smallest Levenshtein distance. Only a strictly smaller distance replaces the
//! current best, so ties resolve to whichever label comes first in the
//! vocabulary. Callers rely on that order being stable.

use tracing::debug;
use crate::models::labels::{Label, EPQ, SUBJECTS};

/// Finds the vocabulary entry closest to `query`.
///
/// Returns `None` when the best distance is not strictly below `max_distance`.
/// The vocabulary is expected to be non-empty; an empty one never matches.
pub fn best_match(query: &str, vocabulary: &[Label], max_distance: usize) -> Option<Label> {
    let best = vocabulary.iter().fold(None, |best: Option<(Label, usize)>, &label| {
        let distance = strsim::levenshtein(query, label);
        match best {
            Some((_, minimum)) if distance >= minimum => best,
            _ => Some((label, distance))
        }
    });

    match best {
        Some((label, distance)) if distance < max_distance => {
            debug!("Matched {:?} to {} at distance {}", query, label, distance);
            Some(label)
        }
        _ => None
    }
}

/// Resolves a subject name typed by a member.
///
/// Case-sensitive distance puts "epq" as far from "EPQ" as from any other
/// three letter label, so the literal is special-cased before the search.
pub fn match_subject(query: &str, max_distance: usize) -> Option<Label> {
    if query == "epq" {
        return Some(EPQ);
    }

    best_match(query, &SUBJECTS, max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_entries_match_themselves() {
        for label in SUBJECTS {
            assert_eq!(match_subject(label, 8), Some(label));
        }
    }

    #[test]
    fn close_typo_resolves() {
        assert_eq!(best_match("mathz", &["Maths", "Physics"], 4), Some("Maths"));
        assert_eq!(match_subject("Chemestry", 8), Some("Chemistry"));
        assert_eq!(match_subject("Computer Sceince", 8), Some("Computer Science"));
    }

    #[test]
    fn cutoff_is_exclusive() {
        // "Mat" is 2 edits away from "Maths".
        assert_eq!(best_match("Mat", &["Maths"], 3), Some("Maths"));
        assert_eq!(best_match("Mat", &["Maths"], 2), None);
    }

    #[test]
    fn gibberish_is_rejected() {
        assert_eq!(match_subject("qwertyuiopasdfghjklzxcvbnm", 8), None);
        assert_eq!(best_match("zzzzzzzz", &["Maths", "Physics"], 4), None);
    }

    #[test]
    fn ties_keep_the_earliest_entry() {
        assert_eq!(best_match("Bat", &["Cat", "Hat"], 4), Some("Cat"));
        assert_eq!(best_match("Bat", &["Hat", "Cat"], 4), Some("Hat"));
    }

    #[test]
    fn empty_query_measures_against_lengths() {
        assert_eq!(best_match("", &["Physics", "Art"], 4), Some("Art"));
        assert_eq!(best_match("", &["Physics", "Chemistry"], 4), None);
    }

    #[test]
    fn empty_vocabulary_never_matches() {
        assert_eq!(best_match("Maths", &[], 8), None);
    }

    #[test]
    fn epq_literal_short_circuits() {
        assert_eq!(match_subject("epq", 0), Some(EPQ));
        assert_eq!(match_subject("epq", 1), Some(EPQ));
        // Without the literal, "epq" is no closer to "EPQ" than to "CIE".
        assert_eq!(best_match("epq", &SUBJECTS, 8), Some("CIE"));
    }
}
