//! Fixed role vocabularies for the server.
//!
//! Order matters: the fuzzy matcher keeps the earliest entry on ties, so
//! reordering these lists changes which subject an ambiguous query resolves to.

pub type Label = &'static str;

pub const YEARS: [Label; 3] = ["Year 11", "Year 12", "Year 13"];

pub const SUBJECTS: [Label; 28] = [
    "CIE",
    "Art",
    "Biology",
    "Business",
    "Chemistry",
    "Computer Science",
    "Drama",
    "Economics",
    "Engineering",
    "English",
    "EPQ",
    "French",
    "Film & Media",
    "Further Maths",
    "Geography",
    "German",
    "History",
    "ICT",
    "Maths",
    "Music",
    "Philosophy",
    "Physics",
    "Politics",
    "Product Design",
    "Psychology",
    "Sociology",
    "Spanish",
    "Weeb"
];

pub const EPQ: Label = "EPQ";

/// Extension and interest roles. Members can hold these, but they don't count towards the quota.
pub const NON_CREDIT: [Label; 3] = ["CIE", "EPQ", "Weeb"];

fn contains(vocabulary: &[Label], label: &str) -> bool {
    vocabulary.iter().any(|entry| *entry == label)
}

pub fn is_base_subject(label: &str) -> bool {
    contains(&SUBJECTS, label) && !contains(&NON_CREDIT, label)
}

pub fn base_subjects() -> Vec<Label> {
    SUBJECTS.iter().copied().filter(|s| is_base_subject(s)).collect()
}

pub fn is_year(label: &str) -> bool {
    contains(&YEARS, label)
}

/// Every label the role directory needs a role for.
pub fn all_labels() -> Vec<Label> {
    SUBJECTS.iter().chain(YEARS.iter()).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_credit_labels_are_not_base() {
        let base = base_subjects();
        assert_eq!(base.len(), SUBJECTS.len() - NON_CREDIT.len());
        for label in NON_CREDIT {
            assert!(SUBJECTS.contains(&label));
            assert!(!base.contains(&label));
        }
        assert!(is_base_subject("Maths"));
        assert!(!is_base_subject("Year 12"));
    }

    #[test]
    fn directory_labels_cover_both_vocabularies() {
        let labels = all_labels();
        assert_eq!(labels.len(), SUBJECTS.len() + YEARS.len());
        assert!(labels.contains(&"Year 13"));
        assert!(labels.contains(&EPQ));
    }
}
