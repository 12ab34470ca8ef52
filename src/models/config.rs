use serde::Deserialize;
use crate::services::enrollment_policy::EnrollmentLimits;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub token: String,
    pub cmd_prefix: String,
    pub guild_id: u64,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default = "default_max_fuzzy_distance")]
    pub max_fuzzy_distance: usize,
    #[serde(default)]
    pub enrollment: EnrollmentLimits
}

/// One entry of the rules embed; kept as a list so the embed shows them in order.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub name: String,
    pub description: String
}

fn default_max_fuzzy_distance() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: Config = serde_json::from_str(r##"{
            "token": "abc",
            "cmd_prefix": "#",
            "guild_id": 1234
        }"##).unwrap();

        assert_eq!(config.guild_id, 1234);
        assert_eq!(config.max_fuzzy_distance, 8);
        assert_eq!(config.enrollment.min_subjects, 3);
        assert_eq!(config.enrollment.max_subjects, 5);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn rules_keep_their_order() {
        let config: Config = serde_json::from_str(r##"{
            "token": "abc",
            "cmd_prefix": "#",
            "guild_id": 1,
            "max_fuzzy_distance": 5,
            "enrollment": { "min_subjects": 2, "max_subjects": 4 },
            "rules": [
                { "name": "1. Be nice", "description": "No bullying." },
                { "name": "2. No spam", "description": "Keep it on topic." }
            ]
        }"##).unwrap();

        let names: Vec<_> = config.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["1. Be nice", "2. No spam"]);
        assert_eq!(config.max_fuzzy_distance, 5);
        assert_eq!(config.enrollment.max_subjects, 4);
    }
}
