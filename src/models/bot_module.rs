use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A group of commands that the owner can unload and load again at runtime.
///
/// Each module maps onto the poise `category` of its commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotModule {
    Subjects,
    Years,
    Rules,
    Help
}

impl BotModule {
    pub const ALL: [BotModule; 4] = [BotModule::Subjects, BotModule::Years, BotModule::Rules, BotModule::Help];

    pub fn name(&self) -> &'static str {
        match self {
            BotModule::Subjects => "subjects",
            BotModule::Years => "years",
            BotModule::Rules => "rules",
            BotModule::Help => "help"
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            BotModule::Subjects => "Subjects",
            BotModule::Years => "Years",
            BotModule::Rules => "Rules",
            BotModule::Help => "Help"
        }
    }

    /// Commands without a category (the admin ones) never belong to a module.
    pub fn from_category(category: &str) -> Option<BotModule> {
        BotModule::ALL.into_iter().find(|m| m.category() == category)
    }
}

impl fmt::Display for BotModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a command with this category may run while `unloaded` are switched off.
pub fn command_enabled(category: Option<&str>, unloaded: &HashSet<BotModule>) -> bool {
    category
        .and_then(BotModule::from_category)
        .map_or(true, |module| !unloaded.contains(&module))
}

#[derive(Debug, thiserror::Error)]
#[error("There's no module called `{0}`. Try one of: subjects, years, rules, help.")]
pub struct UnknownModule(pub String);

impl FromStr for BotModule {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        BotModule::ALL.into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownModule(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Subjects".parse::<BotModule>().unwrap(), BotModule::Subjects);
        assert_eq!(" years ".parse::<BotModule>().unwrap(), BotModule::Years);
        assert!("music".parse::<BotModule>().is_err());
    }

    #[test]
    fn categories_round_trip() {
        for module in BotModule::ALL {
            assert_eq!(BotModule::from_category(module.category()), Some(module));
        }
        assert_eq!(BotModule::from_category("Admin"), None);
    }

    #[test]
    fn unloaded_modules_disable_their_commands() {
        let unloaded = HashSet::from([BotModule::Subjects]);
        assert!(!command_enabled(Some("Subjects"), &unloaded));
        assert!(command_enabled(Some("Years"), &unloaded));
        assert!(command_enabled(None, &unloaded));
    }
}
