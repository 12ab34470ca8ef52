pub mod bot_init;
pub mod fuzzy_matcher;
pub mod role_directory;
pub mod enrollment_policy;
pub mod role_editor;
