pub mod config;
pub mod labels;
pub mod bot_module;
pub mod macros;
