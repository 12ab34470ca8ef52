pub mod help;
pub mod rules;

pub use help::*;
pub use rules::*;
