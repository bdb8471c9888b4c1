//! Subcommand implementations. Each renders its output as a string.

pub(crate) mod fees;
pub(crate) mod isthmus;
pub(crate) mod system_config;
