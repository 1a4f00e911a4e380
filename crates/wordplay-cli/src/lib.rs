//! CLI library components for the wordplay game.

pub mod logging;
pub mod play;
pub mod report;
pub mod setup;
