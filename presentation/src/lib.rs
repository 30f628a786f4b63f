//! Presentation layer for lunch-roulette
//!
//! CLI argument definitions, console rendering of proposed groups, and the
//! interactive confirmation prompt.

pub mod cli;
pub mod output;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use prompt::InteractivePrompt;
