//! Configuration file handling

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, RegionSection, RouletteSection, SlackSection};
pub use loader::ConfigLoader;
