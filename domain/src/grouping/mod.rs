//! Grouping engine: seeded shuffle, dealing strategies, lottery mode

pub mod engine;
pub mod entities;
pub mod strategy;
