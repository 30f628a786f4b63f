//! Core domain types shared across modules

pub mod error;
pub mod identity;
