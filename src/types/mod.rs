//! Core type definitions used across the crate.

mod enums;

pub use enums::*;
