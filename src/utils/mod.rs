//! Utility functions

pub mod common;
pub mod id_gen;
pub mod unique;

pub use common::*;
pub use id_gen::*;
pub use unique::{DEFAULT_MAX_ATTEMPTS, UniqueStringRegistry, generate_multiple_unique_strings};
