//! Dependency-light helpers shared across the linguadb crates.

pub mod case;
pub mod hash;
