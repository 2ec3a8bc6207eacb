//! Small, dependency-light helpers shared by the routegen crates.

pub mod case;
