//! Core content layer
//!
//! Data structures, the project list derivation and the static work history.

pub mod data;
pub mod projects;
pub mod traits;
pub mod validate;
pub mod work;
