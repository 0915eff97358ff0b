//! Use cases - sheet rendering orchestration.
//!
//! Use cases read a record through the infrastructure layer and build
//! domain view models from it.

pub mod character_sheet;

pub use character_sheet::{render_character, render_record};
