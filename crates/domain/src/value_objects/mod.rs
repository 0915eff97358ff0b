//! Value objects - Immutable objects defined by their attributes

mod ability;
mod modifier;

pub use ability::Ability;
pub use modifier::{format_checkbox, format_signed, leading_integer};
