//! # Charsheet Domain
//!
//! Pure types for a rendered character sheet. Nothing here reads records or
//! performs I/O; the engine crate fills these types in.
//!
//! - `value_objects` - abilities, modifier and checkbox formatting
//! - `entities` - rows and items (abilities, skills, list items, powers, detail payloads)
//! - `aggregates` - power grouping with its ordering invariants
//! - `character_sheet` - the assembled view model

pub mod aggregates;
pub mod character_sheet;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use aggregates::{LevelBucket, PowerGroup, PowerGroups};
pub use character_sheet::{
    CharacterView, IdentityBlock, ProficiencyBlock, Section, SectionContent, SectionKind,
};
pub use entities::{
    sort_skill_rows, AbilityRow, DetailPayload, HasDetail, ListItem, PowerLevel, PowerRecord,
    SkillRow, ValueField,
};
pub use error::DomainError;
pub use value_objects::{format_checkbox, format_signed, leading_integer, Ability};
