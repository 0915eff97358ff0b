//! Sheet entities - the rows and items a character view is made of

mod ability_row;
mod detail;
mod list_item;
mod power;
mod skill_row;

pub use ability_row::AbilityRow;
pub use detail::{DetailPayload, HasDetail};
pub use list_item::{ListItem, ValueField};
pub use power::{PowerLevel, PowerRecord};
pub use skill_row::{sort_skill_rows, SkillRow};

#[cfg(test)]
pub(crate) use power::sample_power;
