//! Character sheet rendering.
//!
//! Turns a character record into a [`CharacterView`]: one extractor per
//! sheet section, the power grouping engine, and the detail payload builder
//! they share. Everything here works against
//! [`RecordNode`](crate::infrastructure::record::RecordNode), so the pipeline
//! itself cannot fail; only loading a record can.

mod abilities;
mod assembler;
mod details;
pub mod detail_builder;
mod identity;
mod lists;
mod overview;
mod powers;
mod skills;

pub use abilities::extract_abilities;
pub use assembler::{render_character, render_section};
pub use details::extract_details;
pub use identity::extract_identity;
pub use lists::{
    extract_feats, extract_features, extract_proficiencies, extract_traits, extract_weapons,
};
pub use overview::{extract_hit_points, extract_overview};
pub use powers::{extract_powers, group_entries, group_powers, read_power};
pub use skills::extract_skills;

use charsheet_domain::CharacterView;

use crate::infrastructure::record::{RecordError, XmlRecord};

/// Render a loaded record.
pub fn render_record(record: &XmlRecord) -> Result<CharacterView, RecordError> {
    let view = record.with_character(|character| render_character(character))?;
    tracing::info!(
        name = %view.name(),
        sections = view.sections().len(),
        "Rendered character sheet"
    );
    Ok(view)
}
