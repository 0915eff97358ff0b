//! View assembler.
//!
//! Runs each section extractor once, in sheet order, and collects the
//! results into a [`CharacterView`]. Extraction never fails: fields the
//! record lacks come out empty.

use charsheet_domain::{CharacterView, Section, SectionContent, SectionKind};

use super::abilities::extract_abilities;
use super::details::extract_details;
use super::identity::extract_identity;
use super::lists::{
    extract_feats, extract_features, extract_proficiencies, extract_traits, extract_weapons,
};
use super::overview::{extract_hit_points, extract_overview};
use super::powers::extract_powers;
use super::skills::extract_skills;
use crate::infrastructure::record::RecordNode;

/// Build the whole sheet for one `<character>` node.
pub fn render_character<N: RecordNode>(character: &N) -> CharacterView {
    let sections = SectionKind::ORDER
        .iter()
        .map(|kind| render_section(character, *kind))
        .collect();
    CharacterView::new(sections)
}

/// Build a single section.
pub fn render_section<N: RecordNode>(character: &N, kind: SectionKind) -> Section {
    let content = match kind {
        SectionKind::Identity => SectionContent::Identity(extract_identity(character)),
        SectionKind::Overview => SectionContent::Fields(extract_overview(character)),
        SectionKind::HitPoints => SectionContent::Fields(extract_hit_points(character)),
        SectionKind::Abilities => SectionContent::Abilities(extract_abilities(character)),
        SectionKind::Skills => SectionContent::Skills(extract_skills(character)),
        SectionKind::Proficiencies => {
            SectionContent::Proficiencies(extract_proficiencies(character))
        }
        SectionKind::Traits => SectionContent::List(extract_traits(character)),
        SectionKind::Features => SectionContent::List(extract_features(character)),
        SectionKind::Feats => SectionContent::List(extract_feats(character)),
        SectionKind::Weapons => SectionContent::List(extract_weapons(character)),
        SectionKind::Powers => SectionContent::Powers(extract_powers(character)),
        SectionKind::Details => SectionContent::Fields(extract_details(character)),
    };
    tracing::debug!(section = %kind, empty = content.is_empty(), "Assembled section");
    Section::new(kind, content)
}
