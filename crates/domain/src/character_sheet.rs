//! Character View Model
//!
//! The render-ready output of reading a character record: an ordered list of
//! sections, each holding the rows, lists or groups for one part of the sheet.
//!
//! # Design Philosophy
//!
//! - **Fixed layout**: every sheet has every section, in the same order. An
//!   empty section holds an empty table or list rather than being dropped.
//! - **No markup decisions**: items carry plain values and detail payloads; a
//!   rendering layer decides how to draw them.
//! - **Built once**: a view is assembled in one pass and not mutated after.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::aggregates::PowerGroups;
use crate::entities::{AbilityRow, DetailPayload, HasDetail, ListItem, SkillRow, ValueField};
use crate::error::DomainError;

// =============================================================================
// Sections
// =============================================================================

/// Identifies a section of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Name, race, classes, background
    Identity,
    /// Proficiency bonus, AC, initiative, speed, size, perception, senses
    Overview,
    HitPoints,
    Abilities,
    Skills,
    /// Proficiencies and languages
    Proficiencies,
    Traits,
    Features,
    Feats,
    Weapons,
    /// Spells and powers, grouped
    Powers,
    /// Physical description and personality
    Details,
}

impl SectionKind {
    /// Sheet order.
    pub const ORDER: [SectionKind; 12] = [
        Self::Identity,
        Self::Overview,
        Self::HitPoints,
        Self::Abilities,
        Self::Skills,
        Self::Proficiencies,
        Self::Traits,
        Self::Features,
        Self::Feats,
        Self::Weapons,
        Self::Powers,
        Self::Details,
    ];

    /// Stable identifier (e.g., "hit_points").
    pub fn id(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Overview => "overview",
            Self::HitPoints => "hit_points",
            Self::Abilities => "abilities",
            Self::Skills => "skills",
            Self::Proficiencies => "proficiencies",
            Self::Traits => "traits",
            Self::Features => "features",
            Self::Feats => "feats",
            Self::Weapons => "weapons",
            Self::Powers => "powers",
            Self::Details => "details",
        }
    }

    /// Section heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Overview => "Overview",
            Self::HitPoints => "Hit Points",
            Self::Abilities => "Abilities",
            Self::Skills => "Skills",
            Self::Proficiencies => "Proficiencies",
            Self::Traits => "Traits",
            Self::Features => "Features",
            Self::Feats => "Feats",
            Self::Weapons => "Weapons",
            Self::Powers => "Spells and powers",
            Self::Details => "Description",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for SectionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ORDER
            .into_iter()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| DomainError::parse(format!("Unknown section: {}", s)))
    }
}

/// Who the character is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityBlock {
    pub name: String,
    pub race: ValueField,
    /// Classes in document order.
    pub classes: Vec<ListItem>,
    pub background: ValueField,
}

/// Proficiencies and languages share one section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProficiencyBlock {
    pub proficiencies: Vec<ListItem>,
    pub languages: Vec<ListItem>,
}

/// What a section holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionContent {
    Identity(IdentityBlock),
    Fields(Vec<ValueField>),
    Abilities(Vec<AbilityRow>),
    Skills(Vec<SkillRow>),
    Proficiencies(ProficiencyBlock),
    List(Vec<ListItem>),
    Powers(PowerGroups),
}

impl SectionContent {
    /// Whether the section has nothing to show. Empty sections are still
    /// part of the view.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Identity(_) => false,
            Self::Fields(fields) => fields.is_empty(),
            Self::Abilities(rows) => rows.is_empty(),
            Self::Skills(rows) => rows.is_empty(),
            Self::Proficiencies(block) => {
                block.proficiencies.is_empty() && block.languages.is_empty()
            }
            Self::List(items) => items.is_empty(),
            Self::Powers(groups) => groups.is_empty(),
        }
    }

    /// Every detail payload in this section, in display order.
    pub fn details(&self) -> Vec<&DetailPayload> {
        fn collect<'a, T: HasDetail + 'a>(
            items: impl IntoIterator<Item = &'a T>,
        ) -> Vec<&'a DetailPayload> {
            items.into_iter().filter_map(HasDetail::detail).collect()
        }

        match self {
            Self::Identity(block) => std::iter::once(&block.race)
                .filter_map(HasDetail::detail)
                .chain(collect(&block.classes))
                .chain(block.background.detail())
                .collect(),
            Self::Fields(fields) => collect(fields),
            Self::Abilities(rows) => collect(rows),
            Self::Skills(_) => Vec::new(),
            Self::Proficiencies(block) => collect(block.proficiencies.iter().chain(&block.languages)),
            Self::List(items) => collect(items),
            Self::Powers(groups) => groups.iter().filter_map(HasDetail::detail).collect(),
        }
    }
}

/// One titled section of the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub content: SectionContent,
}

impl Section {
    pub fn new(kind: SectionKind, content: SectionContent) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            content,
        }
    }
}

// =============================================================================
// Character View
// =============================================================================

/// A fully assembled character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterView {
    sections: Vec<Section>,
}

impl CharacterView {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Sections in sheet order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// The character's name, empty when the record has none.
    pub fn name(&self) -> &str {
        self.sections
            .iter()
            .find_map(|section| match &section.content {
                SectionContent::Identity(block) => Some(block.name.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Every detail payload on the sheet, in display order.
    pub fn details(&self) -> Vec<&DetailPayload> {
        self.sections
            .iter()
            .flat_map(|section| section.content.details())
            .collect()
    }
}
