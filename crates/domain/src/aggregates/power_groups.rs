//! PowerGroups aggregate - spells and powers bucketed by group, then level.
//!
//! # Invariants
//!
//! - Every inserted power lives in exactly one (group label, level) bucket.
//! - Groups keep the order in which their label was first seen.
//! - Levels within a group are always kept in ascending order, regardless of
//!   insertion order; the `Unparsed` bucket sorts last.
//! - Powers within a level keep insertion (document) order.
//! - Buckets are created on first member and never removed.

use serde::Serialize;

use crate::entities::{PowerLevel, PowerRecord};

/// Powers that share a level within one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBucket {
    level: PowerLevel,
    powers: Vec<PowerRecord>,
}

impl LevelBucket {
    pub fn level(&self) -> PowerLevel {
        self.level
    }

    pub fn powers(&self) -> &[PowerRecord] {
        &self.powers
    }
}

/// All powers sharing a group label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerGroup {
    label: String,
    levels: Vec<LevelBucket>,
}

impl PowerGroup {
    fn new(label: String) -> Self {
        Self {
            label,
            levels: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Level buckets in ascending level order.
    pub fn levels(&self) -> &[LevelBucket] {
        &self.levels
    }

    pub fn level(&self, level: PowerLevel) -> Option<&LevelBucket> {
        self.levels
            .binary_search_by(|bucket| bucket.level.cmp(&level))
            .ok()
            .map(|index| &self.levels[index])
    }

    /// Number of powers across all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(|bucket| bucket.powers.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    fn push(&mut self, power: PowerRecord) {
        match self
            .levels
            .binary_search_by(|bucket| bucket.level.cmp(&power.level))
        {
            Ok(index) => self.levels[index].powers.push(power),
            Err(index) => self.levels.insert(
                index,
                LevelBucket {
                    level: power.level,
                    powers: vec![power],
                },
            ),
        }
    }
}

/// Two-level grouping of a character's powers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerGroups {
    groups: Vec<PowerGroup>,
}

impl PowerGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a power under its group label and level, creating buckets as needed.
    pub fn insert(&mut self, power: PowerRecord) {
        let index = match self
            .groups
            .iter()
            .position(|group| group.label == power.group_label)
        {
            Some(index) => index,
            None => {
                self.groups.push(PowerGroup::new(power.group_label.clone()));
                self.groups.len() - 1
            }
        };
        self.groups[index].push(power);
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> &[PowerGroup] {
        &self.groups
    }

    pub fn group(&self, label: &str) -> Option<&PowerGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    /// Every power in display order: groups first-seen, levels ascending,
    /// document order within a level.
    pub fn iter(&self) -> impl Iterator<Item = &PowerRecord> {
        self.groups
            .iter()
            .flat_map(|group| group.levels.iter())
            .flat_map(|bucket| bucket.powers.iter())
    }

    /// Total number of powers.
    pub fn len(&self) -> usize {
        self.groups.iter().map(PowerGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<PowerRecord> for PowerGroups {
    fn from_iter<I: IntoIterator<Item = PowerRecord>>(iter: I) -> Self {
        let mut groups = Self::new();
        for power in iter {
            groups.insert(power);
        }
        groups
    }
}
