//! Spells and powers read from a character record.
//!
//! Each power belongs to a free-text group (usually the casting class or the
//! item that grants it) and a numeric level. Levels that cannot be read as a
//! number are kept in an explicit [`PowerLevel::Unparsed`] bucket.

use serde::Serialize;
use std::fmt;

use super::detail::{DetailPayload, HasDetail};
use crate::value_objects::leading_integer;

/// The level bucket a power sorts into.
///
/// Ordering: numeric levels ascending, then `Unparsed` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerLevel {
    Level(i32),
    Unparsed,
}

impl PowerLevel {
    /// Read a level from the integer at the start of the record text
    /// (`"3rd"` is level 3). Text with no leading integer, or one outside
    /// the `i32` range, is `Unparsed`.
    pub fn parse(text: &str) -> Self {
        leading_integer(text)
            .and_then(|level| i32::try_from(level).ok())
            .map(Self::Level)
            .unwrap_or(Self::Unparsed)
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, Self::Unparsed)
    }

    /// Heading shown above the level's powers.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "Level {}", level),
            Self::Unparsed => write!(f, "Level unknown"),
        }
    }
}

/// A single spell or power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerRecord {
    pub name: String,
    pub casting_time: String,
    pub components: String,
    pub range: String,
    pub duration: String,
    /// Stored ritual flag, read from the record's `number` field.
    pub ritual: bool,
    /// Description markup, verbatim from the record.
    pub description: String,
    pub school: String,
    pub source: String,
    pub group_label: String,
    pub level: PowerLevel,
    pub detail: Option<DetailPayload>,
}

impl PowerRecord {
    /// Whether the detail view ticks the ritual box.
    ///
    /// This follows the casting time, not [`ritual`](Self::ritual): any power
    /// with a casting time shows the box ticked. The two flags are kept apart
    /// on purpose so neither hides the other.
    pub fn shows_ritual_marker(&self) -> bool {
        !self.casting_time.is_empty()
    }
}

impl HasDetail for PowerRecord {
    fn detail(&self) -> Option<&DetailPayload> {
        self.detail.as_ref()
    }
}

#[cfg(test)]
pub(crate) fn sample_power(name: &str, group: &str, level: PowerLevel) -> PowerRecord {
    PowerRecord {
        name: name.to_string(),
        casting_time: "1 action".to_string(),
        components: "V, S".to_string(),
        range: "60 feet".to_string(),
        duration: "Instantaneous".to_string(),
        ritual: false,
        description: "<p>Bolt of fire.</p>".to_string(),
        school: "Evocation".to_string(),
        source: "Wizard".to_string(),
        group_label: group.to_string(),
        level,
        detail: None,
    }
}
