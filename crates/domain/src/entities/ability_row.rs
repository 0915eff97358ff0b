//! Ability table rows.

use serde::Serialize;

use super::detail::{DetailPayload, HasDetail};
use crate::value_objects::Ability;

/// One row of the ability table.
///
/// `modifier` and `save_modifier` are already formatted for display (see
/// [`format_signed`](crate::value_objects::format_signed)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityRow {
    pub ability: Ability,
    /// `None` when the record's score is missing or not a number.
    pub score: Option<i32>,
    pub modifier: String,
    pub save_modifier: String,
    pub save_proficient: bool,
    pub save_detail: DetailPayload,
}

impl AbilityRow {
    /// The record tag the row was read from (e.g., "strength").
    pub fn name(&self) -> &'static str {
        self.ability.tag()
    }

    /// The score as shown on the sheet; empty when the record has none.
    pub fn score_text(&self) -> String {
        self.score.map(|score| score.to_string()).unwrap_or_default()
    }
}

impl HasDetail for AbilityRow {
    fn detail(&self) -> Option<&DetailPayload> {
        Some(&self.save_detail)
    }
}
