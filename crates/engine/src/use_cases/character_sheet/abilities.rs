//! Ability score table.

use charsheet_domain::{format_checkbox, format_signed, Ability, AbilityRow};

use super::detail_builder::ability_save_detail;
use crate::infrastructure::record::RecordNode;

/// Six rows in fixed order, whether or not the record has the abilities.
pub fn extract_abilities<N: RecordNode>(character: &N) -> Vec<AbilityRow> {
    Ability::ALL
        .iter()
        .map(|ability| ability_row(character, *ability))
        .collect()
}

fn ability_row<N: RecordNode>(character: &N, ability: Ability) -> AbilityRow {
    let base = format!("abilities > {}", ability.tag());
    let field = |name: &str| character.select_text(&format!("{base} > {name}"));

    let score_text = field("score");
    let save_modifier = format_signed(&field("saveModifier"));
    let save_detail = ability_save_detail(&score_text, &save_modifier);

    AbilityRow {
        ability,
        score: score_text.trim().parse().ok(),
        modifier: format_signed(&field("bonus")),
        save_modifier,
        save_proficient: format_checkbox(&field("saveProf")),
        save_detail,
    }
}
