//! Skill table.

use charsheet_domain::{format_checkbox, sort_skill_rows, SkillRow};

use crate::infrastructure::record::RecordNode;

pub fn extract_skills<N: RecordNode>(character: &N) -> Vec<SkillRow> {
    let mut rows: Vec<SkillRow> = character
        .select_children("> skilllist")
        .iter()
        .map(|skill| SkillRow {
            name: skill.select_text("name"),
            ability_abbrev: skill.select_text("stat").chars().take(3).collect(),
            proficient: format_checkbox(&skill.select_text("prof")),
            misc: skill.select_text("misc"),
            total: skill.select_text("total"),
        })
        .collect();
    sort_skill_rows(&mut rows);
    rows
}
