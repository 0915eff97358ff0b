//! Skill table rows.
//!
//! The skill table is ordered by each row's rendered row text rather than by
//! document order or by name alone. [`SkillRow::row_text`] reproduces that
//! text exactly so the ordering stays stable: rows sort on skill name first,
//! then on the ability column, proficiency, misc and total, with the table
//! cell delimiters taking part in the comparison.

use serde::Serialize;

/// One row of the skill table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRow {
    pub name: String,
    /// First three characters of the governing ability (e.g., "dex").
    pub ability_abbrev: String,
    pub proficient: bool,
    pub misc: String,
    pub total: String,
}

impl SkillRow {
    /// The row as the sheet's table markup renders it. Used as the sort key.
    pub fn row_text(&self) -> String {
        let checked = if self.proficient { "checked" } else { "" };
        format!(
            "<tr>\n  <td>{}</td>\n  <td>{}</td>\n  <td><input type=\"checkbox\" {} disabled /></td>\n  <td>{}</td>\n  <td>{}</td>\n</tr>",
            self.name, self.ability_abbrev, checked, self.misc, self.total
        )
    }
}

/// Sort rows into sheet order (see module docs).
pub fn sort_skill_rows(rows: &mut [SkillRow]) {
    rows.sort_by_cached_key(SkillRow::row_text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, stat: &str, proficient: bool) -> SkillRow {
        SkillRow {
            name: name.to_string(),
            ability_abbrev: stat.to_string(),
            proficient,
            misc: "0".to_string(),
            total: "2".to_string(),
        }
    }

    #[test]
    fn row_text_matches_table_markup() {
        let row = skill("Stealth", "dex", true);
        assert_eq!(
            row.row_text(),
            "<tr>\n  <td>Stealth</td>\n  <td>dex</td>\n  <td><input type=\"checkbox\" checked disabled /></td>\n  <td>0</td>\n  <td>2</td>\n</tr>"
        );
    }

    #[test]
    fn unchecked_rows_keep_the_empty_attribute_slot() {
        let row = skill("Arcana", "int", false);
        assert!(row.row_text().contains("<input type=\"checkbox\"  disabled />"));
    }

    #[test]
    fn sorts_by_rendered_text_not_document_order() {
        let mut rows = vec![skill("Stealth", "dex", false), skill("Acrobatics", "dex", false)];
        sort_skill_rows(&mut rows);
        assert_eq!(rows[0].name, "Acrobatics");
        assert_eq!(rows[1].name, "Stealth");
    }

    #[test]
    fn cell_delimiter_takes_part_in_ordering() {
        // '<' sorts after ' ', so a longer name sharing a prefix sorts first.
        let mut rows = vec![skill("Lore", "int", false), skill("Lore Arcane", "int", false)];
        sort_skill_rows(&mut rows);
        assert_eq!(rows[0].name, "Lore Arcane");
        assert_eq!(rows[1].name, "Lore");
    }

    #[test]
    fn ties_on_name_fall_through_to_later_cells() {
        let mut rows = vec![skill("Lore", "wis", false), skill("Lore", "int", false)];
        sort_skill_rows(&mut rows);
        assert_eq!(rows[0].ability_abbrev, "int");
    }
}
