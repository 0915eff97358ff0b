//! Overview and hit point fields.

use charsheet_domain::ValueField;

use super::detail_builder::{build_detail, flat_list, titled};
use crate::infrastructure::record::RecordNode;

pub fn extract_overview<N: RecordNode>(character: &N) -> Vec<ValueField> {
    vec![
        // Shown with a literal sign, whatever the stored value.
        ValueField::new(
            "Proficiency bonus",
            format!("+{}", character.select_text("profbonus")),
        ),
        breakdown_field(character, "Armor Class", "defenses ac total", "defenses ac"),
        breakdown_field(character, "Initiative", "initiative total", "initiative"),
        breakdown_field(character, "Speed", "speed total", "speed"),
        ValueField::new("Size", character.select_text("size")),
        perception_field(character),
        ValueField::new("Senses", character.select_text("senses")),
    ]
}

pub fn extract_hit_points<N: RecordNode>(character: &N) -> Vec<ValueField> {
    vec![breakdown_field(character, "HP", "hp total", "hp")]
}

/// A total whose detail lists every component of `breakdown_path`.
fn breakdown_field<N: RecordNode>(
    character: &N,
    caption: &str,
    value_path: &str,
    breakdown_path: &str,
) -> ValueField {
    let value = character.select_text(value_path);
    let detail = build_detail(
        titled(Some(caption), &value),
        flat_list(character, breakdown_path),
    );
    ValueField::new(caption, value).with_detail(detail)
}

fn perception_field<N: RecordNode>(character: &N) -> ValueField {
    let value = character.select_text("perception");
    let detail = build_detail(
        titled(Some("Perception modifier"), &value),
        format!(
            "Perception modifier: {}",
            character.select_text("perceptionmodifier")
        ),
    );
    ValueField::new("Passive perception", value).with_detail(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::with_character;

    const RECORD: &str = r#"<character>
        <profbonus>2</profbonus>
        <defenses><ac><armor>1</armor><dexbonus>3</dexbonus><total>14</total></ac></defenses>
        <initiative><misc>0</misc><total>3</total></initiative>
        <speed><base>30</base><total>30</total></speed>
        <size>Medium</size>
        <perception>13</perception>
        <perceptionmodifier>3</perceptionmodifier>
        <senses>Darkvision 60</senses>
        <hp><total>31</total><wounds>4</wounds></hp>
    </character>"#;

    fn field<'a>(fields: &'a [ValueField], label: &str) -> &'a ValueField {
        fields
            .iter()
            .find(|f| f.label == label)
            .unwrap_or_else(|| panic!("missing field {label}"))
    }

    #[test]
    fn overview_fields_in_sheet_order() {
        let fields = with_character(RECORD, |c| extract_overview(c));
        let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Proficiency bonus",
                "Armor Class",
                "Initiative",
                "Speed",
                "Size",
                "Passive perception",
                "Senses"
            ]
        );
    }

    #[test]
    fn proficiency_bonus_always_gets_a_plus() {
        let fields = with_character(RECORD, |c| extract_overview(c));
        assert_eq!(field(&fields, "Proficiency bonus").value, "+2");

        let fields = with_character("<character/>", |c| extract_overview(c));
        assert_eq!(field(&fields, "Proficiency bonus").value, "+");
    }

    #[test]
    fn armor_class_detail_lists_components() {
        let fields = with_character(RECORD, |c| extract_overview(c));
        let ac = field(&fields, "Armor Class");
        assert_eq!(ac.value, "14");
        let detail = ac.detail.as_ref().expect("detail");
        assert_eq!(detail.title, "Armor Class 14");
        assert_eq!(detail.body, "armor: 1<br/>dexbonus: 3<br/>total: 14");
    }

    #[test]
    fn perception_detail_shows_modifier() {
        let fields = with_character(RECORD, |c| extract_overview(c));
        let perception = field(&fields, "Passive perception");
        assert_eq!(perception.value, "13");
        let detail = perception.detail.as_ref().expect("detail");
        assert_eq!(detail.title, "Perception modifier 13");
        assert_eq!(detail.body, "Perception modifier: 3");
        assert!(field(&fields, "Senses").detail.is_none());
    }

    #[test]
    fn hit_points_detail() {
        let fields = with_character(RECORD, |c| extract_hit_points(c));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].value, "31");
        let detail = fields[0].detail.as_ref().expect("detail");
        assert_eq!(detail.title, "HP 31");
        assert_eq!(detail.body, "total: 31<br/>wounds: 4");
    }

    #[test]
    fn missing_values_are_empty() {
        let fields = with_character("<character/>", |c| extract_hit_points(c));
        assert_eq!(fields[0].value, "");
        assert_eq!(fields[0].detail.as_ref().map(|d| d.body.as_str()), Some(""));
    }
}
