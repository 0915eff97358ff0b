//! Description section.

use charsheet_domain::ValueField;

use crate::infrastructure::record::RecordNode;

/// Record tag and label of each description field, in sheet order.
const DETAIL_FIELDS: [(&str, &str); 13] = [
    ("gender", "Gender"),
    ("age", "Age"),
    ("height", "Height"),
    ("weight", "Weight"),
    ("size", "Size"),
    ("alignment", "Alignment"),
    ("deity", "Deity"),
    ("personalitytraits", "Personality traits"),
    ("ideals", "Ideals"),
    ("bonds", "Bonds"),
    ("flaws", "Flaws"),
    ("appearance", "Appearance"),
    ("notes", "Notes"),
];

pub fn extract_details<N: RecordNode>(character: &N) -> Vec<ValueField> {
    DETAIL_FIELDS
        .iter()
        .map(|(tag, label)| ValueField::new(*label, character.select_text(tag)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_fixtures::with_character;

    #[test]
    fn all_fields_present_even_when_missing() {
        let xml = r#"<character><gender>Female</gender><ideals>Knowledge.</ideals></character>"#;
        let fields = with_character(xml, |c| extract_details(c));

        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0].label, "Gender");
        assert_eq!(fields[0].value, "Female");
        assert_eq!(fields[8].label, "Ideals");
        assert_eq!(fields[8].value, "Knowledge.");
        assert_eq!(fields[12].label, "Notes");
        assert_eq!(fields[12].value, "");
        assert!(fields.iter().all(|f| f.detail.is_none()));
    }
}
