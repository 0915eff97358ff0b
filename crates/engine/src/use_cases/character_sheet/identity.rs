//! Identity section: name, race, classes and background.

use charsheet_domain::{IdentityBlock, ListItem, ValueField};

use super::detail_builder::{build_detail, class_detail, titled};
use crate::infrastructure::record::RecordNode;

pub fn extract_identity<N: RecordNode>(character: &N) -> IdentityBlock {
    IdentityBlock {
        name: character.select_text("> name"),
        race: linked_field(character, "Race", "race", "racelink recordname"),
        classes: character
            .select_children("classes")
            .iter()
            .map(class_item)
            .collect(),
        background: linked_field(character, "Background", "background", "backgroundlink recordname"),
    }
}

/// A value whose detail body is the text of its record link.
fn linked_field<N: RecordNode>(character: &N, label: &str, path: &str, link_path: &str) -> ValueField {
    let value = character.select_text(path);
    let detail = build_detail(titled(None, &value), character.select_text(link_path));
    ValueField::new(label, value).with_detail(detail)
}

fn class_item<N: RecordNode>(class: &N) -> ListItem {
    let label = format!("{} ({})", class.select_text("name"), class.select_text("level"));
    let detail = class_detail(
        &label,
        &class.select_text("hddie"),
        &class.select_text("shortcut recordname"),
    );
    ListItem::with_detail(label, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::with_character;

    #[test]
    fn reads_name_race_and_background() {
        let xml = r#"<character>
            <name>Ilsa</name>
            <race>High Elf</race>
            <racelink><class>reference_race</class><recordname>reference.race.elf</recordname></racelink>
            <background>Sage</background>
            <backgroundlink><recordname>reference.background.sage</recordname></backgroundlink>
        </character>"#;
        let identity = with_character(xml, |c| extract_identity(c));

        assert_eq!(identity.name, "Ilsa");
        assert_eq!(identity.race.value, "High Elf");
        let race_detail = identity.race.detail.expect("race detail");
        assert_eq!(race_detail.title, "High Elf");
        assert_eq!(race_detail.body, "reference.race.elf");
        assert_eq!(identity.background.value, "Sage");
        assert_eq!(
            identity.background.detail.map(|d| d.body),
            Some("reference.background.sage".to_string())
        );
    }

    #[test]
    fn name_ignores_nested_names() {
        let xml = r#"<character>
            <classes><id-00001><name>Wizard</name><level>3</level></id-00001></classes>
            <name>Ilsa</name>
        </character>"#;
        let identity = with_character(xml, |c| extract_identity(c));
        assert_eq!(identity.name, "Ilsa");
    }

    #[test]
    fn classes_keep_document_order() {
        let xml = r#"<character><classes>
            <id-00001>
                <name>Wizard</name><level>3</level><hddie>1d6</hddie>
                <shortcut><recordname>reference.class.wizard</recordname></shortcut>
            </id-00001>
            <id-00002><name>Fighter</name><level>1</level><hddie>1d10</hddie></id-00002>
        </classes></character>"#;
        let identity = with_character(xml, |c| extract_identity(c));

        let labels: Vec<&str> = identity.classes.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Wizard (3)", "Fighter (1)"]);

        let detail = identity.classes[0].detail.as_ref().expect("class detail");
        assert_eq!(detail.title, "Wizard (3)");
        assert_eq!(detail.body, "Hit Die: 1d6<br/>reference.class.wizard");
        assert_eq!(
            identity.classes[1].detail.as_ref().map(|d| d.body.as_str()),
            Some("Hit Die: 1d10<br/>")
        );
    }

    #[test]
    fn empty_record_yields_empty_identity() {
        let identity = with_character("<character/>", |c| extract_identity(c));
        assert_eq!(identity.name, "");
        assert_eq!(identity.race.value, "");
        assert!(identity.classes.is_empty());
    }
}
