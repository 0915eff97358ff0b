//! Power grouping engine.
//!
//! Reads every entry under `powers` and files it by group label, then level.
//! Groups appear in the order their first power appears in the record;
//! levels ascend numerically within a group, with unreadable levels last.

use charsheet_domain::{format_checkbox, PowerGroups, PowerLevel, PowerRecord};

use super::detail_builder::power_detail;
use crate::infrastructure::record::RecordNode;

pub fn extract_powers<N: RecordNode>(character: &N) -> PowerGroups {
    group_entries(&character.select_children("powers"))
}

/// Read and group raw power entries, in the order given.
pub fn group_entries<N: RecordNode>(entries: &[N]) -> PowerGroups {
    let groups = group_powers(entries.iter().map(read_power));
    tracing::debug!(
        groups = groups.len(),
        powers = groups.iter().count(),
        "Grouped spells and powers"
    );
    groups
}

/// File already-read powers into groups.
pub fn group_powers(powers: impl IntoIterator<Item = PowerRecord>) -> PowerGroups {
    powers.into_iter().collect()
}

/// Read one power entry, including its detail payload.
pub fn read_power<N: RecordNode>(entry: &N) -> PowerRecord {
    let name = entry.select_text("name");
    let level_text = entry.select_text("level");
    let level = PowerLevel::parse(&level_text);
    if level.is_unparsed() {
        tracing::warn!(power = %name, level = %level_text, "Power level is not a number");
    }

    let mut power = PowerRecord {
        name,
        casting_time: entry.select_text("castingtime"),
        components: entry.select_text("components"),
        range: entry.select_text("range"),
        duration: entry.select_text("duration"),
        ritual: format_checkbox(&entry.select_text("number")),
        description: entry.select_markup("description"),
        school: entry.select_text("school"),
        source: entry.select_text("source"),
        group_label: entry.select_text("group"),
        level,
        detail: None,
    };
    power.detail = Some(power_detail(&power));
    power
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::with_character;
    use charsheet_domain::HasDetail;

    fn power_entry(id: u32, name: &str, group: &str, level: &str) -> String {
        format!(
            "<id-{id:05}><name>{name}</name><group>{group}</group><level>{level}</level></id-{id:05}>"
        )
    }

    fn record(entries: &[String]) -> String {
        format!("<character><powers>{}</powers></character>", entries.concat())
    }

    fn labels(groups: &PowerGroups) -> Vec<(String, Vec<String>)> {
        groups
            .groups()
            .iter()
            .map(|group| {
                let levels = group
                    .levels()
                    .iter()
                    .map(|bucket| bucket.level().label())
                    .collect();
                (group.label().to_string(), levels)
            })
            .collect()
    }

    #[test]
    fn levels_ascend_within_a_group() {
        let xml = record(&[
            power_entry(1, "Fireball", "Wizard", "3"),
            power_entry(2, "Magic Missile", "Wizard", "1"),
        ]);
        let groups = with_character(&xml, |c| extract_powers(c));
        assert_eq!(
            labels(&groups),
            vec![(
                "Wizard".to_string(),
                vec!["Level 1".to_string(), "Level 3".to_string()]
            )]
        );
    }

    #[test]
    fn levels_sort_numerically() {
        let xml = record(&[
            power_entry(1, "Wish", "Wizard", "10"),
            power_entry(2, "Misty Step", "Wizard", "2"),
        ]);
        let groups = with_character(&xml, |c| extract_powers(c));
        let names: Vec<&str> = groups.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Misty Step", "Wish"]);
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let xml = record(&[
            power_entry(1, "Sacred Flame", "Cleric", "0"),
            power_entry(2, "Fire Bolt", "Wizard", "0"),
            power_entry(3, "Bless", "Cleric", "1"),
        ]);
        let groups = with_character(&xml, |c| extract_powers(c));
        let order: Vec<&str> = groups.groups().iter().map(|g| g.label()).collect();
        assert_eq!(order, vec!["Cleric", "Wizard"]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn unreadable_level_goes_last() {
        let xml = record(&[
            power_entry(1, "Odd Trick", "Innate", "at will"),
            power_entry(2, "Light", "Innate", " 0 "),
        ]);
        let groups = with_character(&xml, |c| extract_powers(c));
        assert_eq!(
            labels(&groups),
            vec![(
                "Innate".to_string(),
                vec!["Level 0".to_string(), "Level unknown".to_string()]
            )]
        );
    }

    #[test]
    fn ordinal_level_text_files_under_its_number() {
        let xml = record(&[
            power_entry(1, "Counterspell", "Wizard", "3rd"),
            power_entry(2, "Shield", "Wizard", "1st"),
        ]);
        let groups = with_character(&xml, |c| extract_powers(c));
        assert_eq!(
            labels(&groups),
            vec![(
                "Wizard".to_string(),
                vec!["Level 1".to_string(), "Level 3".to_string()]
            )]
        );
    }

    #[test]
    fn reads_fields_and_builds_detail() {
        let xml = r#"<character><powers><id-00001>
            <name>Detect Magic</name>
            <castingtime>1 action</castingtime>
            <components>V, S</components>
            <range>Self</range>
            <duration>Concentration, up to 10 minutes</duration>
            <number>0</number>
            <description><p>For the duration, you sense <i>magic</i>.</p></description>
            <school>Divination</school>
            <source>Wizard</source>
            <group>Spells (Wizard)</group>
            <level>1</level>
        </id-00001></powers></character>"#;
        let groups = with_character(xml, |c| extract_powers(c));
        let power = groups.iter().next().expect("one power");

        assert_eq!(power.name, "Detect Magic");
        assert_eq!(power.group_label, "Spells (Wizard)");
        assert_eq!(power.level, PowerLevel::Level(1));
        assert!(!power.ritual);
        assert!(power.shows_ritual_marker());
        assert_eq!(
            power.description,
            "<p>For the duration, you sense <i>magic</i>.</p>"
        );

        let detail = power.detail().expect("detail");
        assert_eq!(detail.title, "Detect Magic");
        assert!(detail.body.contains("Casting time: 1 action<br/>"));
        assert!(detail.body.contains("School: Divination"));
    }

    #[test]
    fn stored_ritual_flag_comes_from_number() {
        let xml = r#"<character><powers><id-00001><name>Alarm</name><number>1</number><level>1</level></id-00001></powers></character>"#;
        let groups = with_character(xml, |c| extract_powers(c));
        let power = groups.iter().next().expect("one power");
        assert!(power.ritual);
        assert!(!power.shows_ritual_marker());
    }

    #[test]
    fn every_entry_lands_in_exactly_one_bucket() {
        let xml = record(&[
            power_entry(1, "Shield", "Wizard", "1"),
            power_entry(2, "Guidance", "Cleric", "0"),
            power_entry(3, "Shield", "Wizard", "1"),
            power_entry(4, "Fly", "Wizard", "3"),
            power_entry(5, "Mystery", "Cleric", ""),
        ]);
        let groups = with_character(&xml, |c| extract_powers(c));

        let bucket_total: usize = groups
            .groups()
            .iter()
            .flat_map(|group| group.levels())
            .map(|bucket| bucket.powers().len())
            .sum();
        assert_eq!(bucket_total, 5);
        assert_eq!(groups.iter().count(), 5);

        let wizard = groups.group("Wizard").expect("wizard");
        let shields = wizard.level(PowerLevel::Level(1)).expect("level 1");
        assert_eq!(shields.powers().len(), 2);
    }

    #[test]
    fn no_powers_means_no_groups() {
        let groups = with_character("<character/>", |c| extract_powers(c));
        assert!(groups.is_empty());
    }
}
