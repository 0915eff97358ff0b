//! Detail payload construction.
//!
//! Builds the title and body shown when a reader asks for more about a sheet
//! item. Bodies are markup; descriptive text from the record is inserted
//! unescaped because the record's markup is trusted as-is.

use charsheet_domain::{DetailPayload, PowerRecord};

use crate::infrastructure::record::RecordNode;

/// Separator between lines of a detail body.
pub const LINE_BREAK: &str = "<br/>";

pub fn build_detail(title: impl Into<String>, body: impl Into<String>) -> DetailPayload {
    DetailPayload::new(title, body)
}

/// Title for a value's detail: the optional caption followed by the value
/// (`"Armor Class 15"`), or the value alone.
pub fn titled(caption: Option<&str>, value: &str) -> String {
    match caption {
        Some(caption) => format!("{caption} {value}"),
        None => value.to_string(),
    }
}

/// `"{tag}: {inner markup}"` for every child of the nodes at `path`, one per line.
pub fn flat_list<N: RecordNode>(node: &N, path: &str) -> String {
    node.select_children(path)
        .iter()
        .map(|child| format!("{}: {}", child.tag_name(), child.inner_markup()))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

pub fn checkbox_markup(checked: bool) -> &'static str {
    if checked {
        r#"<input type="checkbox" checked disabled />"#
    } else {
        r#"<input type="checkbox" disabled />"#
    }
}

/// Ability save tooltip.
pub fn ability_save_detail(score: &str, save_modifier: &str) -> DetailPayload {
    build_detail(
        titled(Some("Save modifier"), score),
        format!("Save modifier: {save_modifier}"),
    )
}

/// Class entry: hit die and the class's record link.
pub fn class_detail(label: &str, hit_die: &str, link: &str) -> DetailPayload {
    build_detail(label, format!("Hit Die: {hit_die}{LINE_BREAK}{link}"))
}

/// Trait body: `[type source]` prefix then the trait's own text.
pub fn trait_detail(name: &str, kind: &str, source: &str, text: &str) -> DetailPayload {
    build_detail(name, format!("[{kind} {source}] {text}"))
}

/// Feature body: `[source level]` prefix then the feature's own text.
pub fn feature_detail(name: &str, source: &str, level: &str, text: &str) -> DetailPayload {
    build_detail(name, format!("[{source} {level}] {text}"))
}

pub fn feat_detail(name: &str, text: &str) -> DetailPayload {
    build_detail(name, text)
}

/// One damage line of a weapon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageLine {
    pub kind: String,
    pub dice: String,
    pub stat: String,
    pub bonus: String,
}

/// Weapon body. Only the weapon's own numbers are shown; the character's
/// ability and proficiency bonuses are not added in.
pub fn weapon_detail(
    name: &str,
    attack_bonus: &str,
    damage: &[DamageLine],
    properties: &str,
    proficient: bool,
) -> DetailPayload {
    let damage_items: String = damage
        .iter()
        .map(|line| {
            format!(
                r#"<li class="statblock">{} {}+{}+{}</li>"#,
                line.kind, line.dice, line.stat, line.bonus
            )
        })
        .collect();

    let body = format!(
        concat!(
            "- Weapon properties only, actual attack needs to add character bonuses --\n",
            "<p class=\"statblock\">Attack: {attack}{br}\nDamage</p><ul>{damage}</ul>\n",
            "<p class=\"statblock\">\nProperties: {properties}{br}\nProficient: {proficient}</p>"
        ),
        attack = attack_bonus,
        br = LINE_BREAK,
        damage = damage_items,
        properties = properties,
        proficient = checkbox_markup(proficient),
    );
    build_detail(name, body)
}

/// Spell or power body. The ritual box follows
/// [`PowerRecord::shows_ritual_marker`].
pub fn power_detail(power: &PowerRecord) -> DetailPayload {
    let body = format!(
        concat!(
            "<p class=\"statblock\">\n",
            "  Casting time: {casting_time}{br}\n",
            "  Components: {components}{br}\n",
            "  Range: {range}{br}\n",
            "  Duration: {duration}{br}\n",
            "  Ritual: {ritual}\n",
            "</p>\n",
            "<div>{description}</div>\n",
            "<p>\n",
            "  School: {school}\n",
            "  Source: {source}\n",
            "</p>"
        ),
        casting_time = power.casting_time,
        components = power.components,
        range = power.range,
        duration = power.duration,
        ritual = checkbox_markup(power.shows_ritual_marker()),
        description = power.description,
        school = power.school,
        source = power.source,
        br = LINE_BREAK,
    );
    build_detail(power.name.as_str(), body)
}
