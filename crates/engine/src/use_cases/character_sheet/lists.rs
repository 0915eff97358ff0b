//! List sections: proficiencies and languages, traits, features, feats and
//! weapons.
//!
//! Every list keeps the record's document order.

use charsheet_domain::{format_checkbox, DetailPayload, ListItem, ProficiencyBlock};

use super::detail_builder::{feat_detail, feature_detail, trait_detail, weapon_detail, DamageLine};
use crate::infrastructure::record::RecordNode;

pub fn extract_proficiencies<N: RecordNode>(character: &N) -> ProficiencyBlock {
    ProficiencyBlock {
        proficiencies: plain_names(character, "proficiencylist name"),
        languages: plain_names(character, "languagelist name"),
    }
}

fn plain_names<N: RecordNode>(character: &N, path: &str) -> Vec<ListItem> {
    character
        .select(path)
        .iter()
        .map(|name| ListItem::plain(name.text()))
        .collect()
}

pub fn extract_traits<N: RecordNode>(character: &N) -> Vec<ListItem> {
    detailed_items(character, "traitlist", |entry, name| {
        trait_detail(
            name,
            &entry.select_text("type"),
            &entry.select_text("source"),
            &entry.select_markup("text"),
        )
    })
}

pub fn extract_features<N: RecordNode>(character: &N) -> Vec<ListItem> {
    detailed_items(character, "featurelist", |entry, name| {
        feature_detail(
            name,
            &entry.select_text("source"),
            &entry.select_text("level"),
            &entry.select_markup("text"),
        )
    })
}

pub fn extract_feats<N: RecordNode>(character: &N) -> Vec<ListItem> {
    detailed_items(character, "featlist", |entry, name| {
        feat_detail(name, &entry.select_markup("text"))
    })
}

pub fn extract_weapons<N: RecordNode>(character: &N) -> Vec<ListItem> {
    detailed_items(character, "weaponlist", |entry, name| {
        let damage: Vec<DamageLine> = entry
            .select_children("damagelist")
            .iter()
            .map(|line| DamageLine {
                kind: line.select_text("type"),
                dice: line.select_text("dice"),
                stat: line.select_text("stat"),
                bonus: line.select_text("bonus"),
            })
            .collect();
        weapon_detail(
            name,
            &entry.select_text("attackbonus"),
            &damage,
            &entry.select_text("properties"),
            format_checkbox(&entry.select_text("prof")),
        )
    })
}

/// One item per child of `list_path`, labelled by its `name`.
fn detailed_items<N, F>(character: &N, list_path: &str, detail: F) -> Vec<ListItem>
where
    N: RecordNode,
    F: Fn(&N, &str) -> DetailPayload,
{
    character
        .select_children(list_path)
        .iter()
        .map(|entry| {
            let name = entry.select_text("name");
            let payload = detail(entry, &name);
            ListItem::with_detail(name, payload)
        })
        .collect()
}
