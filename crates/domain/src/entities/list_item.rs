//! Labelled items: bulleted list entries and single labelled values.

use serde::Serialize;

use super::detail::{DetailPayload, HasDetail};

/// An entry in one of the sheet's lists (proficiencies, languages, traits,
/// features, feats, weapons, classes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub label: String,
    pub detail: Option<DetailPayload>,
}

impl ListItem {
    /// An item with no detail payload.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(label: impl Into<String>, detail: DetailPayload) -> Self {
        Self {
            label: label.into(),
            detail: Some(detail),
        }
    }
}

impl HasDetail for ListItem {
    fn detail(&self) -> Option<&DetailPayload> {
        self.detail.as_ref()
    }
}

/// A single labelled value such as "Armor class: 15" or "Deity: Tymora".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueField {
    pub label: String,
    pub value: String,
    pub detail: Option<DetailPayload>,
}

impl ValueField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            detail: None,
        }
    }

    /// Attach a detail payload.
    pub fn with_detail(mut self, detail: DetailPayload) -> Self {
        self.detail = Some(detail);
        self
    }
}

impl HasDetail for ValueField {
    fn detail(&self) -> Option<&DetailPayload> {
        self.detail.as_ref()
    }
}
