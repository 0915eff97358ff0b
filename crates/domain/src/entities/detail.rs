//! Detail payloads attached to sheet items.
//!
//! A payload is the title and body a view layer shows when the reader asks for
//! more about an item (a trait's rules text, a weapon's damage lines, a
//! spell's casting details). Payloads are built eagerly while the record is
//! read and live inside the item that owns them.

use serde::Serialize;

/// Supplementary content for a single sheet item.
///
/// `body` is markup. Descriptive text copied from the record is passed
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPayload {
    pub title: String,
    pub body: String,
}

impl DetailPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Pull-based access to an item's detail payload.
///
/// Implemented by every view-model item that may carry a payload so a view
/// layer can fetch it on demand without knowing the concrete item type.
pub trait HasDetail {
    /// The payload, if this item has one.
    fn detail(&self) -> Option<&DetailPayload>;

    /// Whether a payload is attached.
    fn has_detail(&self) -> bool {
        self.detail().is_some()
    }
}
