//! Record fixtures and helpers for tests.
//!
//! Fixture records live in the crate's `test_data/` directory and are
//! compiled in so tests do not depend on the working directory.

use crate::infrastructure::record::{XmlNode, XmlRecord};

/// A level 5 wizard with every sheet section populated.
pub const SAMPLE_CHARACTER: &str = include_str!("../../test_data/characters/ilsa.xml");

/// Parse `xml` and run `f` against its `<character>` element.
///
/// # Panics
///
/// Panics if the XML is malformed or has no `<character>` element.
pub fn with_character<T>(xml: &str, f: impl FnOnce(&XmlNode<'_, '_>) -> T) -> T {
    XmlRecord::new(xml)
        .with_character(f)
        .expect("fixture should contain a <character> element")
}
