//! Character record access.
//!
//! `RecordNode` is the seam between the sheet pipeline and the tree it reads;
//! `XmlNode` implements it over `roxmltree`.

mod error;
mod navigator;
mod xml;

pub use error::RecordError;
pub use navigator::RecordNode;
pub use xml::{find_character, XmlNode, XmlRecord};
