//! Character sheet engine library.
//!
//! Reads a Fantasy Grounds style character record and assembles the
//! read-only sheet view defined in `charsheet-domain`.
//!
//! ## Structure
//!
//! - `infrastructure/` - Record loading, node navigation and process configuration
//! - `use_cases/` - Section extraction, power grouping and view assembly

pub mod infrastructure;
pub mod use_cases;

/// Shared record fixtures for tests.
#[cfg(test)]
pub mod test_fixtures;

pub use infrastructure::config::{ConfigError, RenderConfig};
pub use infrastructure::record::{RecordError, RecordNode, XmlNode, XmlRecord};
pub use use_cases::{render_character, render_record};
