//! Command-line render configuration.
//!
//! Settings come from command-line arguments first, then from environment
//! variables (a `.env` file is loaded by `main` before this runs):
//!
//! | Argument | Variable | Meaning |
//! |----------|----------|---------|
//! | 1st | `CHARSHEET_RECORD` | Path to the character record XML |
//! | 2nd | `CHARSHEET_SECTION` | Only print this section (e.g. `skills`) |
//! | `--pretty` | `CHARSHEET_PRETTY` | Pretty-print the JSON output |

use std::path::PathBuf;

use charsheet_domain::{DomainError, SectionKind};

pub const RECORD_VAR: &str = "CHARSHEET_RECORD";
pub const SECTION_VAR: &str = "CHARSHEET_SECTION";
pub const PRETTY_VAR: &str = "CHARSHEET_PRETTY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No character record given; pass a path or set CHARSHEET_RECORD")]
    MissingRecordPath,

    #[error("Invalid section: {0}")]
    InvalidSection(#[from] DomainError),
}

/// What to render and how to print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub record_path: PathBuf,
    pub section: Option<SectionKind>,
    pub pretty: bool,
}

impl RenderConfig {
    /// Build from process arguments (without the program name) and the
    /// process environment.
    pub fn from_env(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    /// Build from explicit argument and variable sources.
    pub fn from_sources(
        args: impl IntoIterator<Item = String>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut pretty = var(PRETTY_VAR).map(|v| is_truthy(&v)).unwrap_or(false);
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--pretty" {
                pretty = true;
            } else {
                positional.push(arg);
            }
        }
        let mut positional = positional.into_iter();

        let record_path = positional
            .next()
            .or_else(|| var(RECORD_VAR))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingRecordPath)?;

        let section = positional
            .next()
            .or_else(|| var(SECTION_VAR))
            .filter(|section| !section.trim().is_empty())
            .map(|section| section.parse::<SectionKind>())
            .transpose()?;

        Ok(Self {
            record_path,
            section,
            pretty,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
