//! Character sheet renderer - command line entry point.
//!
//! Usage: `charsheet [--pretty] <record.xml> [section]`
//!
//! Prints the assembled sheet (or one section of it) as JSON on stdout.
//! Logs go to stderr.

use std::io::Write;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charsheet_engine::{render_record, RenderConfig, XmlRecord};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charsheet=info,charsheet_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RenderConfig::from_env(std::env::args().skip(1))?;
    tracing::debug!(?config, "Loaded render configuration");

    let record = XmlRecord::load(&config.record_path)?;
    let view = render_record(&record)
        .with_context(|| format!("Failed to render {}", config.record_path.display()))?;

    let json = match config.section {
        Some(kind) => {
            let section = view
                .section(kind)
                .with_context(|| format!("Section {kind} missing from view"))?;
            to_json(section, config.pretty)?
        }
        None => to_json(&view, config.pretty)?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write output")?;
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize sheet")
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides, then the working directory.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
