//! Persistent settings (`~/.config/humansize/settings.toml`).
//!
//! The only recognised key today is the default unit base:
//!
//! ```toml
//! [format]
//! base = "decimal"
//! ```

use std::path::{Path, PathBuf};

use humansize_core::UnitBase;
use serde::Deserialize;

use crate::error::CliError;

/// Canonical path to the settings file: `~/.config/humansize/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("humansize").join("settings.toml")
}

/// Resolve the unit base using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `format.base` in the settings file
/// 3. `UnitBase::default()` (binary)
pub(crate) fn resolve_base(cli_override: Option<UnitBase>, settings: &Path) -> UnitBase {
    if let Some(base) = cli_override {
        log::debug!("Using unit base from command line: {base}");
        return base;
    }
    if let Some(base) = load_default_base(settings) {
        log::debug!("Using unit base from {}: {base}", settings.display());
        return base;
    }
    log::debug!("No saved unit base, using {}", UnitBase::default());
    UnitBase::default()
}

fn load_document(settings: &Path) -> Option<toml::Value> {
    let contents = std::fs::read_to_string(settings).ok()?;
    match contents.parse() {
        Ok(doc) => Some(doc),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {e}", settings.display());
            None
        }
    }
}

/// Read `format.base` from the settings file, if set and valid.
pub(crate) fn load_default_base(settings: &Path) -> Option<UnitBase> {
    let doc = load_document(settings)?;
    let raw = doc.get("format")?.get("base")?.clone();
    match UnitBase::deserialize(raw) {
        Ok(base) => Some(base),
        Err(e) => {
            log::warn!("Ignoring format.base in {}: {e}", settings.display());
            None
        }
    }
}

/// Save (or clear) the default unit base.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are preserved.
pub(crate) fn save_default_base(settings: &Path, base: Option<UnitBase>) -> Result<(), CliError> {
    let mut doc =
        load_document(settings).unwrap_or_else(|| toml::Value::Table(Default::default()));

    let table = doc
        .as_table_mut()
        .ok_or_else(|| CliError::config("settings root is not a table"))?;
    let format = table
        .entry("format")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let format_table = format
        .as_table_mut()
        .ok_or_else(|| CliError::config("[format] is not a table"))?;

    match base {
        Some(b) => {
            let value = toml::Value::try_from(b).map_err(|e| CliError::config(e.to_string()))?;
            format_table.insert("base".to_string(), value);
        }
        None => {
            format_table.remove("base");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(|e| CliError::config(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string(settings: &Path) -> Option<String> {
    let doc = load_document(settings)?;
    toml::to_string_pretty(&doc).ok()
}
