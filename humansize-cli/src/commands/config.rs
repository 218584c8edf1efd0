use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use humansize_core::UnitBase;

use crate::error::CliError;
use crate::settings;

/// Show the settings file and the base `format` would use.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();

    log::info!("{}", "humansize settings".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let base = settings::resolve_base(None, &path);
    log::info!(
        "  Default base:  {} ({} bytes per step)",
        base.if_supports_color(Stdout, |t| t.bold()),
        base.multiple(),
    );

    if let Some(contents) = settings::load_settings_string(&path) {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {line}");
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save the default unit base.
pub(crate) fn run_config_set_base(base: UnitBase) -> Result<(), CliError> {
    let path = settings::settings_path();
    settings::save_default_base(&path, Some(base))?;
    log::info!(
        "Default base set to {} in {}",
        base.if_supports_color(Stdout, |t| t.bold()),
        path.display(),
    );
    Ok(())
}

/// Remove the saved default unit base.
pub(crate) fn run_config_clear_base() -> Result<(), CliError> {
    let path = settings::settings_path();
    settings::save_default_base(&path, None)?;
    log::info!(
        "Default base cleared in {} (now {})",
        path.display(),
        UnitBase::default(),
    );
    Ok(())
}
