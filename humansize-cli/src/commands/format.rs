use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use humansize_core::{SizeError, UnitBase, approximate_size_with};

use crate::error::CliError;
use crate::settings;

pub(crate) fn format_line(size: i128, base: UnitBase) -> Result<String, SizeError> {
    let formatted = approximate_size_with(size, base)?;
    Ok(format!("{size} bytes = {formatted}"))
}

/// Format each size, reporting failures without stopping.
pub(crate) fn run_format(sizes: &[i128], base: Option<UnitBase>) -> Result<(), CliError> {
    let base = settings::resolve_base(base, &settings::settings_path());

    let mut failed = 0;
    for &size in sizes {
        match format_line(size, base) {
            Ok(line) => log::info!("{line}"),
            Err(e) => {
                failed += 1;
                log::warn!(
                    "{}: {}",
                    e.size().if_supports_color(Stdout, |t| t.bold()),
                    e
                );
            }
        }
    }

    if failed > 0 {
        return Err(CliError::FormatFailures(failed, sizes.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_per_base() {
        assert_eq!(
            format_line(1024, UnitBase::Binary).unwrap(),
            "1024 bytes = 1.0 KiB"
        );
        assert_eq!(
            format_line(1024, UnitBase::Decimal).unwrap(),
            "1024 bytes = 1.0 KB"
        );
        assert_eq!(format_line(7, UnitBase::Decimal).unwrap(), "7 bytes = 7 B");
    }

    #[test]
    fn errors_pass_through() {
        assert_eq!(
            format_line(-1, UnitBase::Binary).unwrap_err(),
            SizeError::InvalidArgument { size: -1 }
        );
        let huge = 1024i128.pow(9);
        assert!(matches!(
            format_line(huge, UnitBase::Binary),
            Err(SizeError::Overflow { .. })
        ));
    }
}
