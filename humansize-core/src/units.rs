use serde::{Deserialize, Serialize};

static DECIMAL_SUFFIXES: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
static BINARY_SUFFIXES: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Which multiple one step up the unit scale represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitBase {
    /// Powers of 1024 (KiB, MiB, ...)
    #[default]
    Binary,
    /// Powers of 1000 (KB, MB, ...)
    Decimal,
}

impl UnitBase {
    /// Map the "a kilobyte is 1024 bytes" flag onto a base.
    pub fn from_base1024(base1024: bool) -> Self {
        if base1024 {
            Self::Binary
        } else {
            Self::Decimal
        }
    }

    /// Inverse of [`UnitBase::from_base1024`].
    pub fn is_base1024(&self) -> bool {
        matches!(self, Self::Binary)
    }

    /// The divisor for one step up the scale.
    pub fn multiple(&self) -> u32 {
        match self {
            Self::Binary => 1024,
            Self::Decimal => 1000,
        }
    }

    /// Unit suffixes from kilo-scale up to yotta-scale.
    pub fn suffixes(&self) -> &'static [&'static str; 8] {
        match self {
            Self::Binary => &BINARY_SUFFIXES,
            Self::Decimal => &DECIMAL_SUFFIXES,
        }
    }

    /// Lowercase name, as used on the command line and in settings files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
        }
    }
}

impl std::fmt::Display for UnitBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string cannot be parsed into a `UnitBase`.
#[derive(Debug, Clone)]
pub struct UnitBaseParseError(pub String);

impl std::fmt::Display for UnitBaseParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown unit base: '{}'", self.0)
    }
}

impl std::error::Error for UnitBaseParseError {}

impl std::str::FromStr for UnitBase {
    type Err = UnitBaseParseError;

    /// Parse a base from its name, its multiple, or the IEC/SI abbreviation
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "binary" | "iec" | "1024" => Ok(Self::Binary),
            "decimal" | "si" | "1000" => Ok(Self::Decimal),
            _ => Err(UnitBaseParseError(s.to_string())),
        }
    }
}
